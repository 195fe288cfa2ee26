use crate::components::{core as core_component, settlement as settlement_component};
use crate::errors::ContractError;
use crate::events;
use crate::interface::PaymentEscrowTrait;
use crate::types::{DataKey, Escrow};
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env};

#[contract]
pub struct PaymentEscrow;

#[contractimpl]
impl PaymentEscrowTrait for PaymentEscrow {
    fn initialize(env: Env, admin: Address, treasury: Address, token: Address, fee_bps: u32) {
        if env.storage().persistent().has(&DataKey::Admin) {
            panic_with_error!(&env, ContractError::AlreadyInitialized);
        }
        core_component::assert_valid_fee(&env, fee_bps);

        env.storage().persistent().set(&DataKey::Admin, &admin);
        env.storage().persistent().set(&DataKey::Treasury, &treasury);
        env.storage().persistent().set(&DataKey::Token, &token);
        env.storage().persistent().set(&DataKey::FeeBps, &fee_bps);

        events::publish_escrow_initialized_event(
            &env,
            admin,
            treasury,
            token,
            fee_bps,
            env.ledger().timestamp(),
        );
    }

    fn escrow(env: Env, payer: Address, order_id: u64, amount: i128) {
        settlement_component::escrow_funds(&env, &payer, order_id, amount)
    }

    fn release(env: Env, caller: Address, order_id: u64, restaurant: Address) {
        settlement_component::release(&env, &caller, order_id, &restaurant)
    }

    fn refund(env: Env, caller: Address, order_id: u64) {
        settlement_component::refund(&env, &caller, order_id)
    }

    fn set_fee_bps(env: Env, caller: Address, fee_bps: u32) {
        caller.require_auth();
        core_component::assert_admin(&env, &caller);
        core_component::assert_valid_fee(&env, fee_bps);
        core_component::set_fee_bps(&env, fee_bps);

        events::publish_fee_updated_event(&env, fee_bps, env.ledger().timestamp());
    }

    fn set_admin(env: Env, caller: Address, new_admin: Address) {
        caller.require_auth();
        core_component::assert_admin(&env, &caller);
        core_component::set_admin(&env, &new_admin);

        events::publish_admin_changed_event(&env, new_admin, env.ledger().timestamp());
    }

    fn get_escrow(env: Env, order_id: u64) -> Escrow {
        settlement_component::get_escrow(&env, order_id)
    }

    fn fee_bps(env: Env) -> u32 {
        core_component::get_fee_bps(&env)
    }

    fn get_admin(env: Env) -> Address {
        core_component::get_admin(&env)
    }

    fn get_treasury(env: Env) -> Address {
        core_component::get_treasury(&env)
    }

    fn get_token(env: Env) -> Address {
        core_component::get_token(&env)
    }
}
