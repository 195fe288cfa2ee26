use crate::components::{core as core_component, lifecycle as lifecycle_component};
use crate::errors::ContractError;
use crate::events;
use crate::interface::OrderLifecycleTrait;
use crate::types::{DataKey, Order, OrderStatus};
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env};

#[contract]
pub struct OrderLifecycle;

#[contractimpl]
impl OrderLifecycleTrait for OrderLifecycle {
    fn initialize(env: Env, admin: Address, loyalty_token: Address, rewards_enabled: bool) {
        if env.storage().persistent().has(&DataKey::Admin) {
            panic_with_error!(&env, ContractError::AlreadyInitialized);
        }

        env.storage().persistent().set(&DataKey::Admin, &admin);
        env.storage()
            .persistent()
            .set(&DataKey::LoyaltyToken, &loyalty_token);
        env.storage()
            .persistent()
            .set(&DataKey::RewardsEnabled, &rewards_enabled);
        env.storage().persistent().set(&DataKey::Count, &0u64);

        events::publish_lifecycle_initialized_event(
            &env,
            admin,
            loyalty_token,
            rewards_enabled,
            env.ledger().timestamp(),
        );
    }

    fn place_order(env: Env, customer: Address, restaurant_id: u64, total_amount: i128) -> u64 {
        lifecycle_component::place_order(&env, &customer, restaurant_id, total_amount)
    }

    fn advance_status(env: Env, caller: Address, order_id: u64, next_status: OrderStatus) {
        lifecycle_component::advance_status(&env, &caller, order_id, next_status)
    }

    fn cancel(env: Env, caller: Address, order_id: u64) {
        lifecycle_component::cancel(&env, &caller, order_id)
    }

    fn set_rewards_enabled(env: Env, caller: Address, enabled: bool) {
        caller.require_auth();
        core_component::assert_admin(&env, &caller);
        core_component::set_rewards_enabled(&env, enabled);

        events::publish_rewards_toggled_event(&env, enabled, env.ledger().timestamp());
    }

    fn get_order(env: Env, order_id: u64) -> Order {
        lifecycle_component::get_order(&env, order_id)
    }

    fn get_order_count(env: Env) -> u64 {
        lifecycle_component::get_count(&env)
    }

    fn get_admin(env: Env) -> Address {
        core_component::get_admin(&env)
    }

    fn get_loyalty_token(env: Env) -> Address {
        core_component::get_loyalty_token(&env)
    }

    fn is_rewards_enabled(env: Env) -> bool {
        core_component::is_rewards_enabled(&env)
    }
}
