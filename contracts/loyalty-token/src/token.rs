use crate::components::{balance as balance_component, core as core_component};
use crate::errors::ContractError;
use crate::events;
use crate::interface::LoyaltyTokenTrait;
use crate::types::{DataKey, TokenMetadata};
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String};

#[contract]
pub struct LoyaltyToken;

#[contractimpl]
impl LoyaltyTokenTrait for LoyaltyToken {
    fn initialize(env: Env, admin: Address, minter: Address) {
        if env.storage().persistent().has(&DataKey::Admin) {
            panic_with_error!(&env, ContractError::AlreadyInitialized);
        }

        let metadata = TokenMetadata {
            name: String::from_str(&env, "Bite Rewards"),
            symbol: String::from_str(&env, "BITE"),
            decimals: 7,
        };

        env.storage().persistent().set(&DataKey::Admin, &admin);
        env.storage().persistent().set(&DataKey::Minter, &minter);
        env.storage().persistent().set(&DataKey::TotalSupply, &0i128);
        env.storage().persistent().set(&DataKey::Metadata, &metadata);

        events::publish_token_initialized_event(&env, admin, minter, env.ledger().timestamp());
    }

    fn mint(env: Env, caller: Address, to: Address, amount: i128) {
        caller.require_auth();
        core_component::assert_minter(&env, &caller);
        balance_component::mint(&env, &to, amount);
    }

    fn burn(env: Env, from: Address, amount: i128) {
        from.require_auth();
        balance_component::burn(&env, &from, amount);
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        balance_component::transfer(&env, &from, &to, amount);
    }

    fn set_minter(env: Env, caller: Address, new_minter: Address) {
        caller.require_auth();
        core_component::assert_admin(&env, &caller);
        core_component::set_minter(&env, &new_minter);
        events::publish_minter_changed_event(&env, new_minter, env.ledger().timestamp());
    }

    fn set_admin(env: Env, caller: Address, new_admin: Address) {
        caller.require_auth();
        core_component::assert_admin(&env, &caller);
        core_component::set_admin(&env, &new_admin);
        events::publish_admin_changed_event(&env, new_admin, env.ledger().timestamp());
    }

    fn balance(env: Env, account: Address) -> i128 {
        balance_component::balance_of(&env, &account)
    }

    fn total_supply(env: Env) -> i128 {
        balance_component::total_supply(&env)
    }

    fn metadata(env: Env) -> TokenMetadata {
        core_component::get_metadata(&env)
    }

    fn name(env: Env) -> String {
        core_component::get_metadata(&env).name
    }

    fn symbol(env: Env) -> String {
        core_component::get_metadata(&env).symbol
    }

    fn decimals(env: Env) -> u32 {
        core_component::get_metadata(&env).decimals
    }

    fn get_admin(env: Env) -> Address {
        core_component::get_admin(&env)
    }

    fn get_minter(env: Env) -> Address {
        core_component::get_minter(&env)
    }
}
