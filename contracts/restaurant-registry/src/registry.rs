use crate::components::{core as core_component, directory as directory_component};
use crate::errors::ContractError;
use crate::events;
use crate::interface::RestaurantRegistryTrait;
use crate::types::{DataKey, Restaurant};
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Bytes, Env};

#[contract]
pub struct RestaurantRegistry;

#[contractimpl]
impl RestaurantRegistryTrait for RestaurantRegistry {
    fn initialize(env: Env, admin: Address) {
        if env.storage().persistent().has(&DataKey::Admin) {
            panic_with_error!(&env, ContractError::AlreadyInitialized);
        }
        env.storage().persistent().set(&DataKey::Admin, &admin);
        env.storage().persistent().set(&DataKey::Count, &0u64);

        events::publish_registry_initialized_event(&env, admin, env.ledger().timestamp());
    }

    fn register(env: Env, caller: Address, owner: Address, metadata: Bytes) -> u64 {
        directory_component::register(&env, &caller, &owner, &metadata)
    }

    fn set_metadata(env: Env, caller: Address, restaurant_id: u64, metadata: Bytes) {
        directory_component::set_metadata(&env, &caller, restaurant_id, &metadata)
    }

    fn deactivate(env: Env, caller: Address, restaurant_id: u64) {
        directory_component::set_active(&env, &caller, restaurant_id, false)
    }

    fn reactivate(env: Env, caller: Address, restaurant_id: u64) {
        directory_component::set_active(&env, &caller, restaurant_id, true)
    }

    fn get(env: Env, restaurant_id: u64) -> Restaurant {
        directory_component::get(&env, restaurant_id)
    }

    fn is_active(env: Env, restaurant_id: u64) -> bool {
        directory_component::get(&env, restaurant_id).active
    }

    fn get_count(env: Env) -> u64 {
        directory_component::get_count(&env)
    }

    fn get_admin(env: Env) -> Address {
        core_component::get_admin(&env)
    }
}
