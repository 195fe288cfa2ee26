use crate::types::Restaurant;
use soroban_sdk::{contracttrait, Address, Bytes, Env};

#[contracttrait]
pub trait RestaurantRegistryTrait {
    fn initialize(env: Env, admin: Address);

    fn register(env: Env, caller: Address, owner: Address, metadata: Bytes) -> u64;
    fn set_metadata(env: Env, caller: Address, restaurant_id: u64, metadata: Bytes);
    fn deactivate(env: Env, caller: Address, restaurant_id: u64);
    fn reactivate(env: Env, caller: Address, restaurant_id: u64);

    fn get(env: Env, restaurant_id: u64) -> Restaurant;
    fn is_active(env: Env, restaurant_id: u64) -> bool;
    fn get_count(env: Env) -> u64;
    fn get_admin(env: Env) -> Address;
}
