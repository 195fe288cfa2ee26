use crate::components::core;
use crate::errors::ContractError;
use crate::events;
use crate::types::{DataKey, Restaurant};
use soroban_sdk::{panic_with_error, Address, Bytes, Env};

pub fn register(env: &Env, caller: &Address, owner: &Address, metadata: &Bytes) -> u64 {
    caller.require_auth();
    core::assert_admin(env, caller);

    let count: u64 = env.storage().persistent().get(&DataKey::Count).unwrap_or(0);
    let id = count + 1;

    let restaurant = Restaurant {
        id,
        owner: owner.clone(),
        metadata: metadata.clone(),
        active: true,
        registered_at: env.ledger().timestamp(),
    };

    env.storage()
        .persistent()
        .set(&DataKey::Restaurant(id), &restaurant);
    env.storage().persistent().set(&DataKey::Count, &id);

    events::publish_restaurant_registered_event(
        env,
        id,
        owner.clone(),
        env.ledger().timestamp(),
    );

    id
}

pub fn get(env: &Env, restaurant_id: u64) -> Restaurant {
    env.storage()
        .persistent()
        .get(&DataKey::Restaurant(restaurant_id))
        .unwrap_or_else(|| panic_with_error!(env, ContractError::RestaurantNotFound))
}

pub fn get_count(env: &Env) -> u64 {
    env.storage().persistent().get(&DataKey::Count).unwrap_or(0)
}

pub fn set_metadata(env: &Env, caller: &Address, restaurant_id: u64, metadata: &Bytes) {
    caller.require_auth();
    core::assert_admin(env, caller);

    let mut restaurant = get(env, restaurant_id);
    restaurant.metadata = metadata.clone();
    env.storage()
        .persistent()
        .set(&DataKey::Restaurant(restaurant_id), &restaurant);

    events::publish_metadata_updated_event(env, restaurant_id, env.ledger().timestamp());
}

pub fn set_active(env: &Env, caller: &Address, restaurant_id: u64, active: bool) {
    caller.require_auth();
    core::assert_admin(env, caller);

    let mut restaurant = get(env, restaurant_id);
    restaurant.active = active;
    env.storage()
        .persistent()
        .set(&DataKey::Restaurant(restaurant_id), &restaurant);

    events::publish_activation_changed_event(env, restaurant_id, active, env.ledger().timestamp());
}
