use soroban_sdk::{contractevent, Address, Env};

#[contractevent]
pub struct RegistryInitializedEvent {
    pub admin: Address,
    pub timestamp: u64,
}

pub fn publish_registry_initialized_event(env: &Env, admin: Address, timestamp: u64) {
    RegistryInitializedEvent { admin, timestamp }.publish(env);
}

#[contractevent]
pub struct RestaurantRegisteredEvent {
    pub restaurant_id: u64,
    pub owner: Address,
    pub timestamp: u64,
}

pub fn publish_restaurant_registered_event(
    env: &Env,
    restaurant_id: u64,
    owner: Address,
    timestamp: u64,
) {
    RestaurantRegisteredEvent {
        restaurant_id,
        owner,
        timestamp,
    }
    .publish(env);
}

#[contractevent]
pub struct MetadataUpdatedEvent {
    pub restaurant_id: u64,
    pub timestamp: u64,
}

pub fn publish_metadata_updated_event(env: &Env, restaurant_id: u64, timestamp: u64) {
    MetadataUpdatedEvent {
        restaurant_id,
        timestamp,
    }
    .publish(env);
}

#[contractevent]
pub struct ActivationChangedEvent {
    pub restaurant_id: u64,
    pub active: bool,
    pub timestamp: u64,
}

pub fn publish_activation_changed_event(
    env: &Env,
    restaurant_id: u64,
    active: bool,
    timestamp: u64,
) {
    ActivationChangedEvent {
        restaurant_id,
        active,
        timestamp,
    }
    .publish(env);
}
