use crate::types::OrderStatus;
use soroban_sdk::{contractevent, Address, Env};

#[contractevent]
pub struct LifecycleInitializedEvent {
    pub admin: Address,
    pub loyalty_token: Address,
    pub rewards_enabled: bool,
    pub timestamp: u64,
}

pub fn publish_lifecycle_initialized_event(
    env: &Env,
    admin: Address,
    loyalty_token: Address,
    rewards_enabled: bool,
    timestamp: u64,
) {
    LifecycleInitializedEvent {
        admin,
        loyalty_token,
        rewards_enabled,
        timestamp,
    }
    .publish(env);
}

#[contractevent]
pub struct OrderPlacedEvent {
    pub order_id: u64,
    pub customer: Address,
    pub restaurant_id: u64,
    pub total_amount: i128,
    pub timestamp: u64,
}

pub fn publish_order_placed_event(
    env: &Env,
    order_id: u64,
    customer: Address,
    restaurant_id: u64,
    total_amount: i128,
    timestamp: u64,
) {
    OrderPlacedEvent {
        order_id,
        customer,
        restaurant_id,
        total_amount,
        timestamp,
    }
    .publish(env);
}

#[contractevent]
pub struct StatusAdvancedEvent {
    pub order_id: u64,
    pub from: OrderStatus,
    pub to: OrderStatus,
    pub timestamp: u64,
}

pub fn publish_status_advanced_event(
    env: &Env,
    order_id: u64,
    from: OrderStatus,
    to: OrderStatus,
    timestamp: u64,
) {
    StatusAdvancedEvent {
        order_id,
        from,
        to,
        timestamp,
    }
    .publish(env);
}

#[contractevent]
pub struct OrderCancelledEvent {
    pub order_id: u64,
    pub caller: Address,
    pub timestamp: u64,
}

pub fn publish_order_cancelled_event(env: &Env, order_id: u64, caller: Address, timestamp: u64) {
    OrderCancelledEvent {
        order_id,
        caller,
        timestamp,
    }
    .publish(env);
}

#[contractevent]
pub struct RewardMintedEvent {
    pub order_id: u64,
    pub customer: Address,
    pub reward: i128,
}

pub fn publish_reward_minted_event(env: &Env, order_id: u64, customer: Address, reward: i128) {
    RewardMintedEvent {
        order_id,
        customer,
        reward,
    }
    .publish(env);
}

#[contractevent]
pub struct RewardsToggledEvent {
    pub enabled: bool,
    pub timestamp: u64,
}

pub fn publish_rewards_toggled_event(env: &Env, enabled: bool, timestamp: u64) {
    RewardsToggledEvent { enabled, timestamp }.publish(env);
}
