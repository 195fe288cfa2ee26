use soroban_sdk::{contractevent, Address, Env};

#[contractevent]
pub struct EscrowInitializedEvent {
    pub admin: Address,
    pub treasury: Address,
    pub token: Address,
    pub fee_bps: u32,
    pub timestamp: u64,
}

pub fn publish_escrow_initialized_event(
    env: &Env,
    admin: Address,
    treasury: Address,
    token: Address,
    fee_bps: u32,
    timestamp: u64,
) {
    EscrowInitializedEvent {
        admin,
        treasury,
        token,
        fee_bps,
        timestamp,
    }
    .publish(env);
}

#[contractevent]
pub struct FundsEscrowedEvent {
    pub order_id: u64,
    pub payer: Address,
    pub amount: i128,
    pub timestamp: u64,
}

pub fn publish_funds_escrowed_event(
    env: &Env,
    order_id: u64,
    payer: Address,
    amount: i128,
    timestamp: u64,
) {
    FundsEscrowedEvent {
        order_id,
        payer,
        amount,
        timestamp,
    }
    .publish(env);
}

#[contractevent]
pub struct FundsReleasedEvent {
    pub order_id: u64,
    pub restaurant: Address,
    pub restaurant_share: i128,
    pub fee: i128,
    pub timestamp: u64,
}

pub fn publish_funds_released_event(
    env: &Env,
    order_id: u64,
    restaurant: Address,
    restaurant_share: i128,
    fee: i128,
    timestamp: u64,
) {
    FundsReleasedEvent {
        order_id,
        restaurant,
        restaurant_share,
        fee,
        timestamp,
    }
    .publish(env);
}

#[contractevent]
pub struct FundsRefundedEvent {
    pub order_id: u64,
    pub payer: Address,
    pub amount: i128,
    pub timestamp: u64,
}

pub fn publish_funds_refunded_event(
    env: &Env,
    order_id: u64,
    payer: Address,
    amount: i128,
    timestamp: u64,
) {
    FundsRefundedEvent {
        order_id,
        payer,
        amount,
        timestamp,
    }
    .publish(env);
}

#[contractevent]
pub struct AdminChangedEvent {
    pub new_admin: Address,
    pub timestamp: u64,
}

pub fn publish_admin_changed_event(env: &Env, new_admin: Address, timestamp: u64) {
    AdminChangedEvent {
        new_admin,
        timestamp,
    }
    .publish(env);
}

#[contractevent]
pub struct FeeUpdatedEvent {
    pub fee_bps: u32,
    pub timestamp: u64,
}

pub fn publish_fee_updated_event(env: &Env, fee_bps: u32, timestamp: u64) {
    FeeUpdatedEvent { fee_bps, timestamp }.publish(env);
}
