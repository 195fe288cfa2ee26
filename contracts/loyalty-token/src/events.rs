use soroban_sdk::{contractevent, Address, Env};

#[contractevent]
pub struct TokenInitializedEvent {
    pub admin: Address,
    pub minter: Address,
    pub timestamp: u64,
}

pub fn publish_token_initialized_event(
    env: &Env,
    admin: Address,
    minter: Address,
    timestamp: u64,
) {
    TokenInitializedEvent {
        admin,
        minter,
        timestamp,
    }
    .publish(env);
}

#[contractevent]
pub struct MintedEvent {
    pub to: Address,
    pub amount: i128,
    pub total_supply: i128,
}

pub fn publish_minted_event(env: &Env, to: Address, amount: i128, total_supply: i128) {
    MintedEvent {
        to,
        amount,
        total_supply,
    }
    .publish(env);
}

#[contractevent]
pub struct BurnedEvent {
    pub from: Address,
    pub amount: i128,
    pub total_supply: i128,
}

pub fn publish_burned_event(env: &Env, from: Address, amount: i128, total_supply: i128) {
    BurnedEvent {
        from,
        amount,
        total_supply,
    }
    .publish(env);
}

#[contractevent]
pub struct TransferredEvent {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

pub fn publish_transferred_event(env: &Env, from: Address, to: Address, amount: i128) {
    TransferredEvent { from, to, amount }.publish(env);
}

#[contractevent]
pub struct MinterChangedEvent {
    pub new_minter: Address,
    pub timestamp: u64,
}

pub fn publish_minter_changed_event(env: &Env, new_minter: Address, timestamp: u64) {
    MinterChangedEvent {
        new_minter,
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
