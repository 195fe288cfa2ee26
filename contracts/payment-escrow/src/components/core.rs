use crate::errors::ContractError;
use crate::types::DataKey;
use soroban_sdk::{panic_with_error, Address, Env};

pub const MAX_FEE_BPS: u32 = 10_000;

pub fn get_admin(env: &Env) -> Address {
    env.storage()
        .persistent()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| panic_with_error!(env, ContractError::NotInitialized))
}

pub fn get_treasury(env: &Env) -> Address {
    env.storage()
        .persistent()
        .get(&DataKey::Treasury)
        .unwrap_or_else(|| panic_with_error!(env, ContractError::NotInitialized))
}

/// Address of the single settlement asset all escrows are denominated in.
pub fn get_token(env: &Env) -> Address {
    env.storage()
        .persistent()
        .get(&DataKey::Token)
        .unwrap_or_else(|| panic_with_error!(env, ContractError::NotInitialized))
}

pub fn get_fee_bps(env: &Env) -> u32 {
    env.storage().persistent().get(&DataKey::FeeBps).unwrap_or(0)
}

pub fn assert_admin(env: &Env, caller: &Address) {
    if caller != &get_admin(env) {
        panic_with_error!(env, ContractError::NotAuthorized);
    }
}

pub fn assert_valid_fee(env: &Env, fee_bps: u32) {
    if fee_bps > MAX_FEE_BPS {
        panic_with_error!(env, ContractError::InvalidFee);
    }
}

pub fn set_fee_bps(env: &Env, fee_bps: u32) {
    env.storage().persistent().set(&DataKey::FeeBps, &fee_bps);
}

pub fn set_admin(env: &Env, new_admin: &Address) {
    env.storage().persistent().set(&DataKey::Admin, new_admin);
}
