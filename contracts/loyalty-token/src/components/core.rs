use crate::errors::ContractError;
use crate::types::{DataKey, TokenMetadata};
use soroban_sdk::{panic_with_error, Address, Env};

pub fn get_admin(env: &Env) -> Address {
    env.storage()
        .persistent()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| panic_with_error!(env, ContractError::NotInitialized))
}

pub fn get_minter(env: &Env) -> Address {
    env.storage()
        .persistent()
        .get(&DataKey::Minter)
        .unwrap_or_else(|| panic_with_error!(env, ContractError::NotInitialized))
}

pub fn get_metadata(env: &Env) -> TokenMetadata {
    env.storage()
        .persistent()
        .get(&DataKey::Metadata)
        .unwrap_or_else(|| panic_with_error!(env, ContractError::NotInitialized))
}

pub fn assert_admin(env: &Env, caller: &Address) {
    if caller != &get_admin(env) {
        panic_with_error!(env, ContractError::NotAuthorized);
    }
}

/// Minting is restricted to the single configured minter address.
pub fn assert_minter(env: &Env, caller: &Address) {
    if caller != &get_minter(env) {
        panic_with_error!(env, ContractError::NotAuthorized);
    }
}

pub fn set_minter(env: &Env, new_minter: &Address) {
    env.storage().persistent().set(&DataKey::Minter, new_minter);
}

pub fn set_admin(env: &Env, new_admin: &Address) {
    env.storage().persistent().set(&DataKey::Admin, new_admin);
}
