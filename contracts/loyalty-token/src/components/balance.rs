use crate::errors::ContractError;
use crate::events;
use crate::types::DataKey;
use soroban_sdk::{panic_with_error, Address, Env};

pub fn balance_of(env: &Env, account: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(account.clone()))
        .unwrap_or(0)
}

fn set_balance(env: &Env, account: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(account.clone()), &amount);
}

pub fn total_supply(env: &Env) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

fn set_total_supply(env: &Env, supply: i128) {
    env.storage().persistent().set(&DataKey::TotalSupply, &supply);
}

fn assert_positive(env: &Env, amount: i128) {
    if amount <= 0 {
        panic_with_error!(env, ContractError::InvalidAmount);
    }
}

/// Credit `to` and grow the total supply. Sum of balances always equals the
/// supply, so both additions are overflow-checked together.
pub fn mint(env: &Env, to: &Address, amount: i128) {
    assert_positive(env, amount);

    let new_balance = balance_of(env, to)
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(env, ContractError::Overflow));
    let new_supply = total_supply(env)
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(env, ContractError::Overflow));

    set_balance(env, to, new_balance);
    set_total_supply(env, new_supply);

    events::publish_minted_event(env, to.clone(), amount, new_supply);
}

pub fn burn(env: &Env, from: &Address, amount: i128) {
    assert_positive(env, amount);

    let from_balance = balance_of(env, from);
    if from_balance < amount {
        panic_with_error!(env, ContractError::InsufficientBalance);
    }

    set_balance(env, from, from_balance - amount);
    let new_supply = total_supply(env) - amount;
    set_total_supply(env, new_supply);

    events::publish_burned_event(env, from.clone(), amount, new_supply);
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    assert_positive(env, amount);

    let from_balance = balance_of(env, from);
    if from_balance < amount {
        panic_with_error!(env, ContractError::InsufficientBalance);
    }

    // Debit before crediting so a self-transfer nets out to a no-op.
    set_balance(env, from, from_balance - amount);
    let to_balance = balance_of(env, to)
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(env, ContractError::Overflow));
    set_balance(env, to, to_balance);

    events::publish_transferred_event(env, from.clone(), to.clone(), amount);
}
