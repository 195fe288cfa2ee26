use crate::components::core;
use crate::errors::ContractError;
use crate::events;
use crate::types::{DataKey, Escrow, EscrowStatus};
use soroban_sdk::{panic_with_error, token, Address, Env};

/// `fee = amount * fee_bps / 10_000`, rounded down. The restaurant share is
/// the exact remainder, so the split conserves the escrowed amount.
pub fn split_amount(env: &Env, amount: i128, fee_bps: u32) -> (i128, i128) {
    let fee = amount
        .checked_mul(fee_bps as i128)
        .unwrap_or_else(|| panic_with_error!(env, ContractError::Overflow))
        / core::MAX_FEE_BPS as i128;
    (amount - fee, fee)
}

pub fn get_escrow(env: &Env, order_id: u64) -> Escrow {
    env.storage()
        .persistent()
        .get(&DataKey::Escrow(order_id))
        .unwrap_or_else(|| panic_with_error!(env, ContractError::EscrowNotFound))
}

fn save_escrow(env: &Env, escrow: &Escrow) {
    env.storage()
        .persistent()
        .set(&DataKey::Escrow(escrow.order_id), escrow);
}

fn assert_escrowed(env: &Env, escrow: &Escrow) {
    if escrow.status != EscrowStatus::Escrowed {
        panic_with_error!(env, ContractError::InvalidEscrowStatus);
    }
}

pub fn escrow_funds(env: &Env, payer: &Address, order_id: u64, amount: i128) {
    payer.require_auth();

    if env.storage().persistent().has(&DataKey::Escrow(order_id)) {
        panic_with_error!(env, ContractError::DuplicateOrder);
    }
    if amount <= 0 {
        panic_with_error!(env, ContractError::InvalidAmount);
    }

    // Pull the funds into contract custody first; if the transfer fails the
    // host aborts the call and no record is written.
    let token_client = token::Client::new(env, &core::get_token(env));
    token_client.transfer(payer, &env.current_contract_address(), &amount);

    let escrow = Escrow {
        order_id,
        payer: payer.clone(),
        amount,
        status: EscrowStatus::Escrowed,
        created_at: env.ledger().timestamp(),
        settled_at: 0,
    };
    save_escrow(env, &escrow);

    events::publish_funds_escrowed_event(
        env,
        order_id,
        payer.clone(),
        amount,
        env.ledger().timestamp(),
    );
}

pub fn release(env: &Env, caller: &Address, order_id: u64, restaurant: &Address) {
    caller.require_auth();
    core::assert_admin(env, caller);

    let mut escrow = get_escrow(env, order_id);
    assert_escrowed(env, &escrow);

    let (restaurant_share, fee) = split_amount(env, escrow.amount, core::get_fee_bps(env));

    let token_client = token::Client::new(env, &core::get_token(env));
    token_client.transfer(&env.current_contract_address(), restaurant, &restaurant_share);
    if fee > 0 {
        token_client.transfer(&env.current_contract_address(), &core::get_treasury(env), &fee);
    }

    escrow.status = EscrowStatus::Released;
    escrow.settled_at = env.ledger().timestamp();
    save_escrow(env, &escrow);

    events::publish_funds_released_event(
        env,
        order_id,
        restaurant.clone(),
        restaurant_share,
        fee,
        env.ledger().timestamp(),
    );
}

pub fn refund(env: &Env, caller: &Address, order_id: u64) {
    caller.require_auth();
    core::assert_admin(env, caller);

    let mut escrow = get_escrow(env, order_id);
    assert_escrowed(env, &escrow);

    let token_client = token::Client::new(env, &core::get_token(env));
    token_client.transfer(&env.current_contract_address(), &escrow.payer, &escrow.amount);

    escrow.status = EscrowStatus::Refunded;
    escrow.settled_at = env.ledger().timestamp();
    save_escrow(env, &escrow);

    events::publish_funds_refunded_event(
        env,
        order_id,
        escrow.payer.clone(),
        escrow.amount,
        env.ledger().timestamp(),
    );
}
