#![cfg(test)]

use crate::escrow::{PaymentEscrow, PaymentEscrowClient};
use crate::types::EscrowStatus;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{token, Address, Env};

pub struct EscrowTestContext {
    pub env: Env,
    pub client: PaymentEscrowClient<'static>,
    pub contract_id: Address,
    pub admin: Address,
    pub treasury: Address,
    pub token: Address,
    pub payer: Address,
}

pub fn setup_with_fee(fee_bps: u32) -> EscrowTestContext {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(PaymentEscrow, ());
    let client = PaymentEscrowClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let treasury = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token = env
        .register_stellar_asset_contract_v2(token_admin)
        .address();

    client.initialize(&admin, &treasury, &token, &fee_bps);

    let payer = Address::generate(&env);
    token::StellarAssetClient::new(&env, &token).mint(&payer, &1_000_000_000);

    EscrowTestContext {
        env,
        client,
        contract_id,
        admin,
        treasury,
        token,
        payer,
    }
}

pub fn setup() -> EscrowTestContext {
    setup_with_fee(250)
}

#[test]
fn test_escrow_locks_funds() {
    let ctx = setup();

    ctx.client.escrow(&ctx.payer, &1, &10_000_000);

    let escrow = ctx.client.get_escrow(&1);
    assert_eq!(escrow.order_id, 1);
    assert_eq!(escrow.payer, ctx.payer);
    assert_eq!(escrow.amount, 10_000_000);
    assert_eq!(escrow.status, EscrowStatus::Escrowed);
    assert_eq!(escrow.settled_at, 0);

    let token_client = token::TokenClient::new(&ctx.env, &ctx.token);
    assert_eq!(token_client.balance(&ctx.contract_id), 10_000_000);
    assert_eq!(token_client.balance(&ctx.payer), 990_000_000);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #7)")] // DuplicateOrder
fn test_duplicate_escrow_panics() {
    let ctx = setup();

    ctx.client.escrow(&ctx.payer, &3, &20_000_000);
    ctx.client.escrow(&ctx.payer, &3, &20_000_000);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #5)")] // InvalidAmount
fn test_escrow_zero_amount_panics() {
    let ctx = setup();
    ctx.client.escrow(&ctx.payer, &1, &0);
}

#[test]
fn test_escrow_fails_when_payer_cannot_cover() {
    let ctx = setup();

    let result = ctx.client.try_escrow(&ctx.payer, &1, &2_000_000_000);
    assert!(result.is_err());

    // The failed transfer left no record behind.
    assert!(ctx.client.try_get_escrow(&1).is_err());
}

#[test]
fn test_initialize_stores_config() {
    let ctx = setup();

    assert_eq!(ctx.client.get_admin(), ctx.admin);
    assert_eq!(ctx.client.get_treasury(), ctx.treasury);
    assert_eq!(ctx.client.get_token(), ctx.token);
    assert_eq!(ctx.client.fee_bps(), 250);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #1)")] // AlreadyInitialized
fn test_double_initialize_panics() {
    let ctx = setup();
    ctx.client
        .initialize(&ctx.admin, &ctx.treasury, &ctx.token, &250);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #6)")] // InvalidFee
fn test_initialize_with_fee_above_cap_panics() {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(PaymentEscrow, ());
    let client = PaymentEscrowClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let treasury = Address::generate(&env);
    let token = Address::generate(&env);

    client.initialize(&admin, &treasury, &token, &10_001);
}

#[test]
fn test_set_fee_bps() {
    let ctx = setup();

    ctx.client.set_fee_bps(&ctx.admin, &500);
    assert_eq!(ctx.client.fee_bps(), 500);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #6)")] // InvalidFee
fn test_set_fee_above_cap_panics() {
    let ctx = setup();
    ctx.client.set_fee_bps(&ctx.admin, &10_001);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #3)")] // NotAuthorized
fn test_set_fee_by_non_admin_panics() {
    let ctx = setup();
    ctx.client.set_fee_bps(&ctx.payer, &0);
}

#[test]
fn test_set_admin_transfers_control() {
    let ctx = setup();
    let new_admin = Address::generate(&ctx.env);
    let restaurant = Address::generate(&ctx.env);

    ctx.client.escrow(&ctx.payer, &1, &1_000_000);

    ctx.client.set_admin(&ctx.admin, &new_admin);
    assert_eq!(ctx.client.get_admin(), new_admin);

    // The old key is locked out of custody operations, the new one is not.
    assert!(ctx
        .client
        .try_release(&ctx.admin, &1, &restaurant)
        .is_err());
    assert!(ctx.client.try_set_fee_bps(&ctx.admin, &0).is_err());
    ctx.client.release(&new_admin, &1, &restaurant);
    assert_eq!(ctx.client.get_escrow(&1).status, EscrowStatus::Released);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #3)")] // NotAuthorized
fn test_set_admin_by_non_admin_panics() {
    let ctx = setup();
    ctx.client.set_admin(&ctx.payer, &ctx.payer);
}
