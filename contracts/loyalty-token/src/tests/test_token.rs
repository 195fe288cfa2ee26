#![cfg(test)]

use crate::token::{LoyaltyToken, LoyaltyTokenClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};

fn setup() -> (Env, LoyaltyTokenClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(LoyaltyToken, ());
    let client = LoyaltyTokenClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let minter = Address::generate(&env);
    client.initialize(&admin, &minter);

    (env, client, admin, minter)
}

#[test]
fn test_metadata() {
    let (env, client, _admin, _minter) = setup();

    assert_eq!(client.name(), String::from_str(&env, "Bite Rewards"));
    assert_eq!(client.symbol(), String::from_str(&env, "BITE"));
    assert_eq!(client.decimals(), 7u32);
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn test_roles_stored_at_init() {
    let (_env, client, admin, minter) = setup();

    assert_eq!(client.get_admin(), admin);
    assert_eq!(client.get_minter(), minter);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #1)")] // AlreadyInitialized
fn test_double_initialize_panics() {
    let (env, client, _admin, _minter) = setup();

    let other = Address::generate(&env);
    client.initialize(&other, &other);
}

#[test]
fn test_mint_updates_balance_and_supply() {
    let (env, client, _admin, minter) = setup();
    let user = Address::generate(&env);

    client.mint(&minter, &user, &1_000_000);

    assert_eq!(client.balance(&user), 1_000_000);
    assert_eq!(client.total_supply(), 1_000_000);
}

#[test]
fn test_mint_accumulates() {
    let (env, client, _admin, minter) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    client.mint(&minter, &alice, &300);
    client.mint(&minter, &alice, &200);
    client.mint(&minter, &bob, &100);

    assert_eq!(client.balance(&alice), 500);
    assert_eq!(client.balance(&bob), 100);
    assert_eq!(client.total_supply(), 600);
}

#[test]
fn test_balance_of_unknown_account_is_zero() {
    let (env, client, _admin, _minter) = setup();
    let stranger = Address::generate(&env);

    assert_eq!(client.balance(&stranger), 0);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #3)")] // NotAuthorized
fn test_mint_by_non_minter_panics() {
    let (env, client, _admin, _minter) = setup();
    let rando = Address::generate(&env);

    client.mint(&rando, &rando, &1_000_000);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #3)")] // NotAuthorized
fn test_mint_by_admin_panics() {
    // The admin controls the roles but does not hold mint authority itself.
    let (env, client, admin, _minter) = setup();
    let user = Address::generate(&env);

    client.mint(&admin, &user, &1_000);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #4)")] // InvalidAmount
fn test_mint_zero_amount_panics() {
    let (env, client, _admin, minter) = setup();
    let user = Address::generate(&env);

    client.mint(&minter, &user, &0);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #6)")] // Overflow
fn test_mint_overflow_panics() {
    let (env, client, _admin, minter) = setup();
    let user = Address::generate(&env);

    client.mint(&minter, &user, &i128::MAX);
    client.mint(&minter, &user, &1);
}

#[test]
fn test_burn_reduces_balance_and_supply() {
    let (env, client, _admin, minter) = setup();
    let user = Address::generate(&env);

    client.mint(&minter, &user, &500_000);
    client.burn(&user, &200_000);

    assert_eq!(client.balance(&user), 300_000);
    assert_eq!(client.total_supply(), 300_000);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #5)")] // InsufficientBalance
fn test_burn_overdraft_panics() {
    let (env, client, _admin, minter) = setup();
    let user = Address::generate(&env);

    client.mint(&minter, &user, &100);
    client.burn(&user, &200);
}
