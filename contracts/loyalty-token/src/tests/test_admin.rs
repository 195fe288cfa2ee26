#![cfg(test)]

use crate::token::{LoyaltyToken, LoyaltyTokenClient};
use soroban_sdk::testutils::{Address as _, MockAuth, MockAuthInvoke};
use soroban_sdk::{Address, Env, IntoVal};

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
fn test_set_minter_rotates_mint_authority() {
    let (env, client, admin, old_minter) = setup();
    let new_minter = Address::generate(&env);
    let user = Address::generate(&env);

    client.set_minter(&admin, &new_minter);
    assert_eq!(client.get_minter(), new_minter);

    client.mint(&new_minter, &user, &1_000);
    assert_eq!(client.balance(&user), 1_000);

    // The previous minter no longer has authority.
    let result = client.try_mint(&old_minter, &user, &1_000);
    assert!(result.is_err());
}

#[test]
fn test_set_admin_transfers_control() {
    let (env, client, admin, _minter) = setup();
    let new_admin = Address::generate(&env);
    let new_minter = Address::generate(&env);

    client.set_admin(&admin, &new_admin);
    assert_eq!(client.get_admin(), new_admin);

    // Old admin is locked out, new admin can manage the minter.
    assert!(client.try_set_minter(&admin, &new_minter).is_err());
    client.set_minter(&new_admin, &new_minter);
    assert_eq!(client.get_minter(), new_minter);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #3)")] // NotAuthorized
fn test_set_minter_by_non_admin_panics() {
    let (env, client, _admin, minter) = setup();
    let rando = Address::generate(&env);

    // The minter role does not grant role management.
    client.set_minter(&minter, &rando);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #3)")] // NotAuthorized
fn test_set_admin_by_non_admin_panics() {
    let (env, client, _admin, _minter) = setup();
    let rando = Address::generate(&env);

    client.set_admin(&rando, &rando);
}

#[test]
#[should_panic]
fn test_mint_requires_minter_signature() {
    let env = Env::default();

    let contract_id = env.register(LoyaltyToken, ());
    let client = LoyaltyTokenClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let minter = Address::generate(&env);
    env.mock_all_auths();
    client.initialize(&admin, &minter);

    // A forged call naming the minter but signed by someone else must fail
    // authorization before any role check runs.
    let attacker = Address::generate(&env);
    let user = Address::generate(&env);
    env.mock_auths(&[MockAuth {
        address: &attacker,
        invoke: &MockAuthInvoke {
            contract: &contract_id,
            fn_name: "mint",
            args: (&minter, &user, 1_000i128).into_val(&env),
            sub_invokes: &[],
        },
    }]);

    client.mint(&minter, &user, &1_000);
}
