use crate::types::TokenMetadata;
use soroban_sdk::{contracttrait, Address, Env, String};

#[contracttrait]
pub trait LoyaltyTokenTrait {
    fn initialize(env: Env, admin: Address, minter: Address);

    fn mint(env: Env, caller: Address, to: Address, amount: i128);
    fn burn(env: Env, from: Address, amount: i128);
    fn transfer(env: Env, from: Address, to: Address, amount: i128);

    fn set_minter(env: Env, caller: Address, new_minter: Address);
    fn set_admin(env: Env, caller: Address, new_admin: Address);

    fn balance(env: Env, account: Address) -> i128;
    fn total_supply(env: Env) -> i128;
    fn metadata(env: Env) -> TokenMetadata;
    fn name(env: Env) -> String;
    fn symbol(env: Env) -> String;
    fn decimals(env: Env) -> u32;
    fn get_admin(env: Env) -> Address;
    fn get_minter(env: Env) -> Address;
}
