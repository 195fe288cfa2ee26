use crate::types::{Order, OrderStatus};
use soroban_sdk::{contractclient, contracttrait, Address, Env};

#[contracttrait]
pub trait OrderLifecycleTrait {
    fn initialize(env: Env, admin: Address, loyalty_token: Address, rewards_enabled: bool);

    fn place_order(env: Env, customer: Address, restaurant_id: u64, total_amount: i128) -> u64;
    fn advance_status(env: Env, caller: Address, order_id: u64, next_status: OrderStatus);
    fn cancel(env: Env, caller: Address, order_id: u64);

    fn set_rewards_enabled(env: Env, caller: Address, enabled: bool);

    fn get_order(env: Env, order_id: u64) -> Order;
    fn get_order_count(env: Env) -> u64;
    fn get_admin(env: Env) -> Address;
    fn get_loyalty_token(env: Env) -> Address;
    fn is_rewards_enabled(env: Env) -> bool;
}

/// Client-only view of the loyalty token's mint entry point. Resolved by the
/// configured token address, so tests can stand in any contract exporting a
/// compatible `mint`.
#[contractclient(name = "MintableTokenClient")]
pub trait MintableToken {
    fn mint(env: Env, caller: Address, to: Address, amount: i128);
}
