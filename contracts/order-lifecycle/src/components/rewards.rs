use crate::components::core;
use crate::events;
use crate::interface::MintableTokenClient;
use crate::types::Order;
use soroban_sdk::Env;

/// 1 BITE in base units (7 decimals).
pub const MIN_REWARD: i128 = 10_000_000;
/// Stroops of order value per base unit of BITE.
pub const REWARD_DIVISOR: i128 = 10_000;

/// `max(total_amount / 10_000, 1 BITE)` — every delivered order earns at
/// least one whole BITE.
pub fn reward_amount(total_amount: i128) -> i128 {
    let proportional = total_amount / REWARD_DIVISOR;
    if proportional > MIN_REWARD {
        proportional
    } else {
        MIN_REWARD
    }
}

/// Mint the delivery reward to the order's customer. The loyalty token must
/// be configured with this contract as its minter; invoker authorization
/// covers the nested `require_auth` on our own address.
pub fn mint_reward(env: &Env, order: &Order) {
    let reward = reward_amount(order.total_amount);

    let token = MintableTokenClient::new(env, &core::get_loyalty_token(env));
    token.mint(
        &env.current_contract_address(),
        &order.customer,
        &reward,
    );

    events::publish_reward_minted_event(env, order.id, order.customer.clone(), reward);
}
