use crate::components::{core, rewards};
use crate::errors::ContractError;
use crate::events;
use crate::types::{DataKey, Order, OrderStatus};
use soroban_sdk::{panic_with_error, Address, Env};

/// Central transition table. `advance_status` only moves forward one step;
/// cancellation is handled separately because it carries its own caller rules.
pub fn can_advance(from: OrderStatus, to: OrderStatus) -> bool {
    matches!(
        (from, to),
        (OrderStatus::Placed, OrderStatus::Confirmed)
            | (OrderStatus::Confirmed, OrderStatus::Preparing)
            | (OrderStatus::Preparing, OrderStatus::OutForDelivery)
            | (OrderStatus::OutForDelivery, OrderStatus::Delivered)
    )
}

pub fn is_terminal(status: OrderStatus) -> bool {
    matches!(status, OrderStatus::Delivered | OrderStatus::Cancelled)
}

pub fn get_order(env: &Env, order_id: u64) -> Order {
    env.storage()
        .persistent()
        .get(&DataKey::Order(order_id))
        .unwrap_or_else(|| panic_with_error!(env, ContractError::OrderNotFound))
}

pub fn get_count(env: &Env) -> u64 {
    env.storage().persistent().get(&DataKey::Count).unwrap_or(0)
}

fn save_order(env: &Env, order: &Order) {
    env.storage()
        .persistent()
        .set(&DataKey::Order(order.id), order);
}

pub fn place_order(
    env: &Env,
    customer: &Address,
    restaurant_id: u64,
    total_amount: i128,
) -> u64 {
    customer.require_auth();

    if total_amount <= 0 {
        panic_with_error!(env, ContractError::InvalidAmount);
    }

    let count = get_count(env);
    let id = count + 1;
    let now = env.ledger().timestamp();

    let order = Order {
        id,
        customer: customer.clone(),
        restaurant_id,
        total_amount,
        status: OrderStatus::Placed,
        reward_minted: false,
        created_at: now,
        updated_at: now,
    };

    save_order(env, &order);
    env.storage().persistent().set(&DataKey::Count, &id);

    events::publish_order_placed_event(
        env,
        id,
        customer.clone(),
        restaurant_id,
        total_amount,
        now,
    );

    id
}

pub fn advance_status(env: &Env, caller: &Address, order_id: u64, next_status: OrderStatus) {
    caller.require_auth();
    core::assert_admin(env, caller);

    let mut order = get_order(env, order_id);

    if is_terminal(order.status) {
        panic_with_error!(env, ContractError::OrderClosed);
    }
    if !can_advance(order.status, next_status) {
        panic_with_error!(env, ContractError::InvalidTransition);
    }

    let previous = order.status;
    order.status = next_status;
    order.updated_at = env.ledger().timestamp();

    // Delivery and reward issuance commit as one unit: if the mint call
    // panics, the status write above is rolled back with it and the order
    // stays out for delivery until the operator retries.
    if next_status == OrderStatus::Delivered && core::is_rewards_enabled(env) && !order.reward_minted
    {
        rewards::mint_reward(env, &order);
        order.reward_minted = true;
    }

    save_order(env, &order);

    events::publish_status_advanced_event(
        env,
        order_id,
        previous,
        next_status,
        env.ledger().timestamp(),
    );
}

/// Terminal orders (`Delivered`, `Cancelled`) fail with `OrderClosed`, not
/// `InvalidTransition`; the latter is reserved for live orders that are past
/// the point of cancellation.
pub fn cancel(env: &Env, caller: &Address, order_id: u64) {
    caller.require_auth();

    let mut order = get_order(env, order_id);
    let admin = core::get_admin(env);

    if is_terminal(order.status) {
        panic_with_error!(env, ContractError::OrderClosed);
    }

    if caller == &admin {
        // The admin may cancel while the restaurant has not started cooking.
        if !matches!(order.status, OrderStatus::Placed | OrderStatus::Confirmed) {
            panic_with_error!(env, ContractError::InvalidTransition);
        }
    } else if caller == &order.customer {
        // Customers may only back out before the restaurant confirms.
        if order.status != OrderStatus::Placed {
            panic_with_error!(env, ContractError::InvalidTransition);
        }
    } else {
        panic_with_error!(env, ContractError::NotAuthorized);
    }

    order.status = OrderStatus::Cancelled;
    order.updated_at = env.ledger().timestamp();
    save_order(env, &order);

    events::publish_order_cancelled_event(env, order_id, caller.clone(), env.ledger().timestamp());
}
