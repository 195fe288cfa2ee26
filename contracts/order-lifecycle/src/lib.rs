#![no_std]

mod components;
mod errors;
mod events;
mod interface;
mod order;
mod types;

pub use crate::errors::ContractError;
pub use crate::interface::{MintableTokenClient, OrderLifecycleTrait};
pub use crate::order::{OrderLifecycle, OrderLifecycleClient};
pub use crate::types::{DataKey, Order, OrderStatus};
