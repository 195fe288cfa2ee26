#![no_std]

mod components;
mod errors;
mod events;
mod interface;
mod registry;
mod types;

pub use crate::errors::ContractError;
pub use crate::interface::RestaurantRegistryTrait;
pub use crate::registry::{RestaurantRegistry, RestaurantRegistryClient};
pub use crate::types::{DataKey, Restaurant};
