#![no_std]

mod components;
mod errors;
mod events;
mod interface;
mod tests;
mod token;
mod types;

pub use crate::errors::ContractError;
pub use crate::interface::LoyaltyTokenTrait;
pub use crate::token::{LoyaltyToken, LoyaltyTokenClient};
pub use crate::types::{DataKey, TokenMetadata};
