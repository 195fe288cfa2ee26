#![no_std]

mod components;
mod errors;
mod escrow;
mod events;
mod interface;
mod tests;
mod types;

pub use crate::errors::ContractError;
pub use crate::escrow::{PaymentEscrow, PaymentEscrowClient};
pub use crate::interface::PaymentEscrowTrait;
pub use crate::types::{DataKey, Escrow, EscrowStatus};
