pub mod balance;
pub mod core;
