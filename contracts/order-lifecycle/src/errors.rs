use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    OrderNotFound = 4,
    InvalidAmount = 5,
    InvalidTransition = 6,
    OrderClosed = 7,
    Overflow = 8,
}
