use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    EscrowNotFound = 4,
    InvalidAmount = 5,
    InvalidFee = 6,
    DuplicateOrder = 7,
    InvalidEscrowStatus = 8,
    Overflow = 9,
}
