use soroban_sdk::{contracttype, Address};

#[contracttype]
pub enum DataKey {
    Admin,
    Treasury,
    Token,
    FeeBps,
    Escrow(u64),
}

/// Lifecycle of an escrow record. `Escrowed` is the only non-terminal state;
/// a record settles exactly once and never re-enters escrow.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EscrowStatus {
    Escrowed,
    Released,
    Refunded,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Escrow {
    /// Foreign key into the order contract.
    pub order_id: u64,
    pub payer: Address,
    /// Gross amount held, in base units of the settlement asset.
    pub amount: i128,
    pub status: EscrowStatus,
    pub created_at: u64,
    /// Ledger timestamp of release/refund, 0 while still escrowed.
    pub settled_at: u64,
}
