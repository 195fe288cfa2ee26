use soroban_sdk::{contracttype, Address, Bytes};

#[contracttype]
pub enum DataKey {
    Admin,
    Count,
    Restaurant(u64),
}

/// A curated restaurant entry. The id is assigned once and never reused;
/// entries are deactivated rather than deleted so that foreign keys held by
/// the order contract stay resolvable.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Restaurant {
    pub id: u64,
    pub owner: Address,
    /// Opaque off-chain payload (name, menu pointer, ...); the contract never
    /// interprets it.
    pub metadata: Bytes,
    pub active: bool,
    pub registered_at: u64,
}
