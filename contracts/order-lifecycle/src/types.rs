use soroban_sdk::{contracttype, Address};

#[contracttype]
pub enum DataKey {
    Admin,
    LoyaltyToken,
    RewardsEnabled,
    Count,
    Order(u64),
}

/// Order lifecycle states. Transitions are strictly forward along
/// `Placed → Confirmed → Preparing → OutForDelivery → Delivered`;
/// `Cancelled` is a side terminal reachable only early in the flow.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OrderStatus {
    Placed,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Order {
    pub id: u64,
    pub customer: Address,
    /// Foreign key into the restaurant registry.
    pub restaurant_id: u64,
    /// Order total in stroops of the settlement asset.
    pub total_amount: i128,
    pub status: OrderStatus,
    /// Flips false→true exactly once, in the same call that reaches
    /// `Delivered`. Sole guard against double-minting the reward.
    pub reward_minted: bool,
    pub created_at: u64,
    pub updated_at: u64,
}
