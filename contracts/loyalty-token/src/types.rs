use soroban_sdk::{contracttype, Address, String};

#[contracttype]
pub enum DataKey {
    Admin,
    Minter,
    TotalSupply,
    Metadata,
    Balance(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}
