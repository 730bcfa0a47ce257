use soroban_sdk::{contracttype, Address, Symbol};

/// SEP-40 asset identifier. Lending pool assets are quoted as `Other(symbol)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Asset {
    Stellar(Address),
    Other(Symbol),
}
