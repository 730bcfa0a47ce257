use soroban_sdk::{contracttype, Address, String, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetConfig {
    /// Registration order of the asset
    pub id: u32,
    pub symbol: Symbol,
    pub name: String,
    pub decimals: u32,
    /// Required over-collateralization in basis points, 15_000 - 150%
    pub collateral_rate: u32,
    pub oracle: Address,
}
