use soroban_sdk::{contracttype, Address, String};

/// Asset registration parameters
#[contracttype]
#[derive(Clone, Debug)]
pub struct AssetInput {
    pub name: String,
    /// Decimals of the asset amounts, at most 18
    pub decimals: u32,
    /// Required over-collateralization in basis points, must be above 100% (10_000)
    pub collateral_rate: u32,
    /// SEP-40 price feed quoting the asset as `Asset::Other(symbol)`
    pub oracle: Address,
}
