use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// Max age of an oracle quote in seconds
    pub price_max_age: u64,
    /// Share of a debt a single liquidation covers, in basis points
    pub close_factor: u32,
    /// Collateral paid to the liquidator on top of the covered debt value, in basis points
    pub liquidation_bonus: u32,
}
