use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    /// The price in feed's base asset, scaled by `decimals()`
    pub price: i128,
    /// Unix timestamp (seconds) the price was observed at
    pub timestamp: u64,
}
