use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolData {
    pub total_supplied: i128,
    pub total_borrowed: i128,
}

impl PoolData {
    /// Liquidity that is supplied and not lent out
    pub fn available(&self) -> i128 {
        self.total_supplied - self.total_borrowed
    }
}
