use soroban_sdk::{contracttype, Env, Map, Symbol};

/// Balances of a single account keyed by asset symbol.
/// Zero balances are never stored.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserAccount {
    /// Funds held by the account and not committed to the pool
    pub wallet: Map<Symbol, i128>,
    /// Funds pledged as collateral
    pub collateral: Map<Symbol, i128>,
    /// Funds supplied to the pool liquidity
    pub supplied: Map<Symbol, i128>,
    /// Outstanding debt
    pub borrowed: Map<Symbol, i128>,
}

impl UserAccount {
    pub fn new(env: &Env) -> Self {
        Self {
            wallet: Map::new(env),
            collateral: Map::new(env),
            supplied: Map::new(env),
            borrowed: Map::new(env),
        }
    }

    pub fn wallet_of(&self, asset: &Symbol) -> i128 {
        self.wallet.get(asset.clone()).unwrap_or(0)
    }

    pub fn collateral_of(&self, asset: &Symbol) -> i128 {
        self.collateral.get(asset.clone()).unwrap_or(0)
    }

    pub fn supplied_of(&self, asset: &Symbol) -> i128 {
        self.supplied.get(asset.clone()).unwrap_or(0)
    }

    pub fn borrowed_of(&self, asset: &Symbol) -> i128 {
        self.borrowed.get(asset.clone()).unwrap_or(0)
    }

    pub fn is_borrowing_any(&self) -> bool {
        !self.borrowed.is_empty()
    }
}
