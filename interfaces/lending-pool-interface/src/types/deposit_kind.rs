use soroban_sdk::contracttype;

/// Ledger bucket credited by an administrative deposit
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DepositKind {
    Wallet,
    Collateral,
    Pool,
}
