use soroban_sdk::contracttype;

use super::position_state::PositionState;

/// Position of an account valued at current oracle prices.
/// Values are expressed in the oracle unit with 9 decimals.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountPosition {
    pub collateral_value: i128,
    pub debt_value: i128,
    /// Highest collateral rate among borrowed assets, 0 without debt
    pub required_rate: u32,
    pub state: PositionState,
}
