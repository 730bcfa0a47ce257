use common::PERCENTAGE_FACTOR;
use lending_pool_interface::types::account_position::AccountPosition;
use lending_pool_interface::types::error::Error;
use lending_pool_interface::types::position_state::PositionState;

#[derive(Debug, Clone, Default)]
pub struct AccountData {
    /// Total collateral value, rounded down
    pub collateral_value: i128,
    /// Total debt value, rounded up
    pub debt_value: i128,
    /// Highest collateral rate among borrowed assets
    pub required_rate: u32,
}

impl AccountData {
    /// `collateral_value * 10_000 >= debt_value * required_rate`
    pub fn is_healthy(&self) -> Result<bool, Error> {
        if self.debt_value == 0 {
            return Ok(true);
        }

        Ok(self.collateral_capacity()? >= self.required_collateral()?)
    }

    pub fn state(&self) -> Result<PositionState, Error> {
        Ok(if self.is_healthy()? {
            PositionState::Healthy
        } else {
            PositionState::Liquidatable
        })
    }

    /// Debt value that can be added while keeping
    /// `collateral_value * 10_000 >= (debt_value + value) * rate`
    pub fn borrow_headroom(&self, rate: u32) -> Result<i128, Error> {
        let max_debt = self
            .collateral_capacity()?
            .checked_div(rate.into())
            .ok_or(Error::MathOverflowError)?;

        Ok(max_debt.saturating_sub(self.debt_value).max(0))
    }

    pub fn get_position(&self) -> Result<AccountPosition, Error> {
        Ok(AccountPosition {
            collateral_value: self.collateral_value,
            debt_value: self.debt_value,
            required_rate: self.required_rate,
            state: self.state()?,
        })
    }

    fn collateral_capacity(&self) -> Result<i128, Error> {
        self.collateral_value
            .checked_mul(PERCENTAGE_FACTOR.into())
            .ok_or(Error::MathOverflowError)
    }

    fn required_collateral(&self) -> Result<i128, Error> {
        self.debt_value
            .checked_mul(self.required_rate.into())
            .ok_or(Error::MathOverflowError)
    }
}
