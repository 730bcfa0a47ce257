use common::{FixedI128, PERCENTAGE_FACTOR};
use lending_pool_interface::types::error::Error;
use lending_pool_interface::types::pool_data::PoolData;
use soroban_sdk::{Env, Symbol};

use crate::storage::{read_pool, write_pool};

/// Totals of a single asset pool. Keeps `0 <= total_borrowed <= total_supplied`
/// before anything is written.
pub struct PoolAccounting<'a> {
    env: &'a Env,
    asset: &'a Symbol,
    pool: PoolData,
}

impl<'a> PoolAccounting<'a> {
    pub fn load(env: &'a Env, asset: &'a Symbol) -> Result<Self, Error> {
        Ok(Self {
            env,
            asset,
            pool: read_pool(env, asset)?,
        })
    }

    pub fn data(&self) -> &PoolData {
        &self.pool
    }

    pub fn require_liquidity(&self, amount: i128) -> Result<(), Error> {
        if self.pool.available() < amount {
            return Err(Error::InsufficientLiquidity);
        }

        Ok(())
    }

    pub fn supply(&mut self, amount: i128) -> Result<&mut Self, Error> {
        self.pool.total_supplied = self
            .pool
            .total_supplied
            .checked_add(amount)
            .ok_or(Error::MathOverflowError)?;

        Ok(self)
    }

    pub fn withdraw(&mut self, amount: i128) -> Result<&mut Self, Error> {
        self.require_liquidity(amount)?;
        self.pool.total_supplied -= amount;

        Ok(self)
    }

    pub fn borrow(&mut self, amount: i128) -> Result<&mut Self, Error> {
        self.require_liquidity(amount)?;
        self.pool.total_borrowed += amount;

        Ok(self)
    }

    pub fn repay(&mut self, amount: i128) -> Result<&mut Self, Error> {
        if amount > self.pool.total_borrowed {
            return Err(Error::OverRepay);
        }
        self.pool.total_borrowed -= amount;

        Ok(self)
    }

    /// Total borrowed over total supplied in basis points
    pub fn utilization(&self) -> Result<u32, Error> {
        if self.pool.total_supplied == 0 {
            return Ok(0);
        }

        let utilization = FixedI128::from_rational(self.pool.total_borrowed, self.pool.total_supplied)
            .and_then(|u| u.mul_int(PERCENTAGE_FACTOR))
            .ok_or(Error::MathOverflowError)?;

        u32::try_from(utilization).map_err(|_| Error::MathOverflowError)
    }

    pub fn write(&self) {
        write_pool(self.env, self.asset, &self.pool);
    }
}
