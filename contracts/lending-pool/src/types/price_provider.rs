use common::FixedI128;
use lending_pool_interface::types::asset_config::AssetConfig;
use lending_pool_interface::types::error::Error;
use price_feed_interface::types::asset::Asset;
use price_feed_interface::PriceFeedClient;
use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{Env, Map, Symbol};

use crate::storage::read_pool_config;

/// Reads oracle quotes and converts asset amounts into values.
///
/// A provider lives for a single contract invocation: quotes are cached only
/// for the duration of that invocation and never carried into the next one.
/// Values are expressed with `FixedI128` precision (9 decimals).
pub struct PriceProvider<'a> {
    env: &'a Env,
    price_max_age: u64,
    prices: Map<Symbol, i128>,
}

impl<'a> PriceProvider<'a> {
    pub fn new(env: &'a Env) -> Result<Self, Error> {
        Ok(Self {
            env,
            price_max_age: read_pool_config(env)?.price_max_age,
            prices: Map::new(env),
        })
    }

    /// Value of `amount` rounded down, used for collateral
    pub fn value_floor(&mut self, asset: &AssetConfig, amount: i128) -> Result<i128, Error> {
        let price = self.price(asset)?;

        amount
            .fixed_mul_floor(price.into_inner(), Self::scale(asset)?)
            .ok_or(Error::MathOverflowError)
    }

    /// Value of `amount` rounded up, used for debt
    pub fn value_ceil(&mut self, asset: &AssetConfig, amount: i128) -> Result<i128, Error> {
        let price = self.price(asset)?;

        amount
            .fixed_mul_ceil(price.into_inner(), Self::scale(asset)?)
            .ok_or(Error::MathOverflowError)
    }

    /// Amount of `asset` worth `value`, rounded down
    pub fn amount_floor(&mut self, asset: &AssetConfig, value: i128) -> Result<i128, Error> {
        let price = self.price(asset)?;

        value
            .fixed_div_floor(price.into_inner(), Self::scale(asset)?)
            .ok_or(Error::MathOverflowError)
    }

    /// Price of one whole unit of `asset`
    pub fn price(&mut self, asset: &AssetConfig) -> Result<FixedI128, Error> {
        if let Some(price) = self.prices.get(asset.symbol.clone()) {
            return Ok(FixedI128::from_inner(price));
        }

        let price = self.fetch(asset)?;
        self.prices.set(asset.symbol.clone(), price.into_inner());

        Ok(price)
    }

    fn fetch(&self, asset: &AssetConfig) -> Result<FixedI128, Error> {
        let client = PriceFeedClient::new(self.env, &asset.oracle);

        let decimals = client
            .try_decimals()
            .ok()
            .and_then(|r| r.ok())
            .ok_or(Error::PriceUnavailable)?;

        let quote = client
            .try_lastprice(&Asset::Other(asset.symbol.clone()))
            .ok()
            .and_then(|r| r.ok())
            .flatten()
            .ok_or(Error::PriceUnavailable)?;

        let now = self.env.ledger().timestamp();
        if now.saturating_sub(quote.timestamp) > self.price_max_age {
            return Err(Error::PriceUnavailable);
        }

        let denom = 10i128
            .checked_pow(decimals)
            .ok_or(Error::PriceUnavailable)?;
        let price = FixedI128::from_rational(quote.price, denom).ok_or(Error::PriceUnavailable)?;

        if !price.is_positive() {
            return Err(Error::PriceUnavailable);
        }

        Ok(price)
    }

    fn scale(asset: &AssetConfig) -> Result<i128, Error> {
        10i128
            .checked_pow(asset.decimals)
            .ok_or(Error::MathOverflowError)
    }
}
