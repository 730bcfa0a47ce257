#![deny(warnings)]
#![no_std]

mod constants;
mod storage;
#[cfg(test)]
mod test;

use crate::storage::*;
use price_feed_interface::types::{asset::Asset, price_data::PriceData};
use price_feed_interface::PriceFeedTrait;
use soroban_sdk::{contract, contractimpl, Env};

#[contract]
pub struct PriceFeedMock;

#[contractimpl]
impl PriceFeedTrait for PriceFeedMock {
    fn decimals(_env: Env) -> u32 {
        constants::DECIMALS
    }

    fn lastprice(env: Env, asset: Asset) -> Option<PriceData> {
        read_price(&env, &asset)
    }
}

#[contractimpl]
impl PriceFeedMock {
    /// Sets the last price of an asset. Note: not a SEP-40 method.
    pub fn set_price(env: Env, asset: Asset, price: i128, timestamp: u64) {
        write_price(&env, &asset, &PriceData { price, timestamp });
    }

    /// Drops the quote of an asset. Note: not a SEP-40 method.
    pub fn remove_price(env: Env, asset: Asset) {
        delete_price(&env, &asset);
    }
}
