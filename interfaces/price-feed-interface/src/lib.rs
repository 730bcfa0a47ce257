//! Note, the PriceFeedTrait, and the PriceData are SEP-40 compatible.
//! More details can be found at the following link:
//! https://github.com/stellar/stellar-protocol/blob/master/ecosystem/sep-0040.md
//!
//! Only the part of SEP-40 the lending pool consumes is declared here.

#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Env};
use types::asset::Asset;
use types::price_data::PriceData;

pub mod types;

pub struct Spec;

/// Oracle feed interface description
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeedTrait {
    /// Return the number of decimals for all assets quoted by the oracle
    fn decimals(env: Env) -> u32;

    /// Get the most recent price for an asset
    fn lastprice(env: Env, asset: Asset) -> Option<PriceData>;
}
