#![deny(warnings)]
#![no_std]

mod fixedi128;

pub use fixedi128::*;

/// Percent representation, 1% - 100, 100% - 10_000
pub const PERCENTAGE_FACTOR: u32 = 10_000;

/// Max decimals of a registered asset
pub const MAX_ASSET_DECIMALS: u32 = 18;
