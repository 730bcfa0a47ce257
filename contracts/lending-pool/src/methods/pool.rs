use lending_pool_interface::types::error::Error;
use lending_pool_interface::types::pool_data::PoolData;
use soroban_sdk::{Env, Symbol};

use crate::types::pool_accounting::PoolAccounting;

pub fn pool(env: &Env, asset: &Symbol) -> Result<PoolData, Error> {
    PoolAccounting::load(env, asset).map(|pool| pool.data().clone())
}

pub fn utilization(env: &Env, asset: &Symbol) -> Result<u32, Error> {
    PoolAccounting::load(env, asset)?.utilization()
}
