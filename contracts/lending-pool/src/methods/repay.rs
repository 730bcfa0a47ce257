use lending_pool_interface::types::error::Error;
use soroban_sdk::{Address, Env, Symbol};

use crate::event;
use crate::types::ledger::Ledger;
use crate::types::pool_accounting::PoolAccounting;

use super::utils::validation::require_positive_amount;

/// Repayment stays open while the pool is paused
pub fn repay(env: &Env, who: &Address, asset: &Symbol, amount: i128) -> Result<(), Error> {
    who.require_auth();

    require_positive_amount(env, amount);

    let mut pool = PoolAccounting::load(env, asset)?;
    let mut ledger = Ledger::load(env, who);

    ledger
        .debit_wallet(asset, amount)?
        .record_repay(asset, amount)?;
    pool.repay(amount)?;

    ledger.write();
    pool.write();

    event::repay(env, who, asset, amount);

    Ok(())
}
