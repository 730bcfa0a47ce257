use lending_pool_interface::types::deposit_kind::DepositKind;
use lending_pool_interface::types::error::Error;
use soroban_sdk::{Address, Env, Symbol};

use crate::event;
use crate::storage::read_asset;
use crate::types::ledger::Ledger;
use crate::types::pool_accounting::PoolAccounting;

use super::utils::validation::{require_admin, require_positive_amount};

/// Credits balances imported from the ledger of record
pub fn deposit(
    env: &Env,
    who: &Address,
    asset: &Symbol,
    amount: i128,
    kind: DepositKind,
) -> Result<(), Error> {
    require_admin(env)?;
    require_positive_amount(env, amount);

    read_asset(env, asset)?;

    let mut ledger = Ledger::load(env, who);
    ledger.deposit(asset, amount, kind)?;

    if kind == DepositKind::Pool {
        PoolAccounting::load(env, asset)?.supply(amount)?.write();
    }

    ledger.write();

    event::deposit(env, who, asset, amount, kind);

    Ok(())
}
