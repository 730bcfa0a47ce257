use lending_pool_interface::types::error::Error;
use soroban_sdk::{Address, Env, Symbol};

use crate::event;
use crate::types::ledger::Ledger;
use crate::types::pool_accounting::PoolAccounting;

use super::utils::validation::{require_not_paused, require_positive_amount};

/// Returns supplied liquidity to the wallet. Lent out funds stay locked until repaid.
pub fn withdraw_from_pool(
    env: &Env,
    who: &Address,
    asset: &Symbol,
    amount: i128,
) -> Result<(), Error> {
    who.require_auth();

    require_not_paused(env);
    require_positive_amount(env, amount);

    let mut pool = PoolAccounting::load(env, asset)?;
    let mut ledger = Ledger::load(env, who);

    ledger.withdraw_supply(asset, amount)?;
    pool.withdraw(amount)?;

    ledger.write();
    pool.write();

    event::withdraw_supply(env, who, asset, amount);

    Ok(())
}
