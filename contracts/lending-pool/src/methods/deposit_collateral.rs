use lending_pool_interface::types::error::Error;
use soroban_sdk::{Address, Env, Symbol};

use crate::event;
use crate::storage::read_asset;
use crate::types::ledger::Ledger;

use super::utils::validation::{require_not_paused, require_positive_amount};

pub fn deposit_collateral(
    env: &Env,
    who: &Address,
    asset: &Symbol,
    amount: i128,
) -> Result<(), Error> {
    who.require_auth();

    require_not_paused(env);
    require_positive_amount(env, amount);

    read_asset(env, asset)?;

    Ledger::load(env, who)
        .deposit_collateral(asset, amount)?
        .write();

    event::collateral_deposited(env, who, asset, amount);

    Ok(())
}
