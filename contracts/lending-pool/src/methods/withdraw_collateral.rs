use lending_pool_interface::types::error::Error;
use soroban_sdk::{Address, Env, Symbol};

use crate::event;
use crate::storage::read_asset;
use crate::types::ledger::Ledger;
use crate::types::price_provider::PriceProvider;

use super::account_position::calc_account_data;
use super::utils::validation::{
    require_healthy_after, require_not_paused, require_positive_amount,
};

pub fn withdraw_collateral(
    env: &Env,
    who: &Address,
    asset: &Symbol,
    amount: i128,
) -> Result<(), Error> {
    who.require_auth();

    require_not_paused(env);
    require_positive_amount(env, amount);

    read_asset(env, asset)?;

    let mut ledger = Ledger::load(env, who);
    ledger.withdraw_collateral(asset, amount)?;

    if ledger.account().is_borrowing_any() {
        let account_data = calc_account_data(env, ledger.account(), &mut PriceProvider::new(env)?)?;
        require_healthy_after(env, &account_data)?;
    }

    ledger.write();

    event::collateral_withdrawn(env, who, asset, amount);

    Ok(())
}
