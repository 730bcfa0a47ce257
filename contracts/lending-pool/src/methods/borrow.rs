use lending_pool_interface::types::error::Error;
use soroban_sdk::{assert_with_error, Address, Env, Symbol};

use crate::event;
use crate::types::ledger::Ledger;
use crate::types::pool_accounting::PoolAccounting;
use crate::types::price_provider::PriceProvider;

use super::account_position::calc_max_borrowable;
use super::utils::validation::{require_not_paused, require_positive_amount};

pub fn borrow(env: &Env, who: &Address, asset: &Symbol, amount: i128) -> Result<(), Error> {
    who.require_auth();

    require_not_paused(env);
    require_positive_amount(env, amount);

    let mut pool = PoolAccounting::load(env, asset)?;
    pool.require_liquidity(amount)?;

    let mut ledger = Ledger::load(env, who);
    let mut price_provider = PriceProvider::new(env)?;

    let max_amount = calc_max_borrowable(env, ledger.account(), asset, &mut price_provider)?;
    assert_with_error!(
        env,
        amount <= max_amount,
        Error::WouldBreachCollateralRatio
    );

    ledger
        .record_borrow(asset, amount)?
        .credit_wallet(asset, amount)?;
    pool.borrow(amount)?;

    ledger.write();
    pool.write();

    event::borrow(env, who, asset, amount);

    Ok(())
}
