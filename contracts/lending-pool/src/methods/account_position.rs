use lending_pool_interface::types::account_position::AccountPosition;
use lending_pool_interface::types::error::Error;
use lending_pool_interface::types::user_account::UserAccount;
use soroban_sdk::{Address, Env, Symbol};

use crate::storage::{read_account, read_asset};
use crate::types::account_data::AccountData;
use crate::types::price_provider::PriceProvider;

pub fn account_position(env: &Env, who: &Address) -> Result<AccountPosition, Error> {
    let account = read_account(env, who);
    let account_data = calc_account_data(env, &account, &mut PriceProvider::new(env)?)?;

    account_data.get_position()
}

pub fn collateral_value(env: &Env, who: &Address) -> Result<i128, Error> {
    let account = read_account(env, who);

    calc_account_data(env, &account, &mut PriceProvider::new(env)?)
        .map(|data| data.collateral_value)
}

pub fn debt_value(env: &Env, who: &Address) -> Result<i128, Error> {
    let account = read_account(env, who);

    calc_account_data(env, &account, &mut PriceProvider::new(env)?).map(|data| data.debt_value)
}

pub fn max_borrowable(env: &Env, who: &Address, asset: &Symbol) -> Result<i128, Error> {
    let account = read_account(env, who);

    calc_max_borrowable(env, &account, asset, &mut PriceProvider::new(env)?)
}

/// Values every nonzero collateral and debt balance of `account`.
/// A missing quote for any of them fails the whole calculation.
pub fn calc_account_data(
    env: &Env,
    account: &UserAccount,
    price_provider: &mut PriceProvider,
) -> Result<AccountData, Error> {
    let mut account_data = AccountData::default();

    for (symbol, amount) in account.collateral.iter() {
        let asset = read_asset(env, &symbol)?;
        let value = price_provider.value_floor(&asset, amount)?;

        account_data.collateral_value = account_data
            .collateral_value
            .checked_add(value)
            .ok_or(Error::MathOverflowError)?;
    }

    for (symbol, amount) in account.borrowed.iter() {
        let asset = read_asset(env, &symbol)?;
        let value = price_provider.value_ceil(&asset, amount)?;

        account_data.debt_value = account_data
            .debt_value
            .checked_add(value)
            .ok_or(Error::MathOverflowError)?;
        account_data.required_rate = account_data.required_rate.max(asset.collateral_rate);
    }

    Ok(account_data)
}

/// Largest amount of `asset` that keeps the position healthy once borrowed.
/// The rate applied is the borrowed asset's own, raised to the rate of any
/// asset already borrowed.
pub fn calc_max_borrowable(
    env: &Env,
    account: &UserAccount,
    asset: &Symbol,
    price_provider: &mut PriceProvider,
) -> Result<i128, Error> {
    let asset = read_asset(env, asset)?;
    let account_data = calc_account_data(env, account, price_provider)?;

    let rate = account_data.required_rate.max(asset.collateral_rate);
    let headroom = account_data.borrow_headroom(rate)?;

    price_provider.amount_floor(&asset, headroom)
}
