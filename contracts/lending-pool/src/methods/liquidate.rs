use common::{FixedI128, PERCENTAGE_FACTOR};
use lending_pool_interface::types::asset_config::AssetConfig;
use lending_pool_interface::types::error::Error;
use lending_pool_interface::types::pool_config::PoolConfig;
use soroban_sdk::{assert_with_error, Address, Env, Symbol};

use crate::event;
use crate::storage::{read_asset, read_assets, read_pool_config};
use crate::types::account_data::AccountData;
use crate::types::ledger::Ledger;
use crate::types::pool_accounting::PoolAccounting;
use crate::types::price_provider::PriceProvider;

use super::account_position::calc_account_data;
use super::utils::validation::{require_liquidatable, require_not_paused};

pub fn liquidate(
    env: &Env,
    liquidator: &Address,
    who: &Address,
    asset: &Symbol,
) -> Result<(), Error> {
    liquidator.require_auth();

    require_not_paused(env);
    assert_with_error!(env, liquidator != who, Error::SelfLiquidation);

    let debt_asset = read_asset(env, asset)?;
    let config = read_pool_config(env)?;

    let mut pool = PoolAccounting::load(env, asset)?;
    let mut ledger = Ledger::load(env, who);
    let mut liquidator_ledger = Ledger::load(env, liquidator);

    // Fresh provider: the health check and the seizure share this invocation's quotes only
    let mut price_provider = PriceProvider::new(env)?;

    let account_data = calc_account_data(env, ledger.account(), &mut price_provider)?;
    require_liquidatable(env, &account_data)?;

    let debt = ledger.account().borrowed_of(asset);
    assert_with_error!(env, debt > 0, Error::NoDebt);

    let (covered_debt, seized_value) = calc_liquidation(
        &config,
        &debt_asset,
        debt,
        &account_data,
        &mut price_provider,
    )?;
    assert_with_error!(env, covered_debt > 0, Error::InvalidAmount);

    liquidator_ledger.debit_wallet(asset, covered_debt)?;

    let mut remaining_value = seized_value;
    let mut paid_value = 0;

    for symbol in read_assets(env).iter() {
        if remaining_value == 0 {
            break;
        }

        let collateral = ledger.account().collateral_of(&symbol);
        if collateral == 0 {
            continue;
        }

        let collat_asset = read_asset(env, &symbol)?;
        let collateral_value = price_provider.value_floor(&collat_asset, collateral)?;

        let (seized, value) = if collateral_value <= remaining_value {
            remaining_value -= collateral_value;
            (collateral, collateral_value)
        } else {
            let seized = price_provider.amount_floor(&collat_asset, remaining_value)?;
            remaining_value = 0;
            (seized, price_provider.value_floor(&collat_asset, seized)?)
        };

        if seized == 0 {
            continue;
        }

        ledger.seize_collateral(&symbol, seized)?;
        liquidator_ledger.credit_wallet(&symbol, seized)?;

        paid_value += value;
    }

    ledger.record_repay(asset, covered_debt)?;
    pool.repay(covered_debt)?;

    ledger.write();
    liquidator_ledger.write();
    pool.write();

    event::liquidation(env, liquidator, who, asset, covered_debt, paid_value);

    Ok(())
}

/// Returns the debt amount the liquidator covers and the collateral value it receives.
/// The cover is bounded by the close factor and by what the collateral can pay
/// including the liquidation bonus.
fn calc_liquidation(
    config: &PoolConfig,
    debt_asset: &AssetConfig,
    debt: i128,
    account_data: &AccountData,
    price_provider: &mut PriceProvider,
) -> Result<(i128, i128), Error> {
    let close_factor =
        FixedI128::from_percentage(config.close_factor).ok_or(Error::MathOverflowError)?;
    let bonus = FixedI128::from_percentage(PERCENTAGE_FACTOR + config.liquidation_bonus)
        .ok_or(Error::MathOverflowError)?;

    let covered_debt = close_factor
        .mul_int_ceil(debt)
        .ok_or(Error::MathOverflowError)?
        .min(debt);

    let covered_value = price_provider.value_ceil(debt_asset, covered_debt)?;
    let seized_value = bonus
        .mul_int(covered_value)
        .ok_or(Error::MathOverflowError)?;

    if seized_value <= account_data.collateral_value {
        return Ok((covered_debt, seized_value));
    }

    let seized_value = account_data.collateral_value;
    let covered_value = bonus
        .recip_mul_int(seized_value)
        .ok_or(Error::MathOverflowError)?;
    let covered_debt = price_provider
        .amount_floor(debt_asset, covered_value)?
        .min(debt);

    Ok((covered_debt, seized_value))
}
