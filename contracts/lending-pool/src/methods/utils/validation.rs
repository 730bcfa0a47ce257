use common::{MAX_ASSET_DECIMALS, PERCENTAGE_FACTOR};
use lending_pool_interface::types::asset_input::AssetInput;
use lending_pool_interface::types::error::Error;
use lending_pool_interface::types::pool_config::PoolConfig;
use soroban_sdk::{assert_with_error, panic_with_error, Address, Env, Symbol};

use crate::storage::{has_admin, has_asset, paused, read_admin};
use crate::types::account_data::AccountData;

pub fn require_admin_not_exist(env: &Env) {
    if has_admin(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
}

pub fn require_admin(env: &Env) -> Result<(), Error> {
    let admin: Address = read_admin(env)?;
    admin.require_auth();
    Ok(())
}

pub fn require_valid_pool_config(env: &Env, config: &PoolConfig) {
    assert_with_error!(
        env,
        config.close_factor > 0 && config.close_factor <= PERCENTAGE_FACTOR,
        Error::InvalidConfig
    );
    assert_with_error!(
        env,
        config.liquidation_bonus < PERCENTAGE_FACTOR,
        Error::InvalidConfig
    );
    assert_with_error!(env, config.price_max_age > 0, Error::InvalidConfig);
}

pub fn require_valid_asset_input(env: &Env, input: &AssetInput) {
    assert_with_error!(
        env,
        input.decimals <= MAX_ASSET_DECIMALS,
        Error::InvalidConfig
    );
    assert_with_error!(
        env,
        input.collateral_rate > PERCENTAGE_FACTOR,
        Error::InvalidConfig
    );
}

pub fn require_unregistered_asset(env: &Env, symbol: &Symbol) {
    assert_with_error!(env, !has_asset(env, symbol), Error::DuplicateAsset);
}

pub fn require_positive_amount(env: &Env, amount: i128) {
    assert_with_error!(env, amount > 0, Error::InvalidAmount);
}

pub fn require_not_paused(env: &Env) {
    assert_with_error!(env, !paused(env), Error::Paused);
}

pub fn require_healthy_after(env: &Env, account_data: &AccountData) -> Result<(), Error> {
    assert_with_error!(
        env,
        account_data.is_healthy()?,
        Error::WouldBreachCollateralRatio
    );

    Ok(())
}

pub fn require_liquidatable(env: &Env, account_data: &AccountData) -> Result<(), Error> {
    assert_with_error!(env, !account_data.is_healthy()?, Error::PositionHealthy);

    Ok(())
}
