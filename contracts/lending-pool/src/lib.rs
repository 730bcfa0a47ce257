#![no_std]

use lending_pool_interface::types::{
    account_position::AccountPosition, asset_config::AssetConfig, asset_input::AssetInput,
    deposit_kind::DepositKind, error::Error, pool_config::PoolConfig, pool_data::PoolData,
    user_account::UserAccount,
};
use lending_pool_interface::LendingPoolTrait;
use methods::{
    account_position::{account_position, collateral_value, debt_value, max_borrowable},
    borrow::borrow,
    deposit::deposit,
    deposit_collateral::deposit_collateral,
    initialize::initialize,
    liquidate::liquidate,
    pool::{pool, utilization},
    register_asset::register_asset,
    repay::repay,
    set_pause::set_pause,
    set_pool_configuration::set_pool_configuration,
    supply_to_pool::supply_to_pool,
    withdraw_collateral::withdraw_collateral,
    withdraw_from_pool::withdraw_from_pool,
};
use soroban_sdk::{contract, contractimpl, Address, Env, Symbol, Vec};

use crate::storage::*;

mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;
mod types;

#[contract]
pub struct LendingPool;

#[contractimpl]
impl LendingPoolTrait for LendingPool {
    fn initialize(env: Env, admin: Address, config: PoolConfig) -> Result<(), Error> {
        initialize(&env, &admin, &config)
    }

    fn admin(env: Env) -> Result<Address, Error> {
        read_admin(&env)
    }

    fn set_pool_configuration(env: Env, config: PoolConfig) -> Result<(), Error> {
        set_pool_configuration(&env, &config)
    }

    fn pool_configuration(env: Env) -> Result<PoolConfig, Error> {
        read_pool_config(&env)
    }

    fn set_pause(env: Env, value: bool) -> Result<(), Error> {
        set_pause(&env, value)
    }

    fn paused(env: Env) -> bool {
        paused(&env)
    }

    fn register_asset(env: Env, symbol: Symbol, input: AssetInput) -> Result<(), Error> {
        register_asset(&env, &symbol, &input)
    }

    fn asset(env: Env, symbol: Symbol) -> Result<AssetConfig, Error> {
        read_asset(&env, &symbol)
    }

    fn assets(env: Env) -> Vec<Symbol> {
        read_assets(&env)
    }

    fn deposit(
        env: Env,
        who: Address,
        asset: Symbol,
        amount: i128,
        kind: DepositKind,
    ) -> Result<(), Error> {
        deposit(&env, &who, &asset, amount, kind)
    }

    fn supply_to_pool(env: Env, who: Address, asset: Symbol, amount: i128) -> Result<(), Error> {
        supply_to_pool(&env, &who, &asset, amount)
    }

    fn withdraw_from_pool(
        env: Env,
        who: Address,
        asset: Symbol,
        amount: i128,
    ) -> Result<(), Error> {
        withdraw_from_pool(&env, &who, &asset, amount)
    }

    fn deposit_collateral(
        env: Env,
        who: Address,
        asset: Symbol,
        amount: i128,
    ) -> Result<(), Error> {
        deposit_collateral(&env, &who, &asset, amount)
    }

    fn withdraw_collateral(
        env: Env,
        who: Address,
        asset: Symbol,
        amount: i128,
    ) -> Result<(), Error> {
        withdraw_collateral(&env, &who, &asset, amount)
    }

    fn borrow(env: Env, who: Address, asset: Symbol, amount: i128) -> Result<(), Error> {
        borrow(&env, &who, &asset, amount)
    }

    fn repay(env: Env, who: Address, asset: Symbol, amount: i128) -> Result<(), Error> {
        repay(&env, &who, &asset, amount)
    }

    fn liquidate(env: Env, liquidator: Address, who: Address, asset: Symbol) -> Result<(), Error> {
        liquidate(&env, &liquidator, &who, &asset)
    }

    fn account(env: Env, who: Address) -> UserAccount {
        read_account(&env, &who)
    }

    fn pool(env: Env, asset: Symbol) -> Result<PoolData, Error> {
        pool(&env, &asset)
    }

    fn utilization(env: Env, asset: Symbol) -> Result<u32, Error> {
        utilization(&env, &asset)
    }

    fn collateral_value(env: Env, who: Address) -> Result<i128, Error> {
        collateral_value(&env, &who)
    }

    fn debt_value(env: Env, who: Address) -> Result<i128, Error> {
        debt_value(&env, &who)
    }

    fn max_borrowable(env: Env, who: Address, asset: Symbol) -> Result<i128, Error> {
        max_borrowable(&env, &who, &asset)
    }

    fn account_position(env: Env, who: Address) -> Result<AccountPosition, Error> {
        account_position(&env, &who)
    }
}
