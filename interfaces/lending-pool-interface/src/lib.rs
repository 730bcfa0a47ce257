#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env, Symbol, Vec};
use types::account_position::AccountPosition;
use types::asset_config::AssetConfig;
use types::asset_input::AssetInput;
use types::deposit_kind::DepositKind;
use types::error::Error;
use types::pool_config::PoolConfig;
use types::pool_data::PoolData;
use types::user_account::UserAccount;

pub mod types;

pub struct Spec;

/// Interface for collateral lending pool
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "LendingPoolClient")]
pub trait LendingPoolTrait {
    fn initialize(env: Env, admin: Address, config: PoolConfig) -> Result<(), Error>;

    fn admin(env: Env) -> Result<Address, Error>;

    fn set_pool_configuration(env: Env, config: PoolConfig) -> Result<(), Error>;

    fn pool_configuration(env: Env) -> Result<PoolConfig, Error>;

    fn set_pause(env: Env, value: bool) -> Result<(), Error>;

    fn paused(env: Env) -> bool;

    fn register_asset(env: Env, symbol: Symbol, input: AssetInput) -> Result<(), Error>;

    fn asset(env: Env, symbol: Symbol) -> Result<AssetConfig, Error>;

    fn assets(env: Env) -> Vec<Symbol>;

    /// Credits the ledger of record. Admin only.
    fn deposit(
        env: Env,
        who: Address,
        asset: Symbol,
        amount: i128,
        kind: DepositKind,
    ) -> Result<(), Error>;

    fn supply_to_pool(env: Env, who: Address, asset: Symbol, amount: i128) -> Result<(), Error>;

    fn withdraw_from_pool(
        env: Env,
        who: Address,
        asset: Symbol,
        amount: i128,
    ) -> Result<(), Error>;

    fn deposit_collateral(
        env: Env,
        who: Address,
        asset: Symbol,
        amount: i128,
    ) -> Result<(), Error>;

    fn withdraw_collateral(
        env: Env,
        who: Address,
        asset: Symbol,
        amount: i128,
    ) -> Result<(), Error>;

    fn borrow(env: Env, who: Address, asset: Symbol, amount: i128) -> Result<(), Error>;

    fn repay(env: Env, who: Address, asset: Symbol, amount: i128) -> Result<(), Error>;

    fn liquidate(env: Env, liquidator: Address, who: Address, asset: Symbol) -> Result<(), Error>;

    fn account(env: Env, who: Address) -> UserAccount;

    fn pool(env: Env, asset: Symbol) -> Result<PoolData, Error>;

    /// Total borrowed over total supplied in basis points
    fn utilization(env: Env, asset: Symbol) -> Result<u32, Error>;

    fn collateral_value(env: Env, who: Address) -> Result<i128, Error>;

    fn debt_value(env: Env, who: Address) -> Result<i128, Error>;

    /// Additional amount of `asset` the account may borrow against its collateral
    fn max_borrowable(env: Env, who: Address, asset: Symbol) -> Result<i128, Error>;

    fn account_position(env: Env, who: Address) -> Result<AccountPosition, Error>;
}
