pub mod account_position;
pub mod borrow;
pub mod deposit;
pub mod deposit_collateral;
pub mod initialize;
pub mod liquidate;
pub mod pool;
pub mod register_asset;
pub mod repay;
pub mod set_pause;
pub mod set_pool_configuration;
pub mod supply_to_pool;
pub mod withdraw_collateral;
pub mod withdraw_from_pool;

pub mod utils;
