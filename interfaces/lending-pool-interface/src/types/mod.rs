pub mod account_position;
pub mod asset_config;
pub mod asset_input;
pub mod deposit_kind;
pub mod error;
pub mod pool_config;
pub mod pool_data;
pub mod position_state;
pub mod user_account;
