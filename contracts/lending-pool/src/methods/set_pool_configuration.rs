use lending_pool_interface::types::error::Error;
use lending_pool_interface::types::pool_config::PoolConfig;
use soroban_sdk::Env;

use crate::event;
use crate::storage::write_pool_config;

use super::utils::validation::{require_admin, require_valid_pool_config};

pub fn set_pool_configuration(env: &Env, config: &PoolConfig) -> Result<(), Error> {
    require_admin(env)?;
    require_valid_pool_config(env, config);

    write_pool_config(env, config);

    event::pool_config_change(env, config);

    Ok(())
}
