use lending_pool_interface::types::asset_config::AssetConfig;
use lending_pool_interface::types::asset_input::AssetInput;
use lending_pool_interface::types::error::Error;
use lending_pool_interface::types::pool_data::PoolData;
use soroban_sdk::{Env, Symbol};

use crate::event;
use crate::storage::{read_assets, write_asset, write_assets, write_pool};

use super::utils::validation::{
    require_admin, require_unregistered_asset, require_valid_asset_input,
};

pub fn register_asset(env: &Env, symbol: &Symbol, input: &AssetInput) -> Result<(), Error> {
    require_admin(env)?;
    require_unregistered_asset(env, symbol);
    require_valid_asset_input(env, input);

    let mut assets = read_assets(env);

    let config = AssetConfig {
        id: assets.len(),
        symbol: symbol.clone(),
        name: input.name.clone(),
        decimals: input.decimals,
        collateral_rate: input.collateral_rate,
        oracle: input.oracle.clone(),
    };

    assets.push_back(symbol.clone());

    write_assets(env, &assets);
    write_asset(env, &config);
    write_pool(env, symbol, &PoolData::default());

    event::asset_registered(env, &config);

    Ok(())
}
