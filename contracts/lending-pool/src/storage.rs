use lending_pool_interface::types::asset_config::AssetConfig;
use lending_pool_interface::types::error::Error;
use lending_pool_interface::types::pool_config::PoolConfig;
use lending_pool_interface::types::pool_data::PoolData;
use lending_pool_interface::types::user_account::UserAccount;
use soroban_sdk::{contracttype, vec, Address, Env, Symbol, Vec};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_USER_DATA_BUMP_LEDGERS: u32 = 10 * DAY_IN_LEDGERS; // 10 days
pub(crate) const HIGH_USER_DATA_BUMP_LEDGERS: u32 = 20 * DAY_IN_LEDGERS; // 20 days

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    PoolConfig,
    Pause,
    Assets,
    Asset(Symbol),
    Pool(Symbol),
    Account(Address),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);
}

pub fn has_admin(env: &Env) -> bool {
    bump_instance(env);

    env.storage().instance().has(&DataKey::Admin)
}

pub fn write_admin(env: &Env, admin: &Address) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_admin(env: &Env) -> Result<Address, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::Uninitialized)
}

pub fn write_pool_config(env: &Env, config: &PoolConfig) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::PoolConfig, config);
}

pub fn read_pool_config(env: &Env) -> Result<PoolConfig, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::PoolConfig)
        .ok_or(Error::Uninitialized)
}

pub fn paused(env: &Env) -> bool {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Pause)
        .unwrap_or(false)
}

pub fn write_pause(env: &Env, value: bool) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Pause, &value);
}

pub fn read_assets(env: &Env) -> Vec<Symbol> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Assets)
        .unwrap_or(vec![env])
}

pub fn write_assets(env: &Env, assets: &Vec<Symbol>) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Assets, assets);
}

pub fn has_asset(env: &Env, symbol: &Symbol) -> bool {
    bump_instance(env);

    env.storage()
        .instance()
        .has(&DataKey::Asset(symbol.clone()))
}

pub fn read_asset(env: &Env, symbol: &Symbol) -> Result<AssetConfig, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Asset(symbol.clone()))
        .ok_or(Error::UnknownAsset)
}

pub fn write_asset(env: &Env, config: &AssetConfig) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&DataKey::Asset(config.symbol.clone()), config);
}

pub fn read_pool(env: &Env, asset: &Symbol) -> Result<PoolData, Error> {
    let key = DataKey::Pool(asset.clone());
    let pool = env.storage().persistent().get(&key);

    if pool.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            LOW_USER_DATA_BUMP_LEDGERS,
            HIGH_USER_DATA_BUMP_LEDGERS,
        );
    }

    pool.ok_or(Error::UnknownAsset)
}

pub fn write_pool(env: &Env, asset: &Symbol, pool: &PoolData) {
    let key = DataKey::Pool(asset.clone());
    env.storage().persistent().set(&key, pool);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );
}

/// Returns an empty account for an address the pool has never seen
pub fn read_account(env: &Env, who: &Address) -> UserAccount {
    let key = DataKey::Account(who.clone());
    let account = env.storage().persistent().get(&key);

    if account.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            LOW_USER_DATA_BUMP_LEDGERS,
            HIGH_USER_DATA_BUMP_LEDGERS,
        );
    }

    account.unwrap_or_else(|| UserAccount::new(env))
}

pub fn write_account(env: &Env, who: &Address, account: &UserAccount) {
    let key = DataKey::Account(who.clone());
    env.storage().persistent().set(&key, account);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );
}
