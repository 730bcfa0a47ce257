use lending_pool_interface::types::asset_config::AssetConfig;
use lending_pool_interface::types::deposit_kind::DepositKind;
use lending_pool_interface::types::pool_config::PoolConfig;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub(crate) fn initialized(e: &Env, admin: &Address, config: &PoolConfig) {
    let topics = (Symbol::new(e, "initialize"), admin.clone());
    e.events().publish(
        topics,
        (
            config.price_max_age,
            config.close_factor,
            config.liquidation_bonus,
        ),
    );
}

pub(crate) fn pool_config_change(e: &Env, config: &PoolConfig) {
    let topics = (Symbol::new(e, "pool_config_change"),);
    e.events().publish(
        topics,
        (
            config.price_max_age,
            config.close_factor,
            config.liquidation_bonus,
        ),
    );
}

pub(crate) fn pause(e: &Env, value: bool) {
    let topics = (symbol_short!("pause"),);
    e.events().publish(topics, value);
}

pub(crate) fn asset_registered(e: &Env, config: &AssetConfig) {
    let topics = (Symbol::new(e, "asset_registered"), config.symbol.clone());
    e.events().publish(
        topics,
        (
            config.decimals,
            config.collateral_rate,
            config.oracle.clone(),
        ),
    );
}

pub(crate) fn deposit(e: &Env, who: &Address, asset: &Symbol, amount: i128, kind: DepositKind) {
    let topics = (symbol_short!("deposit"), who.clone());
    e.events().publish(topics, (asset.clone(), amount, kind));
}

pub(crate) fn supply(e: &Env, who: &Address, asset: &Symbol, amount: i128) {
    let topics = (symbol_short!("supply"), who.clone());
    e.events().publish(topics, (asset.clone(), amount));
}

pub(crate) fn withdraw_supply(e: &Env, who: &Address, asset: &Symbol, amount: i128) {
    let topics = (Symbol::new(e, "withdraw_supply"), who.clone());
    e.events().publish(topics, (asset.clone(), amount));
}

pub(crate) fn collateral_deposited(e: &Env, who: &Address, asset: &Symbol, amount: i128) {
    let topics = (Symbol::new(e, "collateral_deposited"), who.clone());
    e.events().publish(topics, (asset.clone(), amount));
}

pub(crate) fn collateral_withdrawn(e: &Env, who: &Address, asset: &Symbol, amount: i128) {
    let topics = (Symbol::new(e, "collateral_withdrawn"), who.clone());
    e.events().publish(topics, (asset.clone(), amount));
}

pub(crate) fn borrow(e: &Env, who: &Address, asset: &Symbol, amount: i128) {
    let topics = (symbol_short!("borrow"), who.clone());
    e.events().publish(topics, (asset.clone(), amount));
}

pub(crate) fn repay(e: &Env, who: &Address, asset: &Symbol, amount: i128) {
    let topics = (symbol_short!("repay"), who.clone());
    e.events().publish(topics, (asset.clone(), amount));
}

pub(crate) fn liquidation(
    e: &Env,
    liquidator: &Address,
    who: &Address,
    asset: &Symbol,
    covered_debt: i128,
    paid_value: i128,
) {
    let topics = (Symbol::new(e, "liquidation"), who.clone());
    e.events().publish(
        topics,
        (liquidator.clone(), asset.clone(), covered_debt, paid_value),
    );
}
