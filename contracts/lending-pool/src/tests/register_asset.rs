use lending_pool_interface::types::asset_input::AssetInput;
use lending_pool_interface::types::pool_data::PoolData;
use soroban_sdk::testutils::{Address as _, AuthorizedFunction};
use soroban_sdk::{symbol_short, vec, Address, Env, IntoVal, String, Symbol};

use crate::tests::sut::{init_assets, init_pool, ETH, USD};

#[test]
fn should_require_admin() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let input = AssetInput {
        name: String::from_str(&env, "Ether"),
        decimals: 18,
        collateral_rate: 15_000,
        oracle: sut.price_feed.address.clone(),
    };

    sut.pool.register_asset(&ETH, &input);

    assert_eq!(
        env.auths().pop().map(|f| f.0).unwrap(),
        sut.admin.clone()
    );
    assert_eq!(
        env.auths().pop().map(|f| f.1.function).unwrap(),
        AuthorizedFunction::Contract((
            sut.pool.address.clone(),
            Symbol::new(&env, "register_asset"),
            (ETH, input).into_val(&env)
        )),
    );
}

#[test]
fn should_assign_ids_in_registration_order() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_assets(&env);

    let eth = sut.pool.asset(&ETH);
    let usd = sut.pool.asset(&USD);

    assert_eq!(sut.pool.assets(), vec![&env, ETH, USD]);
    assert_eq!(eth.id, 0);
    assert_eq!(usd.id, 1);
    assert_eq!(eth.symbol, ETH);
    assert_eq!(eth.name, String::from_str(&env, "Ether"));
    assert_eq!(eth.decimals, 18);
    assert_eq!(eth.collateral_rate, 15_000);
    assert_eq!(eth.oracle, sut.price_feed.address);
}

#[test]
fn should_create_empty_pool() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_assets(&env);

    assert_eq!(sut.pool.pool(&ETH), PoolData::default());
    assert_eq!(sut.pool.utilization(&ETH), 0);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #101)")]
fn should_fail_when_symbol_registered() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_assets(&env);

    sut.register_asset(&ETH, "Wrapped Ether", 12_000);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #102)")]
fn should_fail_when_rate_not_above_hundred_percent() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    sut.register_asset(&ETH, "Ether", 10_000);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #102)")]
fn should_fail_when_decimals_too_large() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    sut.pool.register_asset(
        &symbol_short!("BIG"),
        &AssetInput {
            name: String::from_str(&env, "Big"),
            decimals: 19,
            collateral_rate: 15_000,
            oracle: Address::generate(&env),
        },
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #100)")]
fn should_fail_to_read_unknown_asset() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_assets(&env);

    sut.pool.asset(&symbol_short!("BTC"));
}
