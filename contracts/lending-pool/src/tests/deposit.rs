use lending_pool_interface::types::deposit_kind::DepositKind;
use soroban_sdk::testutils::{Address as _, AuthorizedFunction, Events};
use soroban_sdk::{symbol_short, vec, Address, Env, IntoVal};

use crate::tests::sut::{init_assets, to_wei, ETH, USD};

#[test]
fn should_require_admin() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_assets(&env);
    let user = Address::generate(&env);

    sut.deposit(&user, &ETH, to_wei(1), DepositKind::Wallet);

    assert_eq!(
        env.auths().pop().map(|f| f.0).unwrap(),
        sut.admin.clone()
    );
    assert_eq!(
        env.auths().pop().map(|f| f.1.function).unwrap(),
        AuthorizedFunction::Contract((
            sut.pool.address.clone(),
            symbol_short!("deposit"),
            (user.clone(), ETH, to_wei(1), DepositKind::Wallet).into_val(&env)
        )),
    );
}

#[test]
fn should_credit_requested_balance() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_assets(&env);
    let user = Address::generate(&env);

    sut.deposit(&user, &ETH, to_wei(2), DepositKind::Wallet);
    sut.deposit(&user, &ETH, to_wei(1), DepositKind::Collateral);
    sut.deposit(&user, &USD, to_wei(100), DepositKind::Pool);
    sut.deposit(&user, &USD, to_wei(50), DepositKind::Pool);

    assert_eq!(sut.wallet(&user, &ETH), to_wei(2));
    assert_eq!(sut.collateral(&user, &ETH), to_wei(1));
    assert_eq!(sut.supplied(&user, &USD), to_wei(150));
    assert_eq!(sut.wallet(&user, &USD), 0);
}

#[test]
fn should_grow_pool_liquidity_on_pool_deposit() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_assets(&env);
    let user = Address::generate(&env);

    sut.deposit(&user, &USD, to_wei(1_000), DepositKind::Pool);
    sut.deposit(&user, &USD, to_wei(1), DepositKind::Wallet);
    sut.deposit(&user, &USD, to_wei(1), DepositKind::Collateral);

    let pool = sut.pool.pool(&USD);
    assert_eq!(pool.total_supplied, to_wei(1_000));
    assert_eq!(pool.total_borrowed, 0);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #300)")]
fn should_fail_when_amount_not_positive() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_assets(&env);

    sut.deposit(&Address::generate(&env), &ETH, 0, DepositKind::Wallet);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #100)")]
fn should_fail_when_asset_unknown() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_assets(&env);

    sut.deposit(
        &Address::generate(&env),
        &symbol_short!("BTC"),
        1,
        DepositKind::Wallet,
    );
}

#[test]
fn should_emit_events() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_assets(&env);
    let user = Address::generate(&env);

    sut.deposit(&user, &ETH, to_wei(1), DepositKind::Collateral);

    let mut events = env.events().all();
    let event = events.pop_back_unchecked();

    assert_eq!(
        vec![&env, event],
        vec![
            &env,
            (
                sut.pool.address.clone(),
                (symbol_short!("deposit"), user.clone()).into_val(&env),
                (ETH, to_wei(1), DepositKind::Collateral).into_val(&env)
            ),
        ]
    );
}
