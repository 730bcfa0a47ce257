use lending_pool_interface::types::deposit_kind::DepositKind;
use lending_pool_interface::types::position_state::PositionState;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

use crate::tests::sut::{fill_pool, fill_pool_and_borrow, init_assets, to_wei, VALUE_UNIT, ETH, USD};

#[test]
fn should_be_healthy_without_debt() {
    let env = Env::default();
    env.mock_all_auths();

    let (sut, _, borrower) = fill_pool(&env);

    let position = sut.pool.account_position(&borrower);

    assert_eq!(position.collateral_value, 500 * VALUE_UNIT);
    assert_eq!(position.debt_value, 0);
    assert_eq!(position.required_rate, 0);
    assert_eq!(position.state, PositionState::Healthy);
}

#[test]
fn should_be_empty_for_unknown_account() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_assets(&env);
    let stranger = Address::generate(&env);

    let position = sut.pool.account_position(&stranger);

    assert_eq!(position.collateral_value, 0);
    assert_eq!(position.debt_value, 0);
    assert_eq!(position.state, PositionState::Healthy);
    assert_eq!(sut.pool.max_borrowable(&stranger, &USD), 0);
}

#[test]
fn should_value_collateral_and_debt() {
    let env = Env::default();
    env.mock_all_auths();

    let (sut, _, borrower) = fill_pool_and_borrow(&env);

    let position = sut.pool.account_position(&borrower);

    assert_eq!(position.collateral_value, 500 * VALUE_UNIT);
    assert_eq!(position.debt_value, 300 * VALUE_UNIT);
    assert_eq!(position.required_rate, 15_000);
    assert_eq!(position.state, PositionState::Healthy);

    assert_eq!(sut.pool.collateral_value(&borrower), 500 * VALUE_UNIT);
    assert_eq!(sut.pool.debt_value(&borrower), 300 * VALUE_UNIT);
}

#[test]
fn should_ignore_wallet_and_supplied_funds() {
    let env = Env::default();
    env.mock_all_auths();

    let (sut, lender, borrower) = fill_pool(&env);
    sut.deposit(&borrower, &USD, to_wei(100), DepositKind::Pool);

    assert_eq!(sut.pool.collateral_value(&lender), 0);
    assert_eq!(sut.pool.collateral_value(&borrower), 500 * VALUE_UNIT);
}

#[test]
fn should_round_debt_up_and_collateral_down() {
    let env = Env::default();
    env.mock_all_auths();

    let (sut, _, borrower) = fill_pool(&env);
    let user = Address::generate(&env);
    sut.deposit(&user, &ETH, 1, DepositKind::Collateral);

    sut.pool.borrow(&borrower, &USD, &1);

    assert_eq!(sut.pool.collateral_value(&user), 0);
    assert_eq!(sut.pool.debt_value(&borrower), 1);
}

#[test]
fn should_become_liquidatable_after_price_drop() {
    let env = Env::default();
    env.mock_all_auths();

    let (sut, _, borrower) = fill_pool_and_borrow(&env);

    sut.set_price(&ETH, 450);
    assert_eq!(
        sut.pool.account_position(&borrower).state,
        PositionState::Healthy
    );

    sut.set_price(&ETH, 449);
    assert_eq!(
        sut.pool.account_position(&borrower).state,
        PositionState::Liquidatable
    );
}

#[test]
fn should_apply_highest_rate_of_borrowed_assets() {
    let env = Env::default();
    env.mock_all_auths();

    let (sut, _, borrower) = fill_pool(&env);
    let gold = soroban_sdk::symbol_short!("XAU");
    sut.register_asset(&gold, "Gold", 20_000);
    sut.set_price(&gold, 2);

    let lender = Address::generate(&env);
    sut.deposit(&lender, &gold, to_wei(1_000), DepositKind::Pool);

    // 500 of collateral at 200% backs 250 of value, 125 XAU
    assert_eq!(sut.pool.max_borrowable(&borrower, &gold), to_wei(125));

    sut.pool.borrow(&borrower, &gold, &to_wei(50));

    let position = sut.pool.account_position(&borrower);
    assert_eq!(position.debt_value, 100 * VALUE_UNIT);
    assert_eq!(position.required_rate, 20_000);

    // Borrowing USD is now also held to 200%: 250 - 100 left
    assert_eq!(sut.pool.max_borrowable(&borrower, &USD), to_wei(150));
}

#[test]
fn should_report_utilization() {
    let env = Env::default();
    env.mock_all_auths();

    let (sut, _, borrower) = fill_pool(&env);
    assert_eq!(sut.pool.utilization(&USD), 0);
    assert_eq!(sut.pool.utilization(&ETH), 0);

    sut.pool.borrow(&borrower, &USD, &to_wei(125));

    assert_eq!(sut.pool.utilization(&USD), 1_250);
}
