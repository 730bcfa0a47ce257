use crate::*;
use price_feed_interface::PriceFeedClient;
use soroban_sdk::testutils::Ledger as _;
use soroban_sdk::{symbol_short, Env};

#[test]
fn should_return_last_price() {
    let e = Env::default();
    let address = e.register_contract(None, PriceFeedMock);
    let mock = PriceFeedMockClient::new(&e, &address);
    let client = PriceFeedClient::new(&e, &address);

    e.ledger().set_timestamp(900);

    let eth = Asset::Other(symbol_short!("ETH"));
    let usd = Asset::Other(symbol_short!("USD"));

    mock.set_price(&eth, &50_000_000_000_000_000, &900);
    mock.set_price(&usd, &100_000_000_000_000, &0);

    assert_eq!(client.decimals(), 14);
    assert_eq!(
        client.lastprice(&eth),
        Some(PriceData {
            price: 50_000_000_000_000_000,
            timestamp: 900,
        })
    );
    assert_eq!(client.lastprice(&usd).unwrap().timestamp, 0);

    mock.set_price(&eth, &40_000_000_000_000_000, &901);
    assert_eq!(client.lastprice(&eth).unwrap().price, 40_000_000_000_000_000);
}

#[test]
fn should_return_none_when_price_missing() {
    let e = Env::default();
    let address = e.register_contract(None, PriceFeedMock);
    let mock = PriceFeedMockClient::new(&e, &address);
    let client = PriceFeedClient::new(&e, &address);

    let eth = Asset::Other(symbol_short!("ETH"));

    assert_eq!(client.lastprice(&eth), None);

    mock.set_price(&eth, &1, &0);
    mock.remove_price(&eth);

    assert_eq!(client.lastprice(&eth), None);
}
