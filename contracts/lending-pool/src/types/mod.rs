pub mod account_data;
pub mod ledger;
pub mod pool_accounting;
pub mod price_provider;
