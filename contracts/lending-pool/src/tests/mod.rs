
mod account_position;
mod deposit;
mod register_asset;
