use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,
    Paused = 2,

    UnknownAsset = 100,
    DuplicateAsset = 101,
    InvalidConfig = 102,
    PriceUnavailable = 103,

    InsufficientBalance = 200,
    OverRepay = 201,
    NoDebt = 202,

    InvalidAmount = 300,
    InsufficientLiquidity = 301,
    WouldBreachCollateralRatio = 302,
    PositionHealthy = 303,
    SelfLiquidation = 304,

    MathOverflowError = 400,
}
