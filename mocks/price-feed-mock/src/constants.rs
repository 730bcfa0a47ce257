pub(crate) const DECIMALS: u32 = 14;
