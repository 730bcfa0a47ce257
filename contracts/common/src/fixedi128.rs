use soroban_fixed_point_math::FixedPoint;

use crate::PERCENTAGE_FACTOR;

/// Fixed type with inner type of i128 and fixed denominator 10e9.
/// Oracle prices and position values are carried in this precision.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct FixedI128(i128);

impl FixedI128 {
    pub const DENOMINATOR: i128 = 1_000_000_000;

    /// Returns inner value
    pub const fn into_inner(self) -> i128 {
        self.0
    }

    /// Construct FixedI128 from inner value
    pub fn from_inner<T: Into<i128>>(inner: T) -> FixedI128 {
        FixedI128(inner.into())
    }

    /// Construct fixed value from rational
    pub fn from_rational<N: Into<i128>, D: Into<i128>>(nom: N, denom: D) -> Option<FixedI128> {
        Self::DENOMINATOR
            .checked_mul(nom.into())?
            .checked_div(denom.into())
            .map(FixedI128)
    }

    /// Construct fixed value as percentage
    /// percentage expressed as 1% - 100, 100% - 10_000
    pub fn from_percentage<T: Into<i128>>(percentage: T) -> Option<FixedI128> {
        Self::from_rational(percentage, PERCENTAGE_FACTOR)
    }

    /// Calculates product of fixed value and int value.
    /// Result is int value rounded towards zero
    pub fn mul_int<T: Into<i128>>(self, other: T) -> Option<i128> {
        self.0
            .checked_mul(other.into())?
            .checked_div(Self::DENOMINATOR)
    }

    /// Calculates product of fixed value and int value.
    /// Result is int value rounded towards infinity
    pub fn mul_int_ceil<T: Into<i128>>(self, other: T) -> Option<i128> {
        other.into().fixed_mul_ceil(self.0, Self::DENOMINATOR)
    }

    /// Calculates division of non fixed int value and fixed value, e.g.  other / self.
    /// Result is int value
    pub fn recip_mul_int<T: Into<i128>>(self, other: T) -> Option<i128> {
        Self::DENOMINATOR
            .checked_mul(other.into())?
            .checked_div(self.0)
    }

    /// Returns true if self is positive, false - when negative or zero
    pub fn is_positive(self) -> bool {
        self.0.is_positive()
    }
}
