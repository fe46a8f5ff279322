//! Exact decimal quantity used for every countable resource.
//!
//! Inventory amounts, coins, node yields and experience all flow through
//! [`Quantity`]. Comparisons that gate spending go through its `Ord`
//! implementation, so fractional amounts never pass through floating point.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Non-negative decimal amount of a resource.
///
/// Subtraction does not clamp: taking more than is available is a caller bug
/// that must be ruled out by a comparison first. Use [`Quantity::checked_sub`]
/// when the comparison and the subtraction belong together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Quantity(Decimal);

impl Quantity {
    pub const ZERO: Self = Self(Decimal::ZERO);
    pub const ONE: Self = Self(Decimal::ONE);

    /// Whole-unit quantity.
    pub fn new(units: u64) -> Self {
        Self(Decimal::from(units))
    }

    pub const fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub const fn decimal(self) -> Decimal {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Adds `rhs`, returning `None` if the result exceeds the decimal range.
    pub fn checked_add(self, rhs: Quantity) -> Option<Quantity> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Subtracts `rhs`, returning `None` if the result would be negative.
    pub fn checked_sub(self, rhs: Quantity) -> Option<Quantity> {
        let result = Self(self.0.checked_sub(rhs.0)?);
        (!result.is_negative()).then_some(result)
    }

    /// Multiplies by an exact decimal factor (boost multipliers, unit prices).
    pub fn scaled(self, factor: Decimal) -> Quantity {
        Self(self.0 * factor)
    }

    /// Whole units, dropping any fractional part. Negative values map to zero.
    pub fn whole_units(self) -> u64 {
        self.0.trunc().to_u64().unwrap_or_default()
    }
}

impl From<u32> for Quantity {
    fn from(units: u32) -> Self {
        Self(Decimal::from(units))
    }
}

impl From<u64> for Quantity {
    fn from(units: u64) -> Self {
        Self(Decimal::from(units))
    }
}

impl From<Decimal> for Quantity {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl FromStr for Quantity {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s).map(Self)
    }
}

impl Add for Quantity {
    type Output = Quantity;
    fn add(self, rhs: Quantity) -> Quantity {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Quantity) {
        self.0 += rhs.0;
    }
}

impl Sub for Quantity {
    type Output = Quantity;
    fn sub(self, rhs: Quantity) -> Quantity {
        debug_assert!(self >= rhs, "quantity underflow: {self} - {rhs}");
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Quantity {
    fn sub_assign(&mut self, rhs: Quantity) {
        *self = *self - rhs;
    }
}

impl Mul<u32> for Quantity {
    type Output = Quantity;
    fn mul(self, rhs: u32) -> Quantity {
        Self(self.0 * Decimal::from(rhs))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(s: &str) -> Quantity {
        s.parse().unwrap()
    }

    #[test]
    fn fractional_arithmetic_is_exact() {
        // 0.1 + 0.2 must equal 0.3 exactly, unlike binary floating point.
        assert_eq!(q("0.1") + q("0.2"), q("0.3"));
        assert_eq!(q("1") - q("0.9") - q("0.1"), Quantity::ZERO);
    }

    #[test]
    fn checked_add_reports_overflow() {
        let max = Quantity::from_decimal(Decimal::MAX);
        assert_eq!(max.checked_add(Quantity::ONE), None);
        assert_eq!(q("1.5").checked_add(q("2.5")), Some(Quantity::new(4)));
    }

    #[test]
    fn checked_sub_refuses_to_go_negative() {
        assert_eq!(q("2.5").checked_sub(q("2.5")), Some(Quantity::ZERO));
        assert_eq!(q("2.5").checked_sub(q("2.6")), None);
    }

    #[test]
    fn comparisons_respect_fractions() {
        assert!(q("0.99") < Quantity::ONE);
        assert!(q("1.00") >= Quantity::ONE);
        assert_eq!(q("3.00"), Quantity::new(3));
    }

    #[test]
    fn display_drops_trailing_zeros() {
        assert_eq!(q("94.50").to_string(), "94.5");
        assert_eq!(Quantity::new(2).to_string(), "2");
    }

    #[test]
    fn whole_units_truncates() {
        assert_eq!(q("7.9").whole_units(), 7);
        assert_eq!(Quantity::ZERO.whole_units(), 0);
    }
}
