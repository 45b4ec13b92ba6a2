//! Money type with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.
//! All amounts are held at exactly two decimal places, the precision the
//! billing formulas are defined over, so repeated recomputation can never
//! accumulate rounding drift.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub, Neg};
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// A monetary amount at two-decimal fixed precision
///
/// Money uses rust_decimal for precise arithmetic without floating-point
/// errors. Amounts are rounded to two decimal places on construction using
/// banker's rounding; every arithmetic result goes back through the same
/// rounding, so equality comparisons on Money are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Number of decimal places carried by every amount
    pub const SCALE: u32 = 2;

    /// Creates a new Money value, rounding to two decimal places
    pub fn new(amount: Decimal) -> Self {
        Self(amount.round_dp_with_strategy(
            Self::SCALE,
            rust_decimal::RoundingStrategy::MidpointNearestEven,
        ))
    }

    /// Creates Money from an integer amount in minor units (paise/cents)
    pub fn from_minor(minor_units: i64) -> Self {
        Self::new(Decimal::new(minor_units, Self::SCALE))
    }

    /// Creates Money from a whole number of major units
    pub fn from_major(major_units: i64) -> Self {
        Self::new(Decimal::new(major_units, 0))
    }

    /// The zero amount
    pub fn zero() -> Self {
        Self(dec!(0))
    }

    /// Returns the underlying decimal amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Returns true if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Multiplies by a scalar (e.g., a day count for per-day rates)
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.0 * factor)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::new(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money::new(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money::new(amount)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .map(Money::new)
            .map_err(|e| MoneyError::InvalidAmount(format!("{s}: {e}")))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rounds_to_two_places() {
        let m = Money::new(dec!(10.005));
        // banker's rounding: half to even
        assert_eq!(m.amount(), dec!(10.00));
        let m = Money::new(dec!(10.015));
        assert_eq!(m.amount(), dec!(10.02));
    }

    #[test]
    fn test_from_minor() {
        assert_eq!(Money::from_minor(165_000), Money::new(dec!(1650.00)));
    }

    #[test]
    fn test_arithmetic_is_exact() {
        let a = Money::new(dec!(1700.00));
        let b = Money::new(dec!(100.00));
        let c = Money::new(dec!(50.00));
        assert_eq!(a - b + c, Money::new(dec!(1650.00)));
    }

    #[test]
    fn test_sum() {
        let total: Money = [dec!(500.00), dec!(1200.00), dec!(0)]
            .into_iter()
            .map(Money::new)
            .sum();
        assert_eq!(total, Money::new(dec!(1700.00)));
    }

    #[test]
    fn test_sign_predicates() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_positive());
        assert!(!Money::zero().is_negative());
        assert!(Money::from_major(1).is_positive());
        assert!((-Money::from_major(1)).is_negative());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_major(1650).to_string(), "1650.00");
        assert_eq!(Money::new(dec!(0.5)).to_string(), "0.50");
    }

    #[test]
    fn test_parse() {
        assert_eq!("850.00".parse::<Money>(), Ok(Money::new(dec!(850))));
        assert!("abc".parse::<Money>().is_err());
    }
}
