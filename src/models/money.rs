//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point drift when
//! summing. On disk an amount is a plain JSON number of currency units, so
//! `4.5` in the ledger file is four and a half, not 4.5 cents.
//!
//! A single amount is limited to [`Money::MAX`] in either direction, so even
//! tens of millions of maximal records sum without leaving the i64 range.
//! Sums saturate rather than wrap past that.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
///
/// No sign constraint is enforced: refunds can be recorded as negative
/// expenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Largest amount accepted from input or a ledger file (999,999,999.99)
    pub const MAX: Money = Money(99_999_999_999);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Convert a floating point number of units, rounding to the nearest cent
    ///
    /// Used for amounts read from a ledger file. Non-finite values and values
    /// beyond [`Money::MAX`] are rejected.
    pub fn from_units(units: f64) -> Result<Self, MoneyParseError> {
        let cents = (units * 100.0).round();
        if !cents.is_finite() || cents.abs() > Self::MAX.0 as f64 {
            return Err(MoneyParseError::OutOfRange(units.to_string()));
        }
        Ok(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as a floating point number of units
    pub fn to_units(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from console input
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", ".75".
    /// More than two decimal places, or a magnitude above [`Money::MAX`],
    /// is rejected rather than rounded.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(input.to_string());

        // Handle sign at start
        let (negative, rest) = if let Some(stripped) = input.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, input.strip_prefix('+').unwrap_or(input))
        };

        // Remove currency symbol if present
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let (whole, frac) = rest.split_once('.').unwrap_or((rest, ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(whole) || !all_digits(frac) {
            return Err(invalid());
        }
        if frac.len() > 2 {
            return Err(MoneyParseError::TooPrecise(input.to_string()));
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        // Pad cents to 2 digits
        let cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        let total = dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .filter(|&c| c <= Self::MAX.0)
            .ok_or_else(|| MoneyParseError::OutOfRange(input.to_string()))?;

        Ok(Self(if negative { -total } else { total }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_units())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let units = f64::deserialize(deserializer)?;
        Self::from_units(units).map_err(serde::de::Error::custom)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    /// Finer than a cent
    TooPrecise(String),
    /// Larger in magnitude than `Money::MAX`
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::TooPrecise(s) => {
                write!(f, "Amount has more than two decimal places: {}", s)
            }
            MoneyParseError::OutOfRange(s) => write!(f, "Amount is out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_from_units_rounds_to_cents() {
        assert_eq!(Money::from_units(4.5).unwrap().cents(), 450);
        assert_eq!(Money::from_units(0.1 + 0.2).unwrap().cents(), 30);
        assert_eq!(Money::from_units(-2.5).unwrap().cents(), -250);
    }

    #[test]
    fn test_from_units_rejects_out_of_range() {
        assert!(Money::from_units(999_999_999.99).is_ok());
        assert!(Money::from_units(1e12).is_err());
        assert!(Money::from_units(-1e17).is_err());
        assert!(Money::from_units(f64::NAN).is_err());
        assert!(Money::from_units(f64::INFINITY).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "0.05");
        assert_eq!(format!("{}", Money::from_cents(-5)), "-0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("+3").unwrap().cents(), 300);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("  2.00 ").unwrap().cents(), 200);
        assert_eq!(Money::parse("999999999.99").unwrap(), Money::MAX);
        assert_eq!(Money::parse("-999999999.99").unwrap(), -Money::MAX);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("1.-5").is_err());
        assert!(Money::parse("-").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_parse_rejects_sub_cent_digits() {
        assert_eq!(
            Money::parse("4.567"),
            Err(MoneyParseError::TooPrecise("4.567".to_string()))
        );
        assert!(Money::parse("0.009").is_err());
        assert!(Money::parse("4.500").is_err());
    }

    #[test]
    fn test_parse_rejects_too_large() {
        assert_eq!(
            Money::parse("1000000000"),
            Err(MoneyParseError::OutOfRange("1000000000".to_string()))
        );
        assert!(Money::parse("90000000000000000").is_err());
        assert!(Money::parse("-90000000000000000").is_err());
    }

    #[test]
    fn test_sum_of_large_amounts_does_not_overflow() {
        let many = vec![Money::MAX; 1000];
        let total: Money = many.iter().sum();
        assert_eq!(total.cents(), Money::MAX.cents() * 1000);

        let saturated = Money::from_cents(i64::MAX) + Money::from_cents(1);
        assert_eq!(saturated.cents(), i64::MAX);
        assert_eq!((-Money::from_cents(i64::MIN)).cents(), i64::MAX);
    }

    #[test]
    fn test_is_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(-100).is_negative());
        assert!(!Money::from_cents(100).is_negative());
    }

    #[test]
    fn test_comparison() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert!(a > b);
        assert!(b < a);
        assert_eq!(a, Money::from_cents(1000));
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let by_ref: Money = amounts.iter().sum();
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
        assert_eq!(by_ref, total);
    }

    #[test]
    fn test_serialization_as_units() {
        let m = Money::from_cents(450);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "4.5");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);

        let from_int: Money = serde_json::from_str("12").unwrap();
        assert_eq!(from_int.cents(), 1200);

        let sub_cent: Money = serde_json::from_str("4.567").unwrap();
        assert_eq!(sub_cent.cents(), 457);
        assert!(serde_json::from_str::<Money>("1e300").is_err());
    }
}
