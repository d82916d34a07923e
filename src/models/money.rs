//! Money type for representing currency amounts
//!
//! Wraps a [`Decimal`] so that sums keep the full precision of the input.
//! Rounding to two fractional digits happens only when an amount is
//! formatted for display.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A monetary amount in the report currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Money {
    /// Create a Money amount from a decimal
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal value
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Lossy conversion for statistics (means, deviations)
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    /// Add two amounts, `None` if the result is out of range
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtract an amount, `None` if the result is out of range
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Scale by a factor, `None` if the result is out of range
    pub fn checked_mul(self, factor: Decimal) -> Option<Self> {
        self.0.checked_mul(factor).map(Self)
    }

    /// Sum amounts, `None` as soon as a partial sum is out of range
    pub fn checked_sum<I: IntoIterator<Item = Self>>(amounts: I) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Self::zero(), |acc, m| acc.checked_add(m))
    }

    /// Parse a decimal amount such as "1250.75" or "-3.5"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        Decimal::from_str(s)
            .map(Self)
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))
    }

    /// Round half-up to cents
    pub fn rounded(&self) -> Self {
        let mut value = self.0.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if value.is_zero() {
            value.set_sign_positive(true);
        }
        value.rescale(2);
        Self(value)
    }

    /// Format with thousands separators and exactly two fractional digits
    ///
    /// The sign stays on the number: `-1,234.50`.
    pub fn format_grouped(&self) -> String {
        let text = self.rounded().0.to_string();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.as_str()),
        };
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        format!("{}{}.{}", if negative { "-" } else { "" }, grouped, fraction)
    }

    /// Format with a currency prefix
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self.format_grouped())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_grouped())
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: '{}'", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_grouped() {
        assert_eq!(Money::new(dec!(0)).format_grouped(), "0.00");
        assert_eq!(Money::new(dec!(5)).format_grouped(), "5.00");
        assert_eq!(Money::new(dec!(999.9)).format_grouped(), "999.90");
        assert_eq!(Money::new(dec!(1000)).format_grouped(), "1,000.00");
        assert_eq!(Money::new(dec!(1234567.891)).format_grouped(), "1,234,567.89");
        assert_eq!(Money::new(dec!(-1234.5)).format_grouped(), "-1,234.50");
    }

    #[test]
    fn test_rounding_is_half_up() {
        assert_eq!(Money::new(dec!(2.345)).format_grouped(), "2.35");
        assert_eq!(Money::new(dec!(2.344)).format_grouped(), "2.34");
        assert_eq!(Money::new(dec!(-2.345)).format_grouped(), "-2.35");
        assert_eq!(Money::new(dec!(999.995)).format_grouped(), "1,000.00");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(Money::new(dec!(-0.001)).format_grouped(), "0.00");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::new(dec!(1500)).format_with_symbol("$"), "$1,500.00");
        assert_eq!(Money::new(dec!(-20)).format_with_symbol("£"), "£-20.00");
        assert_eq!(Money::new(dec!(3.1)).format_with_symbol("XYZ "), "XYZ 3.10");
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::new(dec!(10.10));
        let b = Money::new(dec!(0.20));

        assert_eq!(a.checked_add(b).unwrap().value(), dec!(10.30));
        assert_eq!(a.checked_sub(b).unwrap().value(), dec!(9.90));
        assert_eq!(a.checked_mul(dec!(1.5)).unwrap().value(), dec!(15.150));
    }

    #[test]
    fn test_checked_arithmetic_overflow() {
        let max = Money::new(Decimal::MAX);
        let one = Money::new(Decimal::ONE);

        assert_eq!(max.checked_add(one), None);
        assert_eq!(Money::new(Decimal::MIN).checked_sub(one), None);
        assert_eq!(max.checked_mul(dec!(1.02)), None);
        assert_eq!(Money::checked_sum(vec![max, one]), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().value(), dec!(10.50));
        assert_eq!(Money::parse(" 7 ").unwrap().value(), dec!(7));
        assert_eq!(Money::parse("-3.125").unwrap().value(), dec!(-3.125));
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("").is_err());
        assert!(Money::parse("NaN").is_err());
    }

    #[test]
    fn test_sum_keeps_precision() {
        let amounts = vec![
            Money::new(dec!(0.1)),
            Money::new(dec!(0.2)),
            Money::new(dec!(0.005)),
        ];
        let total = Money::checked_sum(amounts).unwrap();
        assert_eq!(total.value(), dec!(0.305));
    }

    #[test]
    fn test_serialization() {
        let m = Money::new(dec!(10.5));
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "10.5");
    }
}
