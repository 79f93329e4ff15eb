//! Money type for representing currency amounts
//!
//! Wraps a `rust_decimal::Decimal` so sums over budget items carry no float
//! rounding. The currency itself is an opaque label on the budget; Money never
//! converts between currencies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;
use tracing::warn;

/// A monetary amount in the budget's currency
///
/// Deserializes exactly from JSON numbers of any precision, YAML numbers and
/// decimal strings. Serializes as a decimal string so no digits are lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from a decimal value
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use allotment::models::Money;
    /// let rent = Money::from_major(1200);
    /// assert_eq!(rent.to_string(), "$1200.00");
    /// ```
    pub fn from_major(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Create a Money amount from cents (hundredths of the currency unit)
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal amount
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Share of `total` this amount represents, in percent
    ///
    /// A zero total yields zero rather than dividing by zero. A share outside
    /// the decimal range saturates at `Decimal::MAX` or `Decimal::MIN`.
    pub fn percent_of(&self, total: Money) -> Decimal {
        if total.is_zero() {
            return Decimal::ZERO;
        }

        Decimal::ONE_HUNDRED
            .checked_mul(self.0)
            .and_then(|scaled| scaled.checked_div(total.0))
            .or_else(|| {
                self.0
                    .checked_div(total.0)
                    .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            })
            .unwrap_or_else(|| {
                warn!(amount = %self.0, total = %total.0, "percentage out of range, saturating");
                if self.0.is_sign_negative() == total.0.is_sign_negative() {
                    Decimal::MAX
                } else {
                    Decimal::MIN
                }
            })
    }

    /// Add two amounts, saturating at the decimal range instead of overflowing
    pub fn saturating_add(self, other: Money) -> Money {
        match self.0.checked_add(other.0) {
            Some(sum) => Self(sum),
            None => {
                warn!(left = %self.0, right = %other.0, "amount sum out of range, saturating");
                Self(self.0.saturating_add(other.0))
            }
        }
    }

    /// Subtract two amounts, saturating at the decimal range instead of overflowing
    pub fn saturating_sub(self, other: Money) -> Money {
        match self.0.checked_sub(other.0) {
            Some(difference) => Self(difference),
            None => {
                warn!(
                    left = %self.0,
                    right = %other.0,
                    "amount difference out of range, saturating"
                );
                Self(self.0.saturating_sub(other.0))
            }
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "1,200.00"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };

        let rest = rest.strip_prefix('$').unwrap_or(rest);
        let digits: String = rest.chars().filter(|c| *c != ',').collect();

        let value = Decimal::from_str(&digits)
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }

    /// Format with a currency symbol, rounded to two decimal places
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = self.0.abs().round_dp(2);
        if self.is_negative() {
            format!("-{}{:.2}", symbol, rounded)
        } else {
            format!("{}{:.2}", symbol, rounded)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = self.saturating_add(other);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.saturating_sub(other)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = self.saturating_sub(other);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
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
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
