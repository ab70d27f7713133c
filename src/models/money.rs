//! Fixed-point monetary amounts
//!
//! Everything the ledger counts is an integer number of cents; floats never
//! touch an amount. The currency itself lives on the account, so rendering
//! is a plain decimal with the code appended where a caller asks for it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// An amount in hundredths of a currency unit
///
/// The wrapped i64 keeps arithmetic exact and covers roughly nine
/// quadrillion units either side of zero, which is enough for a household
/// ledger by a wide margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Build an amount from a cent count
    ///
    /// # Examples
    /// ```
    /// use fintrack::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Build an amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use fintrack::models::Money;
    /// let amount = Money::from_units(10); // 10.00
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// The zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Total cents, signed
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole-unit part, truncated toward zero
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Fractional part as cents, always 0-99
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Magnitude of the amount
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse user input like "10.50", "-10.50", "$10.50", or "10"
    ///
    /// A fractional part longer than two digits is truncated, never rounded.
    pub fn parse(input: &str) -> Result<Self, MoneyParseError> {
        let trimmed = input.trim();
        let bad = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);
        if rest.is_empty() {
            return Err(bad());
        }

        let magnitude = match rest.split_once('.') {
            Some((whole, frac)) => {
                let units: i64 = whole.parse().map_err(|_| bad())?;
                let cents: i64 = match frac.len() {
                    0 => 0,
                    1 => frac.parse::<i64>().map_err(|_| bad())? * 10,
                    _ => frac
                        .get(..2)
                        .ok_or_else(bad)?
                        .parse()
                        .map_err(|_| bad())?,
                };
                units * 100 + cents
            }
            None => rest.parse::<i64>().map_err(|_| bad())? * 100,
        };

        Ok(Self(if negative { -magnitude } else { magnitude }))
    }

    /// Render with the currency code appended, e.g. "10.50 USD"
    pub fn format_with_currency(&self, code: &str) -> String {
        format!("{} {}", self, code)
    }

    /// Render with thousands separators, e.g. "1,234.56"
    pub fn grouped(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, group_digits(self.units().abs()), self.cents_part())
    }
}

/// Comma-separate a non-negative number every three digits
fn group_digits(n: i64) -> String {
    let raw = n.to_string();
    let mut reversed = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, digit) in raw.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push(',');
        }
        reversed.push(digit);
    }
    reversed.chars().rev().collect()
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
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
        iter.fold(Money::zero(), Add::add)
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
