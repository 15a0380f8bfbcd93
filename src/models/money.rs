//! Money type for representing currency amounts
//!
//! Internally stores amounts in hundredths of the currency unit (i64) so that
//! totals are exact. Proportional cuts go through [`Money::scale`], which
//! rounds back to the nearest hundredth.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as hundredths of the currency unit
///
/// Amounts are displayed as whole units with thousands separators
/// (e.g. `1,234,567`), which is how household budgets in shillings are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

/// Largest amount accepted from user input, in whole units
pub const MAX_UNITS: i64 = 1_000_000_000_000;

impl Money {
    /// Upper bound for parsed and imported amounts
    ///
    /// Sums of many bounded amounts stay well inside `i64`.
    pub const MAX: Money = Money(MAX_UNITS * 100);

    /// Create a Money amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use budget_advisor::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use budget_advisor::models::Money;
    /// let rent = Money::from_units(500_000);
    /// assert_eq!(rent.cents(), 50_000_000);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a Money amount from a fractional number of units, rounding to
    /// the nearest hundredth
    pub fn from_units_f64(units: f64) -> Self {
        Self((units * 100.0).round() as i64)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in hundredths
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the amount as fractional units
    pub fn as_units_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Multiply by a factor, rounding half away from zero to the nearest
    /// hundredth
    ///
    /// A factor in `[0, 1]` never yields an amount larger than `self`.
    pub fn scale(&self, factor: f64) -> Self {
        Self((self.0 as f64 * factor).round() as i64)
    }

    /// Multiply by a factor, truncating toward zero
    ///
    /// Used where several scaled parts must not sum past a bound.
    pub fn scale_truncated(&self, factor: f64) -> Self {
        Self((self.0 as f64 * factor).trunc() as i64)
    }

    /// Ratio of this amount to another (`self / other`)
    ///
    /// Returns `None` when `other` is zero.
    pub fn ratio(&self, other: Money) -> Option<f64> {
        if other.is_zero() {
            None
        } else {
            Some(self.0 as f64 / other.0 as f64)
        }
    }

    /// This amount as a percentage of `whole`, or `None` if `whole` is zero
    pub fn percent_of(&self, whole: Money) -> Option<f64> {
        self.ratio(whole).map(|r| r * 100.0)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "5000000", "5,000,000", "1234.5", "-20.75".
    /// Integers are whole currency units.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, trimmed)
        };

        let digits: String = rest.chars().filter(|c| *c != ',' && *c != '_').collect();
        if digits.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let cents = if digits.contains('.') {
            let parts: Vec<&str> = digits.split('.').collect();
            if parts.len() != 2 {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }

            let units: i64 = if parts[0].is_empty() {
                0
            } else {
                parts[0]
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
            };

            // Pad or truncate the fraction to 2 digits
            let fraction = parts[1];
            let hundredths: i64 = match fraction.len() {
                0 => 0,
                1 => {
                    fraction
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => fraction[..2]
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            units
                .checked_mul(100)
                .and_then(|c| c.checked_add(hundredths))
                .ok_or_else(|| MoneyParseError::TooLarge(s.to_string()))?
        } else {
            digits
                .parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                .checked_mul(100)
                .ok_or_else(|| MoneyParseError::TooLarge(s.to_string()))?
        };

        if cents > Self::MAX.0 {
            return Err(MoneyParseError::TooLarge(s.to_string()));
        }
        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Whole units, rounded half away from zero
    pub fn rounded_units(&self) -> i64 {
        let whole = (self.0.abs() + 50) / 100;
        if self.is_negative() {
            -whole
        } else {
            whole
        }
    }

    /// Format with a trailing currency code, e.g. `500,000 UGX`
    pub fn format_with_code(&self, code: &str) -> String {
        if code.is_empty() {
            self.to_string()
        } else {
            format!("{} {}", self, code)
        }
    }
}

/// Insert thousands separators into a non-negative integer
fn group_thousands(value: u64) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.rounded_units();
        let grouped = group_thousands(units.unsigned_abs());
        let text = if units < 0 {
            format!("-{}", grouped)
        } else {
            grouped
        };
        f.pad(&text)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
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

impl std::str::FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooLarge(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::TooLarge(s) => {
                write!(f, "Amount too large: {} (limit {})", s, Money::MAX)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}
