//! Fixed-point monetary amount in whole cents.
//!
//! Wraps `rust_decimal` so limits, balances, charges and payments never pick
//! up floating-point drift. Amounts finer than a cent are rejected at the
//! boundary instead of being rounded, so a limit check always sees the
//! amount the caller asked for.

use crate::error::{CardError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

/// A decimal amount with at most 2 fractional digits, displayed with exactly 2.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use card_ledger::Money;
///
/// let amount = Money::from_str("10.5").unwrap();
/// assert_eq!(amount.to_string(), "10.50");
/// assert!(Money::from_str("10.505").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// Maximum number of fractional digits an amount may carry.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Wraps `value` exactly, failing with [`CardError::InvalidInput`] if it
    /// has sub-cent precision. Trailing zeros (`"1.500"`) are fine.
    pub fn exact(value: Decimal) -> Result<Self> {
        let normalized = value.normalize();
        if normalized.scale() > Self::SCALE {
            return Err(CardError::invalid_input(format!(
                "amount {} has more than {} decimal places",
                value,
                Self::SCALE
            )));
        }
        Ok(Money(normalized))
    }

    /// Creates an amount of whole currency units.
    pub fn whole(units: i64) -> Self {
        Money(Decimal::from(units))
    }

    /// Returns `true` if this value is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl FromStr for Money {
    type Err = CardError;

    /// Accepts plain (`"12.5"`) and scientific (`"1.25e1"`) notation.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let decimal = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| {
                CardError::invalid_input(format!(
                    "amount must be an integer or decimal number, got {:?}",
                    s
                ))
            })?;
        Money::exact(decimal)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

// Sums and differences of cent amounts stay cent amounts, so no rescaling.
impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Reads the textual form, with the same sub-cent rejection as [`FromStr`].
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A value that can be read as a monetary amount.
///
/// Charges and payments take either text (as typed by a user) or a number.
/// Text that does not parse, non-finite floats and anything finer than a
/// cent are rejected as [`CardError::InvalidInput`].
pub trait IntoAmount {
    fn into_amount(self) -> Result<Money>;
}

impl IntoAmount for Money {
    fn into_amount(self) -> Result<Money> {
        Ok(self)
    }
}

impl IntoAmount for &str {
    fn into_amount(self) -> Result<Money> {
        self.parse()
    }
}

impl IntoAmount for String {
    fn into_amount(self) -> Result<Money> {
        self.as_str().into_amount()
    }
}

impl IntoAmount for f64 {
    fn into_amount(self) -> Result<Money> {
        let decimal = Decimal::try_from(self).map_err(|_| {
            CardError::invalid_input(format!("amount {} is not a finite number", self))
        })?;
        Money::exact(decimal)
    }
}

macro_rules! impl_into_amount_for_int {
    ($($t:ty),*) => {
        $(
            impl IntoAmount for $t {
                fn into_amount(self) -> Result<Money> {
                    Ok(Money(Decimal::from(self)))
                }
            }
        )*
    };
}

impl_into_amount_for_int!(i32, i64, u32);
