//! Price type for shelf and offer prices.
//!
//! Uses centavo-based integer representation to avoid floating-point
//! precision issues. Serialized as a plain decimal number (`10.5`) so that
//! stored flyers stay readable by other clients.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// A non-negative amount in Brazilian reais.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price {
    amount_cents: u64,
}

impl Price {
    /// Create a price from centavos.
    pub fn from_cents(amount_cents: u64) -> Self {
        Self { amount_cents }
    }

    /// Create a price from a decimal amount, rounding to the nearest centavo.
    ///
    /// Returns `None` for negative, non-finite or out-of-range amounts.
    ///
    /// ```
    /// use encarte_core::Price;
    /// assert_eq!(Price::from_decimal(10.5).unwrap().amount_cents(), 1050);
    /// assert!(Price::from_decimal(-1.0).is_none());
    /// ```
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() || amount < 0.0 || amount > MAX_AMOUNT {
            return None;
        }
        Some(Self::from_cents((amount * 100.0).round() as u64))
    }

    /// Parse user-entered text such as `"10,50"` or `"7.5"`.
    ///
    /// The first comma is read as the decimal separator. The whole string
    /// must be plain digits with at most two decimal places.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingPrice);
        }
        let invalid = || ValidationError::InvalidPrice(trimmed.to_string());

        let normalized = trimmed.replacen(',', ".", 1);
        let (negative, digits) = match normalized.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, normalized.strip_prefix('+').unwrap_or(normalized.as_str())),
        };

        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if fraction.len() > 2 || !is_digits(whole) || !is_digits(fraction) {
            return Err(invalid());
        }
        if negative {
            return Err(ValidationError::NegativePrice(trimmed.to_string()));
        }

        let reais: u64 = if whole.is_empty() { 0 } else { whole.parse().map_err(|_| invalid())? };
        let centavos: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        reais
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(centavos))
            .map(Self::from_cents)
            .ok_or_else(invalid)
    }

    /// Amount in centavos.
    pub fn amount_cents(&self) -> u64 {
        self.amount_cents
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Whole percent saved by paying `offer` instead of `self`, rounded half up.
    ///
    /// Zero when the offer is not below this price.
    pub fn percent_off(&self, offer: Price) -> u8 {
        if offer >= *self {
            return 0;
        }
        let saved = (self.amount_cents - offer.amount_cents) as u128;
        let base = self.amount_cents as u128;
        // round(saved / base * 100) without floats
        ((saved * 200 + base) / (base * 2)) as u8
    }

    /// Format as a display string (e.g., "R$ 10,50").
    pub fn display(&self) -> String {
        format!("R$ {}", self.display_amount())
    }

    /// Format without symbol, comma as decimal separator (e.g., "10,50").
    pub fn display_amount(&self) -> String {
        format!("{},{:02}", self.amount_cents / 100, self.amount_cents % 100)
    }
}

/// Largest amount, in reais, that fits in whole centavos.
const MAX_AMOUNT: f64 = (u64::MAX / 100) as f64;

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

impl TryFrom<f64> for Price {
    type Error = ValidationError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        if amount < 0.0 {
            return Err(ValidationError::NegativePrice(amount.to_string()));
        }
        Price::from_decimal(amount).ok_or_else(|| ValidationError::InvalidPrice(amount.to_string()))
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> f64 {
        price.to_decimal()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
