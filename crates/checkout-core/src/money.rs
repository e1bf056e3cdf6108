//! # Money Types
//!
//! Monetary amounts for the checkout relay. Amounts travel as decimal
//! strings end to end, never as floats.

use crate::error::{CheckoutError, CheckoutResult};
use serde::{Deserialize, Serialize};

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
    CHF,
    MXN,
}

impl Currency {
    /// Returns the ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::CHF => "CHF",
            Currency::MXN => "MXN",
        }
    }

    /// Returns the number of minor-unit digits for this currency
    /// (JPY has 0 decimals, the rest here have 2)
    pub fn decimal_places(&self) -> usize {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::USD
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A monetary amount with its currency, value kept as a decimal string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// ISO 4217 currency code
    pub currency_code: Currency,
    /// Non-negative decimal amount, e.g. "100.00"
    pub value: String,
}

impl Money {
    /// Create a new amount
    pub fn new(currency_code: Currency, value: impl Into<String>) -> Self {
        Self {
            currency_code,
            value: value.into(),
        }
    }

    /// Validate the decimal-string invariant: non-empty, non-negative,
    /// digits with at most one decimal point, fractional digits bounded
    /// by the currency's minor-unit count.
    pub fn validate(&self) -> CheckoutResult<()> {
        let value = self.value.as_str();

        if value.is_empty() {
            return Err(CheckoutError::InvalidAmount {
                message: "amount value is empty".to_string(),
            });
        }

        let mut parts = value.splitn(2, '.');
        let integral = parts.next().unwrap_or_default();
        let fractional = parts.next();

        if integral.is_empty() || !integral.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CheckoutError::InvalidAmount {
                message: format!("malformed amount value: {value:?}"),
            });
        }

        if let Some(frac) = fractional {
            if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
                return Err(CheckoutError::InvalidAmount {
                    message: format!("malformed amount value: {value:?}"),
                });
            }
            if frac.len() > self.currency_code.decimal_places() {
                return Err(CheckoutError::InvalidAmount {
                    message: format!(
                        "{} allows {} fractional digits, got {value:?}",
                        self.currency_code,
                        self.currency_code.decimal_places()
                    ),
                });
            }
        }

        Ok(())
    }

    /// Format for display (e.g., "100.00 USD")
    pub fn display(&self) -> String {
        format!("{} {}", self.value, self.currency_code)
    }
}
