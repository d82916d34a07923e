//! Currency code and display symbol lookup

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Code used when no currency is configured
pub const DEFAULT_CURRENCY: &str = "USD";

/// A three-letter currency code, stored upper-case
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Parse a currency code, case-insensitively
    ///
    /// Any three ASCII letters are accepted; codes without a known symbol
    /// render with the code itself as prefix.
    pub fn parse(code: &str) -> Result<Self, CurrencyParseError> {
        let code = code.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CurrencyParseError::InvalidCode(code.to_string()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// The upper-case code
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Prefix placed in front of formatted amounts
    pub fn symbol(&self) -> String {
        match self.0.as_str() {
            "USD" => "$".to_string(),
            "EUR" => "€".to_string(),
            "GBP" => "£".to_string(),
            other => format!("{} ", other),
        }
    }

    /// Format an amount in this currency, e.g. `€1,204.50`
    pub fn format(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.symbol())
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self(DEFAULT_CURRENCY.to_string())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for currency parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrencyParseError {
    InvalidCode(String),
}

impl fmt::Display for CurrencyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyParseError::InvalidCode(s) => {
                write!(f, "Invalid currency code '{}': expected three letters", s)
            }
        }
    }
}

impl std::error::Error for CurrencyParseError {}
