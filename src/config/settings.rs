//! Run settings for cashflow-report
//!
//! The currency is the only environment-level setting. It is resolved once
//! and then passed explicitly through the pipeline.

use rust_decimal::Decimal;

use crate::error::ReportError;
use crate::export::ReportFormat;
use crate::models::{Currency, Money};

/// Default cutoff for the high-value transaction listing
pub const DEFAULT_HIGH_VALUE_THRESHOLD: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// Settings for one report run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Currency amounts are displayed in
    pub currency: Currency,

    /// Document format to write
    pub format: ReportFormat,

    /// Cutoff for the high-value section of the insights summary
    pub high_value_threshold: Money,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            format: ReportFormat::default(),
            high_value_threshold: Money::new(DEFAULT_HIGH_VALUE_THRESHOLD),
        }
    }
}

impl Settings {
    /// Build settings from a raw currency code
    ///
    /// `None` or a blank code selects the default currency.
    pub fn with_currency(code: Option<&str>) -> Result<Self, ReportError> {
        let currency = match code.map(str::trim).filter(|c| !c.is_empty()) {
            Some(code) => {
                Currency::parse(code).map_err(|e| ReportError::Config(e.to_string()))?
            }
            None => Currency::default(),
        };

        Ok(Self {
            currency,
            ..Self::default()
        })
    }

    /// Set the output format
    pub fn format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the high-value threshold
    pub fn high_value_threshold(mut self, threshold: Money) -> Self {
        self.high_value_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency.code(), "USD");
        assert_eq!(settings.format, ReportFormat::Html);
        assert_eq!(settings.high_value_threshold.value(), dec!(500));
    }

    #[test]
    fn test_with_currency() {
        assert_eq!(Settings::with_currency(Some("eur")).unwrap().currency.code(), "EUR");
        assert_eq!(Settings::with_currency(Some("  ")).unwrap().currency.code(), "USD");
        assert_eq!(Settings::with_currency(None).unwrap().currency.code(), "USD");
    }

    #[test]
    fn test_invalid_currency_is_config_error() {
        let err = Settings::with_currency(Some("dollars")).unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));
    }

    #[test]
    fn test_builders() {
        let settings = Settings::default()
            .format(ReportFormat::Json)
            .high_value_threshold(Money::new(dec!(100)));
        assert_eq!(settings.format, ReportFormat::Json);
        assert_eq!(settings.high_value_threshold.value(), dec!(100));
    }
}
