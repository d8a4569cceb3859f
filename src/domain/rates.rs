//! Rate tables and the conversion calculator.
//!
//! A [`RateTable`] is always replaced wholesale by a successful fetch; it is
//! never merged with a previous table. [`compute_result`] is the single place
//! the converted amount is derived from user input.

use std::collections::HashMap;

// ============================================================================
// Rate Table
// ============================================================================

/// Conversion factors relative to a single base currency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    /// The base currency the rates are expressed against.
    pub base: String,
    /// Currency code to multiplier: `target = base_amount * rate`.
    pub rates: HashMap<String, f64>,
    /// Provider's last update time (unix seconds), when reported.
    pub updated_at: Option<i64>,
}

impl RateTable {
    #[must_use]
    pub fn new(base: impl Into<String>, rates: HashMap<String, f64>) -> Self {
        Self {
            base: base.into(),
            rates,
            updated_at: None,
        }
    }

    #[must_use]
    pub fn with_updated_at(mut self, unix_secs: i64) -> Self {
        self.updated_at = Some(unix_secs);
        self
    }

    /// Rate for `code`, if the table has one.
    #[must_use]
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// Rate for `code` only when it is present and non-zero.
    ///
    /// A zero rate is treated as missing, both for conversion and display.
    #[must_use]
    pub fn usable_rate(&self, code: &str) -> Option<f64> {
        self.rate(code).filter(|rate| *rate != 0.0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Human-readable provider update time, e.g. `Sat, 19 Oct 2026 00:00:01 UTC`.
    #[must_use]
    pub fn updated_at_display(&self) -> Option<String> {
        let secs = self.updated_at?;
        let datetime = chrono::DateTime::from_timestamp(secs, 0)?;
        Some(datetime.format("%a, %d %b %Y %H:%M:%S UTC").to_string())
    }
}

// ============================================================================
// Calculator
// ============================================================================

/// Parses the raw amount field.
///
/// Returns `None` for empty input and for anything that is not a finite number.
#[must_use]
pub fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Converted amount for the current inputs, or `None` when not computable.
///
/// Not computable means: the amount is empty or not numeric, or `rates` has no
/// non-zero entry for `to`. Callers keep their previous result in that case.
#[must_use]
pub fn compute_result(amount: &str, rates: &RateTable, to: &str) -> Option<f64> {
    let rate = rates.usable_rate(to)?;
    let amount = parse_amount(amount)?;
    Some(amount * rate)
}

// ============================================================================
// Tests
// ============================================================================
