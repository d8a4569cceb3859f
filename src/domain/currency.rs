//! Currency catalog types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Catalog used when the supported-codes request fails.
const FALLBACK_CURRENCIES: [(&str, &str); 3] = [
    ("USD", "US Dollar"),
    ("EUR", "Euro"),
    ("GBP", "British Pound Sterling"),
];

// ============================================================================
// Currency
// ============================================================================

/// A currency supported by the rate provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO-4217-like code, e.g. `USD`.
    pub code: String,
    /// Human-readable name, e.g. `US Dollar`.
    pub name: String,
}

impl Currency {
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Selector label in the form `"CODE - Name"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }

    /// Returns `true` if the code or name contains `query` (case-insensitive).
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.code.to_lowercase().contains(&query)
            || self.name.to_lowercase().contains(&query)
    }

    /// The fixed three-entry catalog substituted when loading fails.
    #[must_use]
    pub fn fallback() -> Vec<Self> {
        FALLBACK_CURRENCIES
            .iter()
            .map(|(code, name)| Self::new(*code, *name))
            .collect()
    }
}

impl From<(String, String)> for Currency {
    fn from((code, name): (String, String)) -> Self {
        Self { code, name }
    }
}

/// Position of `code` in `catalog`, if present.
#[must_use]
pub fn position_of(catalog: &[Currency], code: &str) -> Option<usize> {
    catalog.iter().position(|c| c.code == code)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_fallback_is_usd_eur_gbp() {
        let codes: Vec<String> = Currency::fallback().into_iter().map(|c| c.code).collect();
        assert_eq!(codes, ["USD", "EUR", "GBP"]);
    }

    #[test]
    fn test_label() {
        assert_eq!(Currency::new("EUR", "Euro").label(), "EUR - Euro");
    }

    #[rstest]
    #[case::empty("", true)]
    #[case::code_lower("usd", true)]
    #[case::name_fragment("dollar", true)]
    #[case::padded("  US ", true)]
    #[case::no_match("yen", false)]
    fn test_matches(#[case] query: &str, #[case] expected: bool) {
        assert_eq!(Currency::new("USD", "US Dollar").matches(query), expected);
    }

    #[test]
    fn test_position_of() {
        let catalog = Currency::fallback();
        assert_eq!(position_of(&catalog, "GBP"), Some(2));
        assert_eq!(position_of(&catalog, "JPY"), None);
    }
}
