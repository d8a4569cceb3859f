//! Application configuration with persistence.
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/lazyfx/config.json`
//! - macOS: `~/Library/Application Support/lazyfx/config.json`
//! - Windows: `%APPDATA%/lazyfx/config.json`
//!
//! Every field has a default, so a partial or outdated file still loads.
//!
//! # Example
//!
//! ```ignore
//! use crate::state::AppConfig;
//!
//! let mut config = AppConfig::load();
//! config.from_currency = "GBP".to_string();
//! config.save()?;
//! ```

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::converter::{DEFAULT_AMOUNT, DEFAULT_FROM, DEFAULT_TO};
use super::platform::AppPaths;
use crate::client::DEFAULT_BASE_URL;

/// Environment variable holding the ExchangeRate-API key.
pub const API_KEY_ENV: &str = "EXCHANGE_RATE_API_KEY";

// ============================================================================
// AppConfig
// ============================================================================

/// Persisted settings and the last converter inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Provider endpoint, without the `/v6` path.
    pub api_base_url: String,
    /// API key, used when neither the flag nor the environment provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Last entered amount.
    pub amount: String,
    /// Last source currency.
    pub from_currency: String,
    /// Last target currency.
    pub to_currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            amount: DEFAULT_AMOUNT.to_string(),
            from_currency: DEFAULT_FROM.to_string(),
            to_currency: DEFAULT_TO.to_string(),
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        AppPaths::new().config_file()
    }

    /// Loads the configuration, falling back to defaults on any failure.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "config load failed, using defaults");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, the file cannot be
    /// read or the JSON content cannot be parsed.
    pub fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = fs::read_to_string(&path)?;
        Self::from_json(&content)
    }

    /// Parses configuration JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a valid configuration object.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Saves the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, the configuration
    /// cannot be serialized or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Picks the API key: flag, then environment, then this file.
    ///
    /// Blank values are skipped at every level.
    #[must_use]
    pub fn resolve_api_key(&self, flag: Option<&str>, env: Option<&str>) -> Option<String> {
        [flag, env, self.api_key.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|key| !key.is_empty())
            .map(String::from)
    }

    /// Stores the converter inputs to restore on the next start.
    pub fn remember_inputs(&mut self, amount: &str, from: &str, to: &str) {
        self.amount = amount.to_string();
        self.from_currency = from.to_string();
        self.to_currency = to.to_string();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "https://v6.exchangerate-api.com");
        assert!(config.api_key.is_none());
        assert_eq!(config.amount, "1");
        assert_eq!(config.from_currency, "USD");
        assert_eq!(config.to_currency, "EUR");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = AppConfig {
            api_base_url: "http://localhost:9000".to_string(),
            api_key: Some("secret".to_string()),
            amount: "250".to_string(),
            from_currency: "GBP".to_string(),
            to_currency: "JPY".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(AppConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = AppConfig::from_json(r#"{"from_currency":"CHF"}"#).unwrap();
        assert_eq!(config.from_currency, "CHF");
        assert_eq!(config.to_currency, "EUR");
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let config = AppConfig::from_json(r#"{"network":"TestNet","amount":"5"}"#).unwrap();
        assert_eq!(config.amount, "5");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(AppConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_api_key_not_serialized_when_absent() {
        let json = serde_json::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(!json.contains("api_key"));
        assert!(json.contains("from_currency"));
    }

    #[rstest]
    #[case::flag_wins(Some("flag"), Some("env"), Some("file"), Some("flag"))]
    #[case::env_over_file(None, Some("env"), Some("file"), Some("env"))]
    #[case::file_last(None, None, Some("file"), Some("file"))]
    #[case::blank_flag_skipped(Some("  "), Some("env"), None, Some("env"))]
    #[case::trimmed(Some(" k3y "), None, None, Some("k3y"))]
    #[case::none(None, None, None, None)]
    fn test_resolve_api_key(
        #[case] flag: Option<&str>,
        #[case] env: Option<&str>,
        #[case] file: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let config = AppConfig {
            api_key: file.map(String::from),
            ..AppConfig::default()
        };
        assert_eq!(config.resolve_api_key(flag, env).as_deref(), expected);
    }

    #[test]
    fn test_remember_inputs() {
        let mut config = AppConfig::default();
        config.remember_inputs("42", "EUR", "USD");
        assert_eq!(
            (
                config.amount.as_str(),
                config.from_currency.as_str(),
                config.to_currency.as_str()
            ),
            ("42", "EUR", "USD")
        );
    }

    #[test]
    fn test_config_path_has_json_extension() {
        if let Ok(path) = AppConfig::config_path() {
            let extension = path.extension().and_then(|e| e.to_str());
            assert_eq!(extension, Some("json"));
        }
    }
}
