//! Error types for exchange-rate operations.
//!
//! This module defines the error type returned by the ExchangeRate-API client,
//! providing structured variants for every way a lookup can fail.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for exchange-rate client operations.
///
/// Loader failures never reach the user as a crash: the catalog loader turns
/// them into the fallback list and the rate loader into the error banner.
#[derive(Debug, Error)]
pub enum FxError {
    /// Network-related errors from HTTP requests.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered with a non-success HTTP status.
    #[error("HTTP {status}{}", error_type_suffix(.error_type))]
    Http {
        /// The HTTP status code.
        status: u16,
        /// The provider's `error-type` field, when the body carried one.
        error_type: Option<String>,
    },

    /// The provider answered 2xx but flagged the result as an error.
    #[error("API error: {error_type}")]
    Api {
        /// The provider's `error-type` field (e.g. `invalid-key`).
        error_type: String,
    },

    /// JSON parsing or data structure errors.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// No API key was configured.
    #[error("No API key configured")]
    MissingApiKey,

    /// The HTTP client could not be constructed.
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(String),
}

fn error_type_suffix(error_type: &Option<String>) -> String {
    error_type
        .as_deref()
        .map(|kind| format!(" ({kind})"))
        .unwrap_or_default()
}

impl FxError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new HTTP status error.
    ///
    /// # Arguments
    ///
    /// * `status` - The HTTP status code
    /// * `error_type` - The provider's error kind, if any
    #[must_use]
    pub fn http(status: u16, error_type: Option<String>) -> Self {
        Self::Http { status, error_type }
    }

    /// Create a new API error from the provider's `error-type` field.
    #[must_use]
    pub fn api(error_type: impl Into<String>) -> Self {
        Self::Api {
            error_type: error_type.into(),
        }
    }

    /// Create a new client initialization error.
    #[must_use]
    pub fn client_init(message: impl Into<String>) -> Self {
        Self::ClientInit(message.into())
    }

    /// Convert to a `color_eyre::Report` for the CLI code paths.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
