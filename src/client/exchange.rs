//! ExchangeRate-API v6 client.
//!
//! Two endpoints are used:
//!
//! ```text
//! GET {base}/v6/{key}/codes          -> { supported_codes: [[code, name], ...] }
//! GET {base}/v6/{key}/latest/{code}  -> { base_code, conversion_rates: {code: rate} }
//! ```
//!
//! The API key is part of the path, so URLs are only ever logged through
//! [`ExchangeClient::redacted_url`] and reqwest errors are stripped of theirs.

use std::collections::HashMap;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::http::HttpClient;
use crate::domain::{Currency, FxError, RateTable};

// ============================================================================
// Constants
// ============================================================================

/// Public ExchangeRate-API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://v6.exchangerate-api.com";

/// Value of the `result` field on failed responses.
const RESULT_ERROR: &str = "error";

// ============================================================================
// Wire Types
// ============================================================================

/// Fields shared by every response body.
#[derive(Debug, Default, Deserialize)]
struct Envelope {
    #[serde(default)]
    result: Option<String>,
    #[serde(rename = "error-type", default)]
    error_type: Option<String>,
}

impl Envelope {
    fn check(self) -> Result<(), FxError> {
        if self.result.as_deref() == Some(RESULT_ERROR) {
            return Err(FxError::api(
                self.error_type.unwrap_or_else(|| "unknown-error".to_string()),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct CodesResponse {
    #[serde(flatten)]
    envelope: Envelope,
    #[serde(default)]
    supported_codes: Vec<(String, String)>,
}

#[derive(Debug, Deserialize)]
struct LatestResponse {
    #[serde(flatten)]
    envelope: Envelope,
    #[serde(default)]
    base_code: String,
    #[serde(default)]
    conversion_rates: HashMap<String, f64>,
    #[serde(default)]
    time_last_update_unix: Option<i64>,
}

// ============================================================================
// Response Parsing
// ============================================================================

/// Parses a `/codes` body into the currency catalog.
///
/// # Errors
///
/// Returns `FxError::Parse` for malformed JSON and `FxError::Api` when the
/// body reports `result: "error"`.
pub fn parse_codes(body: &str) -> Result<Vec<Currency>, FxError> {
    let response: CodesResponse = decode(body)?;
    response.envelope.check()?;
    Ok(response
        .supported_codes
        .into_iter()
        .map(Currency::from)
        .collect())
}

/// Parses a `/latest/{base}` body into a rate table.
///
/// `requested_base` is used when the body omits `base_code`.
///
/// # Errors
///
/// Returns `FxError::Parse` for malformed JSON and `FxError::Api` when the
/// body reports `result: "error"`.
pub fn parse_latest(body: &str, requested_base: &str) -> Result<RateTable, FxError> {
    let response: LatestResponse = decode(body)?;
    response.envelope.check()?;

    let base = if response.base_code.is_empty() {
        requested_base.to_string()
    } else {
        response.base_code
    };

    let table = RateTable::new(base, response.conversion_rates);
    Ok(match response.time_last_update_unix {
        Some(secs) => table.with_updated_at(secs),
        None => table,
    })
}

/// Error for a non-2xx response, using the body's `error-type` if present.
#[must_use]
pub fn status_error(status: u16, body: &str) -> FxError {
    let error_type = serde_json::from_str::<Envelope>(body)
        .ok()
        .and_then(|envelope| envelope.error_type);
    FxError::http(status, error_type)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, FxError> {
    serde_json::from_str(body).map_err(|e| FxError::parse(e.to_string()))
}

// ============================================================================
// Exchange Client
// ============================================================================

/// Client for the two ExchangeRate-API endpoints.
#[derive(Debug, Clone)]
pub struct ExchangeClient {
    http: HttpClient,
    base_url: String,
    api_key: Option<String>,
}

impl ExchangeClient {
    /// Creates a client for `base_url` authenticated with `api_key`.
    ///
    /// A missing key is not an error here; every request then fails with
    /// `FxError::MissingApiKey` so the loaders can degrade as usual.
    ///
    /// # Errors
    ///
    /// Returns `FxError::ClientInit` if the HTTP client fails to initialize.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self, FxError> {
        Ok(Self {
            http: HttpClient::new()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full request URL for `endpoint` (e.g. `codes`, `latest/USD`).
    ///
    /// # Errors
    ///
    /// Returns `FxError::MissingApiKey` when no key is configured.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<String, FxError> {
        let key = self.api_key.as_deref().ok_or(FxError::MissingApiKey)?;
        Ok(format!("{}/v6/{key}/{endpoint}", self.base_url))
    }

    /// URL for `endpoint` with the key masked, for logging.
    #[must_use]
    pub fn redacted_url(&self, endpoint: &str) -> String {
        format!("{}/v6/***/{endpoint}", self.base_url)
    }

    /// Fetches the supported currency catalog.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, non-2xx status, an error body,
    /// malformed JSON or a missing API key.
    pub async fn supported_codes(&self) -> Result<Vec<Currency>, FxError> {
        let body = self.get_body("codes").await?;
        parse_codes(&body)
    }

    /// Fetches the latest rate table for `base`.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, non-2xx status, an error body,
    /// malformed JSON or a missing API key.
    pub async fn latest_rates(&self, base: &str) -> Result<RateTable, FxError> {
        let body = self.get_body(&format!("latest/{base}")).await?;
        parse_latest(&body, base)
    }

    async fn get_body(&self, endpoint: &str) -> Result<String, FxError> {
        let url = self.endpoint_url(endpoint)?;
        tracing::debug!(url = %self.redacted_url(endpoint), "GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let status = response.status();
        let body = response.text().await.map_err(reqwest::Error::without_url)?;

        if !status.is_success() {
            return Err(status_error(status.as_u16(), &body));
        }

        tracing::debug!(url = %self.redacted_url(endpoint), status = status.as_u16(), bytes = body.len(), "response");
        Ok(body)
    }
}

// ============================================================================
// Tests
// ============================================================================
