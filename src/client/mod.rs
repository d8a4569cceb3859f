//! HTTP clients for the exchange-rate provider.
//!
//! - [`exchange`] - typed client for the ExchangeRate-API v6 endpoints
//! - [`http`] - shared reqwest wrapper (timeouts, headers, pooling)
//!
//! # Example
//!
//! ```ignore
//! use crate::client::{ExchangeClient, DEFAULT_BASE_URL};
//!
//! let client = ExchangeClient::new(DEFAULT_BASE_URL, Some(api_key))?;
//! let table = client.latest_rates("USD").await?;
//! ```

pub mod exchange;
pub mod http;

// ============================================================================
// Re-exports
// ============================================================================

pub use exchange::{DEFAULT_BASE_URL, ExchangeClient};
