//! Domain types for the lazyfx currency converter.
//!
//! # Module Organization
//!
//! - [`error`] - Error type for exchange-rate operations
//! - [`currency`] - Currency catalog entries and the fallback catalog
//! - [`rates`] - Rate tables and the conversion calculator
//! - [`format`] - Display formatting for amounts and rates

// ============================================================================
// Module Declarations
// ============================================================================

pub mod currency;
pub mod error;
pub mod format;
pub mod rates;

// ============================================================================
// Re-exports
// ============================================================================

pub use currency::{Currency, position_of};
pub use error::FxError;
pub use format::{conversion_line, rate_line};
pub use rates::{RateTable, compute_result};
