//! State management for the lazyfx TUI.
//!
//! - [`ConverterState`] - Converter inputs, fetched data and derived result
//! - [`UiState`] - UI presentation concerns (focus, popups, toasts)
//! - [`AppConfig`] - Persistent configuration with load/save capabilities
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                     App                      │
//! ├───────────────────────┬──────────────────────┤
//! │    ConverterState     │       UiState        │
//! │  - amount/from/to     │  - focus             │
//! │  - catalog, rates     │  - popups            │
//! │  - result, loading    │  - toasts            │
//! └───────────────────────┴──────────────────────┘
//!            ▲ events                │ effects
//!            │                       ▼
//!      AppMessage channel ◄── spawned fetch tasks
//! ```
//!
//! # Example
//!
//! ```ignore
//! use crate::state::{App, AppConfig, StartupOptions};
//!
//! let app = App::new(&AppConfig::load(), StartupOptions::default())?;
//! ```

use tokio::sync::mpsc;

use crate::client::ExchangeClient;
use crate::domain::{Currency, RateTable};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod config;
pub mod converter;
pub mod platform;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

// Converter types
pub use converter::{
    ConverterEvent, ConverterState, CurrencySlot, Effect, RATE_FETCH_ERROR, RequestToken,
};

// UI state types
pub use ui_state::{Focus, PickerState, PopupState, UiState};

// Configuration types
pub use config::{API_KEY_ENV, AppConfig};

// ============================================================================
// App Message Types
// ============================================================================

/// Results sent from fetch tasks back to the main app loop.
///
/// Errors are carried as display strings; the loop only needs them for logs.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The supported-codes request finished.
    CatalogFetched(Result<Vec<Currency>, String>),
    /// A rate request finished.
    RatesFetched {
        token: RequestToken,
        result: Result<RateTable, String>,
    },
}

// ============================================================================
// Startup Options
// ============================================================================

/// Per-session overrides, usually from command-line flags.
///
/// Fields left as `None` fall back to the persisted configuration.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Initial amount.
    pub amount: Option<String>,
    /// Initial source currency code.
    pub from: Option<String>,
    /// Initial target currency code.
    pub to: Option<String>,
    /// Resolved API key.
    pub api_key: Option<String>,
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    // ========================================================================
    // Sub-states
    // ========================================================================
    /// Converter state, changed only through [`App::dispatch`].
    pub converter: ConverterState,

    /// UI state - focus, popups, toasts.
    pub ui: UiState,

    // ========================================================================
    // App-level state
    // ========================================================================
    /// Whether the application should exit.
    pub exit: bool,

    /// Animation tick counter for the loading spinner.
    pub animation_tick: u64,

    // ========================================================================
    // Async Communication Channels
    // ========================================================================
    // Channel sends use `let _ = tx.send(...)`: the receiver is dropped
    // during shutdown and late results are irrelevant by then.
    /// Sender for app messages (cloned for fetch tasks).
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    /// Receiver for app messages.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    // ========================================================================
    // Network Client
    // ========================================================================
    /// ExchangeRate-API client.
    pub(crate) client: ExchangeClient,
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Message processing, effect execution
mod app_messages;

// Command execution, input handling
mod app_commands;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests;
