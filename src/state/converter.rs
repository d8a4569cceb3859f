//! Converter state machine.
//!
//! [`ConverterState`] is owned by the [`App`](super::App) and changes only
//! through [`ConverterState::apply`]. Each call takes one named
//! [`ConverterEvent`] and may hand back an [`Effect`] (a fetch to start).
//! The `App` runs the effect and later feeds the outcome back in as another
//! event, so every state change goes through this module.
//!
//! ```text
//!   Mounted ──► FetchCatalog ──► CatalogLoaded / CatalogFailed
//!                                        │
//!   FromChanged / Swapped / Refresh ─────┴──► FetchRates(token, base)
//!                                                   │
//!                                 RatesLoaded / RatesFailed (token)
//! ```
//!
//! Rate responses carry the [`RequestToken`] they were issued with; only the
//! most recently issued token is accepted, so an older response that
//! arrives late can never overwrite a newer table.

use crate::domain::{Currency, RateTable, compute_result, conversion_line, position_of, rate_line};

// ============================================================================
// Constants
// ============================================================================

/// Banner text shown when a rate fetch fails.
pub const RATE_FETCH_ERROR: &str = "Failed to fetch exchange rates. Please check your API";

/// Initial amount.
pub const DEFAULT_AMOUNT: &str = "1";

/// Initial source currency.
pub const DEFAULT_FROM: &str = "USD";

/// Initial target currency.
pub const DEFAULT_TO: &str = "EUR";

// ============================================================================
// Events and Effects
// ============================================================================

/// Sequence number attached to each rate fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Which of the two currency selectors an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencySlot {
    From,
    To,
}

impl CurrencySlot {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::From => "From",
            Self::To => "To",
        }
    }
}

/// Everything that can happen to the converter.
#[derive(Debug, Clone, PartialEq)]
pub enum ConverterEvent {
    /// The widget was shown for the first time.
    Mounted,
    /// The amount field changed.
    AmountChanged(String),
    /// A new source currency was chosen.
    FromChanged(String),
    /// A new target currency was chosen.
    ToChanged(String),
    /// The swap control was activated.
    Swapped,
    /// The user asked for the current base to be fetched again.
    RefreshRequested,
    /// The supported-codes request succeeded.
    CatalogLoaded(Vec<Currency>),
    /// The supported-codes request failed.
    CatalogFailed(String),
    /// A rate request succeeded.
    RatesLoaded {
        token: RequestToken,
        table: RateTable,
    },
    /// A rate request failed.
    RatesFailed { token: RequestToken, error: String },
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Request the supported-codes catalog.
    FetchCatalog,
    /// Request the latest rates for `base`.
    FetchRates { token: RequestToken, base: String },
}

// ============================================================================
// Converter State
// ============================================================================

/// Converter inputs, fetched data, derived result and fetch status.
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterState {
    amount: String,
    from: String,
    to: String,
    currencies: Vec<Currency>,
    rates: RateTable,
    result: f64,
    loading: bool,
    error: Option<String>,
    mounted: bool,
    last_token: u64,
}

impl Default for ConverterState {
    fn default() -> Self {
        Self::new(DEFAULT_AMOUNT, DEFAULT_FROM, DEFAULT_TO)
    }
}

impl ConverterState {
    /// Creates an unmounted converter with the given inputs.
    #[must_use]
    pub fn new(amount: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            from: from.into(),
            to: to.into(),
            currencies: Vec::new(),
            rates: RateTable::default(),
            result: 0.0,
            loading: false,
            error: None,
            mounted: false,
            last_token: 0,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[must_use]
    pub fn amount(&self) -> &str {
        &self.amount
    }

    #[must_use]
    pub fn from(&self) -> &str {
        &self.from
    }

    #[must_use]
    pub fn to(&self) -> &str {
        &self.to
    }

    #[must_use]
    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    #[must_use]
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    #[must_use]
    pub fn result(&self) -> f64 {
        self.result
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The swap control is disabled while a rate fetch is in flight.
    #[must_use]
    pub fn can_swap(&self) -> bool {
        !self.loading
    }

    #[must_use]
    pub fn code_in(&self, slot: CurrencySlot) -> &str {
        match slot {
            CurrencySlot::From => &self.from,
            CurrencySlot::To => &self.to,
        }
    }

    /// Catalog entry for the currency in `slot`, if the catalog has it.
    #[must_use]
    pub fn currency_in(&self, slot: CurrencySlot) -> Option<&Currency> {
        let code = self.code_in(slot);
        self.currencies.iter().find(|c| c.code == code)
    }

    /// `"<amount> <FROM> = <result> <TO>"`.
    #[must_use]
    pub fn conversion_line(&self) -> String {
        conversion_line(&self.amount, &self.from, self.result, &self.to)
    }

    /// `"1 <FROM> = <rate> <TO>"`, when the table has a usable rate for `to`.
    #[must_use]
    pub fn rate_line(&self) -> Option<String> {
        self.rates
            .usable_rate(&self.to)
            .map(|rate| rate_line(&self.from, rate, &self.to))
    }

    /// Code next to the one in `slot`, wrapping around the catalog.
    ///
    /// Returns `None` when the catalog is empty. A code missing from the
    /// catalog moves to the first (forward) or last (backward) entry.
    #[must_use]
    pub fn adjacent_code(&self, slot: CurrencySlot, forward: bool) -> Option<String> {
        let len = self.currencies.len();
        if len == 0 {
            return None;
        }

        let next = match position_of(&self.currencies, self.code_in(slot)) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        Some(self.currencies[next].code.clone())
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Applies one event and returns the effect it requests, if any.
    pub fn apply(&mut self, event: ConverterEvent) -> Option<Effect> {
        match event {
            ConverterEvent::Mounted => {
                if self.mounted {
                    return None;
                }
                self.mounted = true;
                Some(Effect::FetchCatalog)
            }
            ConverterEvent::AmountChanged(amount) => {
                self.amount = amount;
                self.recompute();
                None
            }
            ConverterEvent::FromChanged(code) => {
                if code == self.from {
                    return None;
                }
                self.from = code;
                self.request_rates()
            }
            ConverterEvent::ToChanged(code) => {
                if code != self.to {
                    self.to = code;
                    self.recompute();
                }
                None
            }
            ConverterEvent::Swapped => self.swap(),
            ConverterEvent::RefreshRequested => self.request_rates(),
            ConverterEvent::CatalogLoaded(currencies) if currencies.is_empty() => {
                self.use_fallback_catalog("provider returned an empty catalog")
            }
            ConverterEvent::CatalogLoaded(currencies) => {
                tracing::debug!(count = currencies.len(), "currency catalog loaded");
                self.currencies = currencies;
                self.request_rates()
            }
            ConverterEvent::CatalogFailed(error) => self.use_fallback_catalog(&error),
            ConverterEvent::RatesLoaded { token, table } => {
                if !self.is_current(token) {
                    tracing::debug!(token = token.0, base = %table.base, "dropping superseded rate table");
                    return None;
                }
                tracing::debug!(token = token.0, base = %table.base, rates = table.len(), "rate table loaded");
                self.rates = table;
                self.loading = false;
                self.recompute();
                None
            }
            ConverterEvent::RatesFailed { token, error } => {
                if !self.is_current(token) {
                    tracing::debug!(token = token.0, %error, "dropping superseded rate failure");
                    return None;
                }
                tracing::error!(base = %self.from, %error, "error fetching exchange rates");
                self.error = Some(RATE_FETCH_ERROR.to_string());
                self.loading = false;
                None
            }
        }
    }

    fn swap(&mut self) -> Option<Effect> {
        if !self.can_swap() {
            tracing::debug!("swap ignored while rates are loading");
            return None;
        }

        std::mem::swap(&mut self.from, &mut self.to);
        self.recompute();

        if self.from == self.to {
            None
        } else {
            self.request_rates()
        }
    }

    fn use_fallback_catalog(&mut self, reason: &str) -> Option<Effect> {
        tracing::warn!(%reason, "error fetching currencies, using fallback catalog");
        self.currencies = Currency::fallback();
        self.request_rates()
    }

    /// Starts a rate fetch for the current base, once the catalog is known.
    fn request_rates(&mut self) -> Option<Effect> {
        if self.currencies.is_empty() {
            return None;
        }

        self.last_token += 1;
        self.loading = true;
        self.error = None;

        Some(Effect::FetchRates {
            token: RequestToken(self.last_token),
            base: self.from.clone(),
        })
    }

    fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.last_token
    }

    /// Recomputes `result`, keeping the previous value when not computable.
    fn recompute(&mut self) {
        if let Some(result) = compute_result(&self.amount, &self.rates, &self.to) {
            self.result = result;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
