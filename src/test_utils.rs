//! Shared test utilities and Mother pattern factories.
//!
//! Reusable fixtures for currencies, rate tables, provider JSON bodies and
//! rendering. Use these helpers instead of copy-pasting setup code.

use std::collections::HashMap;

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use rstest::fixture;

use crate::client::ExchangeClient;
use crate::domain::{Currency, RateTable};
use crate::state::{App, ConverterEvent, ConverterState, Effect};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct CurrencyMother;

impl CurrencyMother {
    /// Small catalog in provider order: AED, EUR, GBP, JPY, USD.
    #[must_use]
    pub fn catalog() -> Vec<Currency> {
        vec![
            Currency::new("AED", "UAE Dirham"),
            Currency::new("EUR", "Euro"),
            Currency::new("GBP", "Pound Sterling"),
            Currency::new("JPY", "Japanese Yen"),
            Currency::new("USD", "United States Dollar"),
        ]
    }
}

pub struct RateTableMother;

impl RateTableMother {
    /// Table for `base` with the given rates; the base itself is always 1.0.
    #[must_use]
    pub fn with_base(base: &str, rates: &[(&str, f64)]) -> RateTable {
        let mut map: HashMap<String, f64> = rates
            .iter()
            .map(|(code, rate)| ((*code).to_string(), *rate))
            .collect();
        map.entry(base.to_string()).or_insert(1.0);
        RateTable::new(base, map)
    }

    /// USD-based table.
    #[must_use]
    pub fn usd(rates: &[(&str, f64)]) -> RateTable {
        Self::with_base("USD", rates)
    }
}

pub struct ConverterMother;

impl ConverterMother {
    /// Converter with the catalog loaded and a USD rate table applied.
    #[must_use]
    pub fn loaded(rates: &[(&str, f64)]) -> ConverterState {
        let mut state = ConverterState::default();
        state.apply(ConverterEvent::Mounted);
        let table = RateTableMother::usd(rates);
        Self::answer(&mut state, ConverterEvent::CatalogLoaded(CurrencyMother::catalog()), table);
        state
    }

    /// Converter waiting on its first rate fetch.
    #[must_use]
    pub fn loading() -> ConverterState {
        let mut state = ConverterState::default();
        state.apply(ConverterEvent::Mounted);
        state.apply(ConverterEvent::CatalogLoaded(CurrencyMother::catalog()));
        state
    }

    /// Applies `event` and answers the rate fetch it starts with `table`.
    pub fn answer(state: &mut ConverterState, event: ConverterEvent, table: RateTable) {
        match state.apply(event) {
            Some(Effect::FetchRates { token, .. }) => {
                state.apply(ConverterEvent::RatesLoaded { token, table });
            }
            other => panic!("Expected a rate fetch, got {other:?}"),
        }
    }
}

pub struct JsonMother;

impl JsonMother {
    /// `/codes` body with four entries.
    #[must_use]
    pub fn codes() -> String {
        serde_json::json!({
            "result": "success",
            "documentation": "https://www.exchangerate-api.com/docs",
            "supported_codes": [
                ["AED", "UAE Dirham"],
                ["EUR", "Euro"],
                ["GBP", "Pound Sterling"],
                ["USD", "United States Dollar"]
            ]
        })
        .to_string()
    }

    /// `/latest/USD` body.
    #[must_use]
    pub fn latest_usd() -> String {
        serde_json::json!({
            "result": "success",
            "time_last_update_unix": 1_760_832_001_i64,
            "time_last_update_utc": "Sun, 19 Oct 2025 00:00:01 +0000",
            "base_code": "USD",
            "conversion_rates": {
                "USD": 1,
                "EUR": 0.92,
                "GBP": 0.79,
                "JPY": 150.12
            }
        })
        .to_string()
    }

    /// Error body as returned for bad keys, unknown codes and quota issues.
    #[must_use]
    pub fn error(error_type: &str) -> String {
        serde_json::json!({
            "result": "error",
            "error-type": error_type
        })
        .to_string()
    }
}

// ============================================================================
// Rendering Helpers
// ============================================================================

/// Buffer contents as lines of text, trailing spaces removed.
#[must_use]
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// rstest Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 30)).expect("terminal creation should succeed")
}

/// App without an API key and with the startup notice dismissed.
#[fixture]
pub fn mock_app() -> App {
    let client =
        ExchangeClient::new("https://example.test", None).expect("client creation should succeed");
    let mut app = App::with_client(client, ConverterState::default());
    app.ui.dismiss_popup();
    app
}
