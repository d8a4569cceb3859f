//! Tests for the state module.
//!
//! The test apps have no API key, so every spawned fetch fails immediately
//! with `MissingApiKey` and nothing touches the network. Successful fetches
//! are simulated by feeding `AppMessage`s back in.

use super::app_lifecycle::MISSING_API_KEY_MESSAGE;
use super::{
    App, AppConfig, AppMessage, ConverterState, Focus, PopupState, RATE_FETCH_ERROR,
    RequestToken, StartupOptions,
};
use crate::client::ExchangeClient;
use crate::commands::{AppCommand, InputContext};
use crate::test_utils::{CurrencyMother, RateTableMother};

// ========================================================================
// Test Helper Functions
// ========================================================================

/// Creates a test App with the startup notice already dismissed.
fn create_test_app() -> App {
    let client = ExchangeClient::new("https://example.test", None).expect("client should build");
    let mut app = App::with_client(client, ConverterState::default());
    app.ui.dismiss_popup();
    app
}

/// Waits for the next rate fetch to report back and returns its token.
async fn next_rate_token(app: &mut App) -> RequestToken {
    match app.message_rx.recv().await {
        Some(AppMessage::RatesFetched { token, .. }) => token,
        other => panic!("Expected RatesFetched, got {other:?}"),
    }
}

/// Test app with the catalog loaded and USD rates applied.
async fn loaded_app(rates: &[(&str, f64)]) -> App {
    let mut app = create_test_app();
    app.handle_message(AppMessage::CatalogFetched(Ok(CurrencyMother::catalog())));
    let token = next_rate_token(&mut app).await;
    app.handle_message(AppMessage::RatesFetched {
        token,
        result: Ok(RateTableMother::usd(rates)),
    });
    app
}

// ========================================================================
// Construction
// ========================================================================

#[test]
fn test_new_without_key_shows_notice() {
    let client = ExchangeClient::new("https://example.test", None).unwrap();
    let app = App::with_client(client, ConverterState::default());
    assert_eq!(
        app.ui.popup_state,
        PopupState::Message(MISSING_API_KEY_MESSAGE.to_string())
    );
    assert_eq!(app.get_input_context(), InputContext::MessagePopup);
}

#[test]
fn test_new_with_key_has_no_notice() {
    let client = ExchangeClient::new("https://example.test", Some("k".into())).unwrap();
    let app = App::with_client(client, ConverterState::default());
    assert!(!app.ui.has_active_popup());
}

#[test]
fn test_new_prefers_startup_options_over_config() {
    let config = AppConfig {
        amount: "5".to_string(),
        from_currency: "GBP".to_string(),
        to_currency: "JPY".to_string(),
        ..AppConfig::default()
    };
    let options = StartupOptions {
        to: Some("CHF".to_string()),
        ..StartupOptions::default()
    };

    let app = App::new(&config, options).unwrap();
    assert_eq!(app.converter.amount(), "5");
    assert_eq!(app.converter.from(), "GBP");
    assert_eq!(app.converter.to(), "CHF");
}

// ========================================================================
// Input Context
// ========================================================================

#[test]
fn test_get_input_context_all_states() {
    struct TestCase {
        name: &'static str,
        setup: fn(&mut App),
        expected: InputContext,
    }

    let cases = [
        TestCase {
            name: "amount focus",
            setup: |_| {},
            expected: InputContext::AmountInput,
        },
        TestCase {
            name: "from focus",
            setup: |app| app.ui.focus = Focus::From,
            expected: InputContext::CurrencySelect,
        },
        TestCase {
            name: "to focus",
            setup: |app| app.ui.focus = Focus::To,
            expected: InputContext::CurrencySelect,
        },
        TestCase {
            name: "message popup",
            setup: |app| app.ui.show_message("hi"),
            expected: InputContext::MessagePopup,
        },
        TestCase {
            name: "picker popup",
            setup: |app| {
                app.ui
                    .open_picker(super::CurrencySlot::From, &CurrencyMother::catalog(), "USD");
            },
            expected: InputContext::CurrencyPicker,
        },
        TestCase {
            name: "help over popup",
            setup: |app| {
                app.ui.show_message("hi");
                app.ui.toggle_help();
            },
            expected: InputContext::HelpPopup,
        },
    ];

    for case in cases {
        let mut app = create_test_app();
        (case.setup)(&mut app);
        assert_eq!(app.get_input_context(), case.expected, "{}", case.name);
    }
}

// ========================================================================
// Commands Without Data
// ========================================================================

#[test]
fn test_amount_editing() {
    let mut app = create_test_app();

    app.execute_command(AppCommand::TypeChar('0'));
    app.execute_command(AppCommand::TypeChar('.'));
    app.execute_command(AppCommand::TypeChar('5'));
    assert_eq!(app.converter.amount(), "10.5");

    for _ in 0..5 {
        app.execute_command(AppCommand::Backspace);
    }
    assert_eq!(app.converter.amount(), "");
}

#[test]
fn test_refresh_before_catalog_does_nothing() {
    let mut app = create_test_app();
    app.execute_command(AppCommand::Refresh);
    assert!(!app.converter.is_loading());
}

#[test]
fn test_open_picker_without_catalog_shows_toast() {
    let mut app = create_test_app();
    app.ui.focus = Focus::From;
    app.execute_command(AppCommand::OpenPicker);

    assert!(!app.ui.has_active_popup());
    assert!(app.ui.toast.is_some());
}

#[test]
fn test_open_picker_ignored_on_amount() {
    let mut app = create_test_app();
    app.execute_command(AppCommand::OpenPicker);
    assert!(app.ui.toast.is_none());
    assert!(!app.ui.has_active_popup());
}

#[test]
fn test_quit_help_and_dismiss() {
    let mut app = create_test_app();

    app.execute_command(AppCommand::ToggleHelp);
    assert!(app.ui.show_help);
    app.execute_command(AppCommand::ToggleHelp);
    assert!(!app.ui.show_help);

    app.ui.show_message("notice");
    app.execute_command(AppCommand::Dismiss);
    assert!(!app.ui.has_active_popup());

    app.execute_command(AppCommand::Quit);
    assert!(app.exit);
}

#[test]
fn test_focus_commands() {
    let mut app = create_test_app();
    app.execute_command(AppCommand::CycleFocus);
    assert_eq!(app.ui.focus, Focus::From);
    app.execute_command(AppCommand::CycleFocusBack);
    app.execute_command(AppCommand::CycleFocusBack);
    assert_eq!(app.ui.focus, Focus::To);
}

// ========================================================================
// Fetch Flows
// ========================================================================

#[tokio::test]
async fn test_missing_key_degrades_to_fallback_and_error() {
    let mut app = create_test_app();
    app.dispatch(super::ConverterEvent::Mounted);

    let message = app.message_rx.recv().await;
    assert!(matches!(message, Some(AppMessage::CatalogFetched(Err(_)))));
    app.handle_message(message.unwrap());

    let codes: Vec<&str> = app
        .converter
        .currencies()
        .iter()
        .map(|c| c.code.as_str())
        .collect();
    assert_eq!(codes, ["USD", "EUR", "GBP"]);
    assert!(app.converter.is_loading());

    let message = app.message_rx.recv().await.unwrap();
    app.handle_message(message);

    assert!(!app.converter.is_loading());
    assert_eq!(app.converter.error(), Some(RATE_FETCH_ERROR));
}

#[tokio::test]
async fn test_end_to_end_conversion() {
    let mut app = loaded_app(&[("EUR", 0.92)]).await;

    app.execute_command(AppCommand::TypeChar('0'));
    app.execute_command(AppCommand::TypeChar('0'));

    assert_eq!(app.converter.amount(), "100");
    assert!(app.converter.conversion_line().ends_with("92.00 EUR"));
    assert_eq!(app.converter.rate_line().as_deref(), Some("1 USD = 0.92 EUR"));
}

#[tokio::test]
async fn test_swap_command_flow() {
    let mut app = loaded_app(&[("EUR", 0.92)]).await;

    app.execute_command(AppCommand::Swap);
    assert_eq!((app.converter.from(), app.converter.to()), ("EUR", "USD"));
    assert!(app.converter.is_loading());

    // Disabled while loading
    app.execute_command(AppCommand::Swap);
    assert_eq!((app.converter.from(), app.converter.to()), ("EUR", "USD"));

    let token = next_rate_token(&mut app).await;
    app.handle_message(AppMessage::RatesFetched {
        token,
        result: Ok(RateTableMother::with_base("EUR", &[("USD", 1.09)])),
    });
    assert!(!app.converter.is_loading());
    assert_eq!(app.converter.result(), 1.09);
}

#[tokio::test]
async fn test_step_currency_changes_from() {
    let mut app = loaded_app(&[("EUR", 0.92)]).await;
    app.ui.focus = Focus::From;

    // USD is last in the catalog, so stepping back lands on JPY
    app.execute_command(AppCommand::PreviousCurrency);
    assert_eq!(app.converter.from(), "JPY");
    assert!(app.converter.is_loading());
}

#[tokio::test]
async fn test_picker_selects_target() {
    let mut app = loaded_app(&[("EUR", 0.92), ("GBP", 0.79)]).await;
    app.ui.focus = Focus::To;

    app.execute_command(AppCommand::OpenPicker);
    assert_eq!(app.get_input_context(), InputContext::CurrencyPicker);

    app.execute_command(AppCommand::TypeChar('g'));
    app.execute_command(AppCommand::TypeChar('b'));
    app.execute_command(AppCommand::PickerSelect);

    assert!(!app.ui.has_active_popup());
    assert_eq!(app.converter.to(), "GBP");
    assert_eq!(app.converter.result(), 0.79);
    assert!(!app.converter.is_loading(), "target change never fetches");
}

#[tokio::test]
async fn test_picker_navigation_and_empty_filter() {
    let mut app = loaded_app(&[("EUR", 0.92)]).await;
    app.ui.focus = Focus::To;
    app.execute_command(AppCommand::OpenPicker);

    // EUR highlighted, down moves to GBP
    app.execute_command(AppCommand::PickerDown);
    let selected = app
        .ui
        .popup_state
        .as_picker()
        .and_then(|p| p.selected_code(app.converter.currencies()));
    assert_eq!(selected.as_deref(), Some("GBP"));

    app.execute_command(AppCommand::TypeChar('z'));
    app.execute_command(AppCommand::TypeChar('z'));
    app.execute_command(AppCommand::PickerSelect);
    assert!(app.ui.has_active_popup(), "nothing to select keeps picker open");
    assert_eq!(app.converter.to(), "EUR");
}

#[tokio::test]
async fn test_stale_rate_message_is_ignored() {
    let mut app = loaded_app(&[("EUR", 0.92)]).await;
    app.ui.focus = Focus::From;

    app.execute_command(AppCommand::NextCurrency); // USD -> AED
    let first = next_rate_token(&mut app).await;
    app.execute_command(AppCommand::NextCurrency); // AED -> EUR
    let second = next_rate_token(&mut app).await;

    app.handle_message(AppMessage::RatesFetched {
        token: second,
        result: Ok(RateTableMother::with_base("EUR", &[("EUR", 1.0)])),
    });
    app.handle_message(AppMessage::RatesFetched {
        token: first,
        result: Err("late".to_string()),
    });

    assert_eq!(app.converter.rates().base, "EUR");
    assert!(app.converter.error().is_none());
}

#[tokio::test]
async fn test_process_messages_drains_channel() {
    let mut app = create_test_app();
    app.message_tx
        .send(AppMessage::CatalogFetched(Ok(CurrencyMother::catalog())))
        .unwrap();

    app.process_messages();
    assert_eq!(app.converter.currencies().len(), CurrencyMother::catalog().len());
    assert!(app.converter.is_loading());
}
