//! Application lifecycle management.
//!
//! - `new()` - Creates a new application instance
//! - `run()` - Main event loop

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::client::ExchangeClient;
use crate::tui::Tui;
use crate::ui;

use super::{App, AppConfig, ConverterEvent, ConverterState, StartupOptions, UiState};

/// Redraw interval of the main loop.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Shown once at startup when no API key could be resolved.
pub const MISSING_API_KEY_MESSAGE: &str = "No ExchangeRate-API key configured.\n\n\
Set EXCHANGE_RATE_API_KEY (a .env file works too), pass --api-key, \
or add \"api_key\" to the config file.\n\nLive rates are unavailable until then.";

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App from the persisted configuration and session overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &AppConfig, options: StartupOptions) -> Result<Self> {
        let client = ExchangeClient::new(config.api_base_url.as_str(), options.api_key)
            .map_err(|e| e.into_report())?;

        let converter = ConverterState::new(
            options.amount.unwrap_or_else(|| config.amount.clone()),
            options.from.unwrap_or_else(|| config.from_currency.clone()),
            options.to.unwrap_or_else(|| config.to_currency.clone()),
        );

        Ok(Self::with_client(client, converter))
    }

    /// Assembles an App around an existing client and converter state.
    #[must_use]
    pub fn with_client(client: ExchangeClient, converter: ConverterState) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let mut ui = UiState::new();
        if !client.has_api_key() {
            tracing::warn!("no API key configured");
            ui.show_message(MISSING_API_KEY_MESSAGE);
        }

        Self {
            converter,
            ui,
            exit: false,
            animation_tick: 0,
            message_tx,
            message_rx,
            client,
        }
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal operations fail.
    ///
    /// Must be called from within a tokio runtime; fetches run as spawned tasks.
    pub fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.dispatch(ConverterEvent::Mounted);

        let mut last_tick = Instant::now();
        terminal.draw(|frame| ui::render(self, frame))?;

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.animation_tick = self.animation_tick.wrapping_add(1);
                self.ui.tick_toast();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        Ok(())
    }
}
