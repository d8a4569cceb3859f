//! Message processing and effect execution.
//!
//! Converter effects become spawned fetch tasks. Each task sends exactly one
//! [`AppMessage`] back, which is turned into a [`ConverterEvent`] here.

use super::{App, AppMessage, ConverterEvent, Effect};

impl App {
    /// Applies `event` to the converter and runs whatever effect it requests.
    pub(crate) fn dispatch(&mut self, event: ConverterEvent) {
        if let Some(effect) = self.converter.apply(event) {
            self.run_effect(effect);
        }
    }

    /// Drains all pending messages from fetch tasks.
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message);
        }
    }

    pub(crate) fn handle_message(&mut self, message: AppMessage) {
        let event = match message {
            AppMessage::CatalogFetched(Ok(currencies)) => ConverterEvent::CatalogLoaded(currencies),
            AppMessage::CatalogFetched(Err(error)) => ConverterEvent::CatalogFailed(error),
            AppMessage::RatesFetched {
                token,
                result: Ok(table),
            } => ConverterEvent::RatesLoaded { token, table },
            AppMessage::RatesFetched {
                token,
                result: Err(error),
            } => ConverterEvent::RatesFailed { token, error },
        };
        self.dispatch(event);
    }

    // ========================================================================
    // Effects
    // ========================================================================

    fn run_effect(&self, effect: Effect) {
        let message_tx = self.message_tx.clone();
        let client = self.client.clone();

        match effect {
            Effect::FetchCatalog => {
                tracing::debug!("fetching currency catalog");
                tokio::spawn(async move {
                    let result = client.supported_codes().await.map_err(|e| e.to_string());
                    // Receiver may be dropped during shutdown - safe to ignore
                    let _ = message_tx.send(AppMessage::CatalogFetched(result));
                });
            }
            Effect::FetchRates { token, base } => {
                tracing::debug!(token = token.value(), %base, "fetching exchange rates");
                tokio::spawn(async move {
                    let result = client.latest_rates(&base).await.map_err(|e| e.to_string());
                    // Receiver may be dropped during shutdown - safe to ignore
                    let _ = message_tx.send(AppMessage::RatesFetched { token, result });
                });
            }
        }
    }
}
