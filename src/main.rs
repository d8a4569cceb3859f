use std::env;
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use tracing_subscriber::{EnvFilter, fmt::writer::BoxMakeWriter};

mod client;
mod commands;
mod domain;
mod state;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::{
    client::ExchangeClient,
    domain::{Currency, FxError, compute_result, conversion_line, rate_line},
    state::{API_KEY_ENV, App, AppConfig, StartupOptions, platform::AppPaths},
};

// lazyfx version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

const LOGO: &str = r#"
 _                 __
| | __ _ _____   _/ _|_  __
| |/ _` |_  / | | | |_\ \/ /
| | (_| |/ /| |_| |  _|>  <
|_|\__,_/___|\__, |_| /_/\_\
             |___/
"#;

/// lazyfx - Terminal currency converter backed by live exchange rates
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// ExchangeRate-API key (overrides EXCHANGE_RATE_API_KEY and the config file)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Initial amount for this session
    #[arg(short, long)]
    amount: Option<String>,

    /// Initial source currency code for this session
    #[arg(short, long)]
    from: Option<String>,

    /// Initial target currency code for this session
    #[arg(short, long)]
    to: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount once and print the result
    Convert {
        /// Amount to convert
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Source currency code
        from: String,
        /// Target currency code
        to: String,
    },
    /// List the supported currency codes
    Codes,
    /// Display version with ASCII art
    Version,
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Does not override variables that are already set
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let paths = AppPaths::new();
    init_tracing(&paths);

    let mut config = AppConfig::load();
    let env_key = env::var(API_KEY_ENV).ok();
    let api_key = config.resolve_api_key(cli.api_key.as_deref(), env_key.as_deref());

    if let Some(command) = &cli.command {
        return handle_cli_command(command, &config, api_key).await;
    }

    let options = StartupOptions {
        amount: cli.amount,
        from: cli.from.as_deref().map(normalize_code),
        to: cli.to.as_deref().map(normalize_code),
        api_key,
    };
    let mut app = App::new(&config, options)?;

    tracing::info!(version = VERSION, "lazyfx starting");
    let mut terminal = tui::init()?;
    let run_result = app.run(&mut terminal);
    tui::restore()?;
    run_result?;

    config.remember_inputs(
        app.converter.amount(),
        app.converter.from(),
        app.converter.to(),
    );
    if let Err(err) = config.save() {
        tracing::warn!(error = %err, "failed to save config");
    }

    Ok(())
}

/// Sends tracing output to the log file; the terminal belongs to the TUI.
///
/// `RUST_LOG` overrides the default `info` filter.
fn init_tracing(paths: &AppPaths) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let writer = paths
        .log_file()
        .ok()
        .and_then(|path| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        })
        .map_or_else(
            || BoxMakeWriter::new(io::sink),
            |file| BoxMakeWriter::new(Mutex::new(file)),
        );

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .try_init();
}

/// Runs a one-shot subcommand instead of the TUI.
async fn handle_cli_command(
    command: &Commands,
    config: &AppConfig,
    api_key: Option<String>,
) -> Result<()> {
    match command {
        Commands::Convert { amount, from, to } => {
            let client = ExchangeClient::new(config.api_base_url.as_str(), api_key)
                .map_err(FxError::into_report)?;
            let (from, to) = (normalize_code(from), normalize_code(to));
            for line in convert_once(&client, amount, &from, &to).await? {
                println!("{line}");
            }
        }
        Commands::Codes => {
            let client = ExchangeClient::new(config.api_base_url.as_str(), api_key)
                .map_err(FxError::into_report)?;
            for currency in list_codes(&client).await {
                println!("{}  {}", currency.code, currency.name);
            }
        }
        Commands::Version => {
            println!("{LOGO}");
            println!("lazyfx v{VERSION}");
            println!("A terminal currency converter backed by live exchange rates");
        }
    }
    Ok(())
}

/// Fetches rates for `from` and returns the conversion and rate lines.
async fn convert_once(
    client: &ExchangeClient,
    amount: &str,
    from: &str,
    to: &str,
) -> Result<Vec<String>> {
    let table = client
        .latest_rates(from)
        .await
        .map_err(FxError::into_report)?;

    let result = compute_result(amount, &table, to)
        .ok_or_else(|| eyre!("Cannot convert '{amount}' {from} to {to}"))?;

    let mut lines = vec![conversion_line(amount, from, result, to)];
    if let Some(rate) = table.usable_rate(to) {
        lines.push(rate_line(from, rate, to));
    }
    Ok(lines)
}

/// The provider catalog, or the fallback list when it cannot be loaded.
async fn list_codes(client: &ExchangeClient) -> Vec<Currency> {
    match client.supported_codes().await {
        Ok(currencies) if !currencies.is_empty() => currencies,
        Ok(_) => {
            tracing::warn!("provider returned an empty catalog, using fallback");
            Currency::fallback()
        }
        Err(err) => {
            tracing::warn!(error = %err, "error fetching currencies, using fallback");
            eprintln!("Could not load currencies ({err}), showing the fallback list");
            Currency::fallback()
        }
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

// ============================================================================
// Tests
// ============================================================================
