//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dns_lookup_bot` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use dns_lookup_bot::initialization::init_logger_with;
use dns_lookup_bot::{run_bot, Config, Opt};

/// Loads `.env` from the working directory, or else from next to the
/// executable. A missing file is fine; the variables may already be set.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(".env")));
    if let Some(path) = beside_exe.filter(|p| p.exists()) {
        let _ = dotenvy::from_path(&path);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    load_dotenv();

    // Exits with a usage error if BOT_TOKEN is missing
    let config: Config = Opt::parse().into();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_bot(config).await {
        Ok(report) => {
            println!(
                "Handled {} event{} ({} error repl{}, {} undelivered) in {:.1}s",
                report.total_events,
                if report.total_events == 1 { "" } else { "s" },
                report.total_errors,
                if report.total_errors == 1 { "y" } else { "ies" },
                report.delivery_failures,
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("dns_lookup_bot error: {:#}", e);
            process::exit(1);
        }
    }
}
