//! dns_lookup_bot library: a chat bot front-end for DNS lookups
//!
//! The bot answers `/start`, `/help`, `/resolver` and `/lookup` commands and
//! inline queries. Domains are resolved through a named public resolver (or
//! the `Default` one); IP addresses get a reverse (PTR) lookup.
//!
//! # Example
//!
//! ```no_run
//! use dns_lookup_bot::{run_bot, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     bot_token: std::env::var("BOT_TOKEN")?,
//!     ..Default::default()
//! };
//!
//! let report = run_bot(config).await?;
//! println!("Handled {} events", report.total_events);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod config;
pub mod dispatch;
pub mod dns;
pub mod error_handling;
pub mod initialization;
pub mod input;
pub mod models;
pub mod reply;
pub mod resolvers;
pub mod telegram;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use dispatch::Dispatcher;
pub use resolvers::{ResolverDirectory, ResolverEntry};
pub use run::{run_bot, BotReport};

// Internal run module (contains the bot's main loop)
mod run {
    use std::sync::Arc;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;
    use tokio_util::sync::CancellationToken;

    use crate::app::{
        cancel_on_ctrl_c, poll_updates, print_bot_statistics, shutdown_gracefully, PollContext,
    };
    use crate::config::{Config, POLL_ERROR_BACKOFF, SHUTDOWN_GRACE};
    use crate::dispatch::Dispatcher;
    use crate::error_handling::{BotStats, InitializationError};
    use crate::initialization::{init_client, init_directory, init_gateway};
    use crate::telegram::BotApiClient;

    /// Summary of a bot session, returned after shutdown.
    #[derive(Debug, Clone)]
    pub struct BotReport {
        /// Username the bot ran as, if the API reported one
        pub bot_username: Option<String>,
        /// Commands and inline queries handled
        pub total_events: usize,
        /// Lookups that ended in an error reply
        pub total_errors: usize,
        /// Replies the API did not accept
        pub delivery_failures: usize,
        /// Session length in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs the bot until Ctrl-C.
    ///
    /// Verifies the token with `getMe`, then long-polls for updates and
    /// handles each one on its own task. On shutdown, in-flight handlers get a
    /// short grace period to deliver their replies.
    ///
    /// # Errors
    ///
    /// Fails if the resolver directory cannot be loaded, the HTTP client cannot
    /// be built, or the token is rejected. Errors while polling are logged and
    /// retried, never returned.
    pub async fn run_bot(config: Config) -> Result<BotReport> {
        let directory = init_directory(&config).context("Failed to load resolver directory")?;
        let gateway = init_gateway(config.dns_timeout());
        let http = init_client()
            .map_err(InitializationError::from)
            .context("Failed to initialize HTTP client")?;
        let api = Arc::new(BotApiClient::new(http, &config.api_url, &config.bot_token));

        let me = api
            .get_me()
            .await
            .context("Failed to authorize with the Bot API (check BOT_TOKEN)")?;
        match &me.username {
            Some(username) => info!("Authorized as @{}", username),
            None => info!("Authorized as {}", me.first_name),
        }
        info!(
            "{} resolvers available, DNS timeout {}s",
            directory.len(),
            config.dns_timeout().as_secs()
        );

        let stats = Arc::new(BotStats::new());
        let dispatcher = Arc::new(
            Dispatcher::new(directory, gateway, Arc::clone(&stats))
                .with_bot_username(me.username.clone()),
        );

        let cancel = CancellationToken::new();
        cancel_on_ctrl_c(cancel.clone());

        let start_time = Instant::now();
        let ctx = PollContext {
            source: api.clone(),
            transport: api,
            dispatcher,
            poll_timeout_secs: config.poll_timeout_secs,
            error_backoff: POLL_ERROR_BACKOFF,
        };
        info!("Polling for updates");
        let tasks = poll_updates(ctx, cancel.clone()).await;
        shutdown_gracefully(cancel, tasks, SHUTDOWN_GRACE).await;

        print_bot_statistics(&stats);
        Ok(BotReport {
            bot_username: me.username,
            total_events: stats.total_events(),
            total_errors: stats.total_errors(),
            delivery_failures: stats.delivery_failures(),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
