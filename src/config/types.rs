//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_API_URL, DEFAULT_DNS_TIMEOUT_SECS, DEFAULT_POLL_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Can be constructed programmatically; the binary builds it from [`Opt`].
///
/// # Examples
///
/// ```no_run
/// use dns_lookup_bot::Config;
///
/// let config = Config {
///     bot_token: "123456:ABC".to_string(),
///     dns_timeout_secs: 3,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Bot authentication token
    pub bot_token: String,

    /// Base URL of the Bot API
    pub api_url: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Bound on a single DNS lookup, in seconds
    pub dns_timeout_secs: u64,

    /// Long-poll window for `getUpdates`, in seconds
    pub poll_timeout_secs: u64,

    /// Optional JSON file replacing the built-in resolver directory
    pub resolvers_file: Option<PathBuf>,
}

impl Config {
    /// DNS lookup timeout as a `Duration`. Never zero.
    pub fn dns_timeout(&self) -> Duration {
        Duration::from_secs(self.dns_timeout_secs.max(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            dns_timeout_secs: DEFAULT_DNS_TIMEOUT_SECS,
            poll_timeout_secs: DEFAULT_POLL_TIMEOUT_SECS,
            resolvers_file: None,
        }
    }
}

/// Command-line options.
///
/// Every option can also be supplied through the environment (or a `.env` file,
/// which the binary loads before parsing).
///
/// ```bash
/// # Token from the environment
/// BOT_TOKEN=123456:ABC dns_lookup_bot
///
/// # Custom resolver list and a shorter DNS timeout
/// dns_lookup_bot --resolvers-file resolvers.json --dns-timeout-secs 3
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "dns_lookup_bot",
    about = "Telegram bot that resolves domains against a selectable set of public DNS resolvers."
)]
pub struct Opt {
    /// Bot authentication token issued by @BotFather
    #[arg(long, env = "BOT_TOKEN", hide_env_values = true)]
    pub bot_token: String,

    /// Base URL of the Bot API
    #[arg(long, env = "BOT_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Timeout for a single DNS lookup in seconds
    ///
    /// Lookups are attempted once. An unreachable resolver answers with an
    /// error after this long instead of stalling the reply.
    #[arg(
        long,
        env = "DNS_TIMEOUT_SECS",
        default_value_t = DEFAULT_DNS_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub dns_timeout_secs: u64,

    /// Long-poll window for fetching updates, in seconds
    #[arg(long, env = "POLL_TIMEOUT_SECS", default_value_t = DEFAULT_POLL_TIMEOUT_SECS)]
    pub poll_timeout_secs: u64,

    /// JSON file with resolvers to offer instead of the built-in list
    /// Format: [{"name": "Default", "address": "9.9.9.10"}, ...]
    #[arg(long, env = "RESOLVERS_FILE")]
    pub resolvers_file: Option<PathBuf>,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            bot_token: opt.bot_token,
            api_url: opt.api_url,
            log_level: opt.log_level,
            log_format: opt.log_format,
            dns_timeout_secs: opt.dns_timeout_secs,
            poll_timeout_secs: opt.poll_timeout_secs,
            resolvers_file: opt.resolvers_file,
        }
    }
}
