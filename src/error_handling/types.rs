//! Error type definitions.
//!
//! This module defines the error types used throughout the bot and the
//! enums the statistics tracker counts by.

use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    /// Error building the resolver directory.
    #[error("Resolver directory error: {0}")]
    DirectoryError(#[from] DirectoryError),
}

/// Errors raised while building the resolver directory.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// The directory has no entries at all.
    #[error("resolver directory is empty")]
    Empty,

    /// Two entries share a name.
    #[error("duplicate resolver name: {0}")]
    DuplicateName(String),

    /// No entry is named `Default`.
    #[error("resolver directory has no '{0}' entry")]
    MissingDefault(&'static str),

    /// An entry's address is not an IP literal.
    #[error("resolver '{name}' has an invalid address: {address}")]
    InvalidAddress { name: String, address: String },

    /// The resolvers file could not be read.
    #[error("failed to read resolvers file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resolvers file is not valid JSON of the expected shape.
    #[error("failed to parse resolvers file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failures of the DNS resolution primitive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsError {
    /// The name exists but has no records of the requested type, or does not exist.
    #[error("no records found")]
    NoRecords,

    /// The resolver did not answer in time.
    #[error("query timed out after {secs}s")]
    Timeout { secs: u64 },

    /// Any other resolver failure (unreachable, malformed response, refused).
    #[error("{0}")]
    Resolve(String),
}

/// Errors surfaced to the user while handling a lookup.
///
/// Every variant is recovered at the dispatcher boundary and rendered as a reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Missing arguments.
    #[error("missing lookup target")]
    Usage,

    /// Target is neither a domain name nor an IP literal.
    #[error("invalid target format: {target}")]
    InvalidFormat { target: String },

    /// Resolver name absent from the directory.
    #[error("unknown resolver: {name}")]
    UnknownResolver { name: String },

    /// The lookup itself failed.
    #[error("failed to resolve {target}: {source}")]
    Dns {
        target: String,
        #[source]
        source: DnsError,
    },
}

impl LookupError {
    pub fn kind(&self) -> LookupErrorKind {
        match self {
            LookupError::Usage => LookupErrorKind::Usage,
            LookupError::InvalidFormat { .. } => LookupErrorKind::InvalidFormat,
            LookupError::UnknownResolver { .. } => LookupErrorKind::UnknownResolver,
            LookupError::Dns { .. } => LookupErrorKind::Dns,
        }
    }
}

/// Errors talking to the Bot API.
#[derive(Error, Debug)]
pub enum TelegramError {
    /// Transport-level failure (connect, timeout, decode).
    #[error("Bot API request failed: {0}")]
    Http(reqwest::Error),

    /// The API answered `ok: false`.
    #[error("Bot API error {code}: {description}")]
    Api { code: i64, description: String },
}

impl From<reqwest::Error> for TelegramError {
    fn from(e: reqwest::Error) -> Self {
        // Request URLs embed the bot token; never let it reach the logs.
        TelegramError::Http(e.without_url())
    }
}

/// Categories of lookup failures, used for statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum LookupErrorKind {
    Usage,
    InvalidFormat,
    UnknownResolver,
    Dns,
}

/// Kinds of inbound events the dispatcher handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum EventType {
    Start,
    Help,
    Resolver,
    Lookup,
    InlineQuery,
    UnknownCommand,
}

/// Kinds of successful lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum LookupType {
    Forward,
    Reverse,
}

impl std::fmt::Display for LookupErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LookupErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupErrorKind::Usage => "Usage error",
            LookupErrorKind::InvalidFormat => "Invalid target format",
            LookupErrorKind::UnknownResolver => "Unknown resolver",
            LookupErrorKind::Dns => "DNS lookup failed",
        }
    }
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Start => "/start",
            EventType::Help => "/help",
            EventType::Resolver => "/resolver",
            EventType::Lookup => "/lookup",
            EventType::InlineQuery => "inline query",
            EventType::UnknownCommand => "unknown command",
        }
    }
}

impl LookupType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupType::Forward => "Forward lookups",
            LookupType::Reverse => "Reverse lookups",
        }
    }
}
