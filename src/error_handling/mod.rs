//! Error handling and bot statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, directory, DNS, lookup, transport)
//! - Statistics tracking for events, lookup outcomes and delivery failures

mod stats;
mod types;

// Re-export public API
pub use stats::BotStats;
pub use types::{
    DirectoryError, DnsError, EventType, InitializationError, LookupError, LookupErrorKind,
    LookupType, TelegramError,
};
