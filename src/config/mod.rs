//! Bot configuration.
//!
//! [`Opt`] is the clap/env surface; [`Config`] is what the library consumes.
//! Tunable defaults and fixed limits live in the constants.

mod constants;
mod types;

pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt};
