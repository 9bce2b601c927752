//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::API_REQUEST_TIMEOUT_SECS;

/// Initializes the HTTP client used for Bot API calls.
///
/// Only the connect timeout is set here; each call sets its own request
/// timeout because long polls outlive ordinary calls.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client() -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(API_REQUEST_TIMEOUT_SECS))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}
