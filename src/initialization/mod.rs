//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - Logger
//! - Resolver directory
//! - DNS gateway
//! - HTTP client for the Bot API
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;
mod resolver;

use std::sync::Arc;

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::resolvers::ResolverDirectory;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
pub use resolver::init_gateway;

/// Builds the resolver directory from `config.resolvers_file`, or the
/// built-in table when no file is configured.
///
/// # Errors
///
/// Returns `InitializationError::DirectoryError` if the file cannot be read or
/// does not describe a valid directory.
pub fn init_directory(config: &Config) -> Result<Arc<ResolverDirectory>, InitializationError> {
    let directory = match &config.resolvers_file {
        Some(path) => ResolverDirectory::from_file(path)?,
        None => ResolverDirectory::builtin(),
    };
    Ok(Arc::new(directory))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_init_directory_builtin() {
        let directory = init_directory(&Config::default()).unwrap();
        assert_eq!(directory.len(), 16);
    }

    #[test]
    fn test_init_directory_bad_file() {
        let config = Config {
            resolvers_file: Some(PathBuf::from("/nonexistent/resolvers.json")),
            ..Default::default()
        };
        assert!(matches!(
            init_directory(&config),
            Err(InitializationError::DirectoryError(_))
        ));
    }
}
