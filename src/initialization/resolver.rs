//! DNS gateway initialization.
//!
//! Builds the hickory-backed lookup gateway. Forward lookups need no shared
//! state; reverse lookups use a resolver built from the host configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::dns::{lookup_opts, HickoryGateway};

/// Initializes the DNS gateway with the given per-lookup timeout.
///
/// Reverse lookups read `/etc/resolv.conf` (or the platform equivalent). If the
/// host configuration cannot be read, the gateway falls back to hickory's
/// default upstreams so reverse lookups keep working.
///
/// # Returns
///
/// The gateway wrapped in `Arc` for sharing across handler tasks.
pub fn init_gateway(timeout: Duration) -> Arc<HickoryGateway> {
    let (config, opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok(conf) => conf,
        Err(e) => {
            log::warn!(
                "Failed to read system DNS configuration: {}. Using default upstreams for reverse lookups.",
                e
            );
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };
    let system = TokioAsyncResolver::tokio(config, lookup_opts(opts, timeout));
    Arc::new(HickoryGateway::new(system, timeout))
}
