//! Lookup gateway.
//!
//! Wraps `hickory-resolver` behind the [`DnsLookup`] trait:
//! - Forward lookups (A/AAAA) against a caller-chosen resolver address
//! - Reverse lookups (PTR) against the host's configured resolver
//!
//! The dispatcher only sees the trait, so tests swap in a fake.

mod resolution;

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::DnsError;

// Re-export public API
pub use resolution::{map_resolve_error, resolve_domain, resolve_ptr, resolver_for_address};
pub(crate) use resolution::lookup_opts;

/// DNS resolution primitive used by the dispatcher.
#[async_trait]
pub trait DnsLookup: Send + Sync {
    /// Resolves `domain` using the resolver at `resolver_address`.
    async fn resolve_domain(
        &self,
        domain: &str,
        resolver_address: IpAddr,
    ) -> Result<Vec<String>, DnsError>;

    /// Resolves `ip` to hostnames using the host's default resolver.
    async fn resolve_ptr(&self, ip: IpAddr) -> Result<Vec<String>, DnsError>;
}

/// Production gateway backed by hickory.
pub struct HickoryGateway {
    system: TokioAsyncResolver,
    timeout: Duration,
}

impl HickoryGateway {
    /// Creates a gateway. `system` serves reverse lookups; forward lookups
    /// build a dedicated resolver per request.
    pub fn new(system: TokioAsyncResolver, timeout: Duration) -> Self {
        Self { system, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl DnsLookup for HickoryGateway {
    async fn resolve_domain(
        &self,
        domain: &str,
        resolver_address: IpAddr,
    ) -> Result<Vec<String>, DnsError> {
        resolve_domain(domain, resolver_address, self.timeout).await
    }

    async fn resolve_ptr(&self, ip: IpAddr) -> Result<Vec<String>, DnsError> {
        resolve_ptr(ip, &self.system, self.timeout).await
    }
}
