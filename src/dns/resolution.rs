//! Forward and reverse lookups.
//!
//! Forward lookups go to one specific resolver over UDP on port 53, bypassing
//! the host configuration. Reverse lookups use the host's system resolver
//! configuration. Both make a single attempt bounded by a timeout, and neither
//! caches answers.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use hickory_resolver::config::{
    LookupIpStrategy, NameServerConfig, Protocol, ResolverConfig, ResolverOpts,
};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::TokioAsyncResolver;

use crate::config::DNS_PORT;
use crate::error_handling::DnsError;

/// Resolver options shared by forward and reverse lookups.
///
/// One attempt, no answer cache, both address families.
pub(crate) fn lookup_opts(mut opts: ResolverOpts, timeout: Duration) -> ResolverOpts {
    opts.timeout = timeout;
    opts.attempts = 1;
    opts.cache_size = 0;
    opts.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;
    opts
}

/// Builds a resolver that only talks to `resolver_address` over UDP.
pub fn resolver_for_address(resolver_address: IpAddr, timeout: Duration) -> TokioAsyncResolver {
    let name_server = NameServerConfig::new(
        SocketAddr::new(resolver_address, DNS_PORT),
        Protocol::Udp,
    );
    let config = ResolverConfig::from_parts(None, Vec::new(), vec![name_server]);

    let mut opts = lookup_opts(ResolverOpts::default(), timeout);
    // Answers must come from the chosen resolver, not /etc/hosts
    opts.use_hosts_file = false;
    opts.ndots = 0;

    TokioAsyncResolver::tokio(config, opts)
}

/// Resolves `domain` to its addresses using the resolver at `resolver_address`.
///
/// # Returns
///
/// Every A and AAAA answer as a string, in the order the resolver returned them.
///
/// # Errors
///
/// Returns `DnsError::NoRecords` for NXDOMAIN or an empty answer,
/// `DnsError::Timeout` if no answer arrives within `timeout`, and
/// `DnsError::Resolve` for anything else.
pub async fn resolve_domain(
    domain: &str,
    resolver_address: IpAddr,
    timeout: Duration,
) -> Result<Vec<String>, DnsError> {
    let resolver = resolver_for_address(resolver_address, timeout);

    let response = bounded(timeout, resolver.lookup_ip(domain)).await?;
    let addresses: Vec<String> = response.iter().map(|ip| ip.to_string()).collect();
    if addresses.is_empty() {
        return Err(DnsError::NoRecords);
    }
    Ok(addresses)
}

/// Performs a reverse DNS lookup (PTR records) for `ip` with `resolver`.
///
/// # Returns
///
/// Hostnames in answer order, fully qualified (with the trailing dot).
pub async fn resolve_ptr(
    ip: IpAddr,
    resolver: &TokioAsyncResolver,
    timeout: Duration,
) -> Result<Vec<String>, DnsError> {
    let response = bounded(timeout, resolver.reverse_lookup(ip)).await?;
    let hostnames: Vec<String> = response.iter().map(|name| name.to_utf8()).collect();
    if hostnames.is_empty() {
        return Err(DnsError::NoRecords);
    }
    Ok(hostnames)
}

/// Runs a lookup future under a hard deadline.
///
/// hickory enforces its own per-request timeout; the outer deadline guarantees
/// the caller is released even if the resolver task stalls elsewhere.
async fn bounded<T, F>(timeout: Duration, lookup: F) -> Result<T, DnsError>
where
    F: std::future::Future<Output = Result<T, ResolveError>>,
{
    match tokio::time::timeout(timeout, lookup).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(map_resolve_error(&e, timeout)),
        Err(_) => Err(DnsError::Timeout {
            secs: timeout.as_secs(),
        }),
    }
}

/// Maps a hickory error onto the lookup error taxonomy.
pub fn map_resolve_error(e: &ResolveError, timeout: Duration) -> DnsError {
    match e.kind() {
        ResolveErrorKind::NoRecordsFound { .. } => DnsError::NoRecords,
        ResolveErrorKind::Timeout => DnsError::Timeout {
            secs: timeout.as_secs(),
        },
        _ => DnsError::Resolve(e.to_string()),
    }
}
