//! DNS resolver initialization.
//!
//! This module builds `hickory-resolver` instances pinned to a single name
//! server, with the timeouts of the retry policy.

use std::net::IpAddr;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::DNS_PORT;
use crate::dns::{HickoryLookup, RetryPolicy};

/// Resolver options derived from the retry policy.
///
/// The per-query timeout comes from the policy; the resolver retries once on
/// its own within the policy's per-attempt deadline. `ndots` is 0 so names are
/// never expanded with search domains.
pub fn resolver_opts(policy: &RetryPolicy) -> ResolverOpts {
    let mut opts = ResolverOpts::default();
    opts.timeout = policy.query_timeout;
    opts.attempts = 2;
    opts.ndots = 0;
    opts
}

/// Builds a resolver that sends every query to `nameserver` (UDP, then TCP).
pub fn build_resolver(nameserver: IpAddr, opts: ResolverOpts) -> TokioAsyncResolver {
    let name_servers = NameServerConfigGroup::from_ips_clear(&[nameserver], DNS_PORT, true);
    let config = ResolverConfig::from_parts(None, Vec::new(), name_servers);
    TokioAsyncResolver::tokio(config, opts)
}

/// Initializes the lookup handle shared by every domain of a run.
///
/// # Arguments
///
/// * `nameserver` - Server queried until the retry loop rotates away from it
/// * `policy` - Supplies the query timeout and per-attempt deadline
pub fn init_resolver(nameserver: IpAddr, policy: &RetryPolicy) -> HickoryLookup {
    HickoryLookup::new(nameserver, resolver_opts(policy), policy.attempt_deadline)
}
