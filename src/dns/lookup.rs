//! Record lookups against a single, switchable DNS server.
//!
//! [`DnsLookup`] is the seam between the retry loop and the resolver library;
//! [`HickoryLookup`] is the production implementation over `hickory-resolver`.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::time::Duration;

use hickory_resolver::config::ResolverOpts;
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::{categorize_resolve_error, LookupError};
use crate::initialization::build_resolver;

/// A/AAAA lookups against one active name server.
///
/// The retry loop only ever holds one implementation and awaits one query at
/// a time, so `use_nameserver` takes `&mut self` instead of requiring
/// interior mutability.
#[allow(async_fn_in_trait)]
pub trait DnsLookup {
    /// Queries the A record set for `domain`.
    async fn lookup_ipv4(&self, domain: &str) -> Result<Vec<Ipv4Addr>, LookupError>;

    /// Queries the AAAA record set for `domain`.
    async fn lookup_ipv6(&self, domain: &str) -> Result<Vec<Ipv6Addr>, LookupError>;

    /// Makes `server` the sole server used by subsequent lookups.
    fn use_nameserver(&mut self, server: IpAddr);

    /// The server currently queried.
    fn nameserver(&self) -> IpAddr;
}

/// [`DnsLookup`] backed by a `TokioAsyncResolver` pinned to one server.
///
/// Switching servers rebuilds the resolver with the same options. Every lookup
/// is additionally bounded by `deadline`, which covers the resolver's own
/// per-query timeout and retries.
pub struct HickoryLookup {
    resolver: TokioAsyncResolver,
    opts: ResolverOpts,
    nameserver: IpAddr,
    deadline: Duration,
}

impl HickoryLookup {
    /// Creates a lookup that queries `nameserver` only.
    pub fn new(nameserver: IpAddr, opts: ResolverOpts, deadline: Duration) -> Self {
        Self {
            resolver: build_resolver(nameserver, opts.clone()),
            opts,
            nameserver,
            deadline,
        }
    }
}

impl DnsLookup for HickoryLookup {
    async fn lookup_ipv4(&self, domain: &str) -> Result<Vec<Ipv4Addr>, LookupError> {
        match tokio::time::timeout(self.deadline, self.resolver.ipv4_lookup(domain)).await {
            Ok(Ok(lookup)) => Ok(lookup.iter().map(|a| a.0).collect()),
            Ok(Err(e)) => Err(categorize_resolve_error(&e)),
            Err(_) => Err(LookupError::Timeout),
        }
    }

    async fn lookup_ipv6(&self, domain: &str) -> Result<Vec<Ipv6Addr>, LookupError> {
        match tokio::time::timeout(self.deadline, self.resolver.ipv6_lookup(domain)).await {
            Ok(Ok(lookup)) => Ok(lookup.iter().map(|aaaa| aaaa.0).collect()),
            Ok(Err(e)) => Err(categorize_resolve_error(&e)),
            Err(_) => Err(LookupError::Timeout),
        }
    }

    fn use_nameserver(&mut self, server: IpAddr) {
        self.resolver = build_resolver(server, self.opts.clone());
        self.nameserver = server;
    }

    fn nameserver(&self) -> IpAddr {
        self.nameserver
    }
}
