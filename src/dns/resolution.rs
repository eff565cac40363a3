//! Per-domain IPv4 resolution with retries and DNS server rotation.

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use log::{debug, info, warn};

use crate::config::{
    DomainTarget, DNS_ATTEMPT_DEADLINE, DNS_QUERY_TIMEOUT, FALLBACK_DNS_SERVERS,
    MAX_RESOLVE_ATTEMPTS, RETRY_DELAY,
};
use crate::dns::lookup::DnsLookup;
use crate::error_handling::{get_retry_strategy, FailureKind, LookupError, ResolutionStats};

/// Retry and rotation parameters for resolving one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts per domain, including the first
    pub max_attempts: usize,
    /// Servers switched to before each retry, in order, without wraparound
    pub fallback_servers: Vec<IpAddr>,
    /// Timeout for a single query to one server
    pub query_timeout: Duration,
    /// Deadline for one whole A or AAAA lookup
    pub attempt_deadline: Duration,
    /// Pause before each retry
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_RESOLVE_ATTEMPTS,
            fallback_servers: FALLBACK_DNS_SERVERS.to_vec(),
            query_timeout: DNS_QUERY_TIMEOUT,
            attempt_deadline: DNS_ATTEMPT_DEADLINE,
            retry_delay: RETRY_DELAY,
        }
    }
}

/// How resolution of one domain ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainOutcome {
    /// At least one IPv4 address was returned.
    Resolved(Vec<Ipv4Addr>),
    /// The name does not exist; no further attempts were made.
    NotFound,
    /// Every attempt failed.
    Exhausted,
}

/// Result of resolving one [`DomainTarget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainResolution {
    /// The domain that was resolved
    pub target: DomainTarget,
    /// How it ended
    pub outcome: DomainOutcome,
    /// Number of A queries made
    pub attempts: usize,
}

impl DomainResolution {
    /// Output entries (`address#region`) in answer order; empty unless resolved.
    pub fn entries(&self) -> Vec<String> {
        match &self.outcome {
            DomainOutcome::Resolved(addresses) => addresses
                .iter()
                .map(|address| self.target.entry(address))
                .collect(),
            DomainOutcome::NotFound | DomainOutcome::Exhausted => Vec::new(),
        }
    }
}

/// Resolves the IPv4 addresses of one domain.
///
/// Each attempt queries the A record set through `lookup`. The first non-empty
/// answer ends the loop; AAAA records are then looked up for logging only.
/// NXDOMAIN ends the loop with [`DomainOutcome::NotFound`]. Any other failure
/// (empty answer, timeout, transport error) is retried: before each retry the
/// next server from `policy.fallback_servers` is made active, then the loop
/// sleeps for `policy.retry_delay`. The rotation index is local to this call
/// and advances once per retry regardless of the failure; once the list is
/// used up the last server stays active.
///
/// Failed queries are counted in `stats`.
pub async fn resolve_domain<L: DnsLookup>(
    target: &DomainTarget,
    lookup: &mut L,
    policy: &RetryPolicy,
    stats: &ResolutionStats,
) -> DomainResolution {
    let mut fallback_servers = policy.fallback_servers.iter();
    let mut delays = get_retry_strategy(policy.retry_delay, policy.max_attempts);
    let mut attempts = 0;

    for attempt in 1..=policy.max_attempts {
        attempts = attempt;
        if attempt == 1 {
            info!("Resolving {target} via {}", lookup.nameserver());
        } else {
            info!(
                "Attempt {attempt}/{} for {target} via {}",
                policy.max_attempts,
                lookup.nameserver()
            );
        }

        match lookup.lookup_ipv4(&target.name).await {
            Ok(addresses) if !addresses.is_empty() => {
                for address in &addresses {
                    info!("{target} A {address}");
                }
                log_ipv6_addresses(target, lookup).await;
                return DomainResolution {
                    target: target.clone(),
                    outcome: DomainOutcome::Resolved(addresses),
                    attempts,
                };
            }
            Ok(_) | Err(LookupError::NoRecords) => {
                stats.increment(FailureKind::NoRecords);
                warn!("No IPv4 address found for {target}");
            }
            Err(e) => {
                stats.increment(e.kind());
                if !e.is_retryable() {
                    warn!("Giving up on {target}: {e}");
                    return DomainResolution {
                        target: target.clone(),
                        outcome: DomainOutcome::NotFound,
                        attempts,
                    };
                }
                warn!("Failed to resolve {target}: {e}");
            }
        }

        let Some(delay) = delays.next() else {
            break;
        };
        if let Some(server) = fallback_servers.next() {
            info!("Switching to DNS server {server}");
            lookup.use_nameserver(*server);
        }
        tokio::time::sleep(delay).await;
    }

    warn!("Could not resolve {target} after {attempts} attempts");
    DomainResolution {
        target: target.clone(),
        outcome: DomainOutcome::Exhausted,
        attempts,
    }
}

/// Logs the AAAA records of `target`. Failures are never propagated.
async fn log_ipv6_addresses<L: DnsLookup>(target: &DomainTarget, lookup: &L) {
    match lookup.lookup_ipv6(&target.name).await {
        Ok(addresses) if !addresses.is_empty() => {
            for address in addresses {
                info!("{target} AAAA {address}");
            }
        }
        Ok(_) | Err(LookupError::NoRecords) => info!("{target} has no IPv6 address"),
        Err(e) => debug!("IPv6 lookup for {target} failed: {e}"),
    }
}
