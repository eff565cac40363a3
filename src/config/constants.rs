//! Configuration constants.
//!
//! This module defines the environment variable names, resolver timings and
//! output defaults used throughout the application.

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

// Environment variable names
/// Comma-separated list of region codes, e.g. `us,eu,jp`
pub const ENV_REGIONS: &str = "API_URL_REGIONS";
/// Domain suffix appended to every region code
pub const ENV_DOMAIN_SUFFIX: &str = "DOMAIN_SUFFIX";
/// Initial DNS server address
pub const ENV_DNS_SERVER: &str = "DNS_SERVER";
/// Timeout in whole seconds
pub const ENV_DNS_TIMEOUT: &str = "DNS_TIMEOUT";

/// Env file consulted when a required variable is missing from the environment
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Default output file, overwritten on every run
pub const DEFAULT_OUTPUT_FILE: &str = "ip_list.txt";

// Resolution retry policy
/// Maximum resolution attempts per domain (including the first one)
pub const MAX_RESOLVE_ATTEMPTS: usize = 5;
/// Timeout for a single DNS query sent to one server
pub const DNS_QUERY_TIMEOUT: Duration = Duration::from_secs(3);
/// Overall deadline for one A or AAAA lookup, including the resolver's own retries
pub const DNS_ATTEMPT_DEADLINE: Duration = Duration::from_secs(5);
/// Pause between two attempts for the same domain
pub const RETRY_DELAY: Duration = Duration::from_millis(500);
/// Standard DNS port
pub const DNS_PORT: u16 = 53;

/// Public DNS servers switched to, in order, when an attempt fails.
///
/// The list is not cycled: once every entry has been used, further retries
/// stay on the last one.
pub const FALLBACK_DNS_SERVERS: [IpAddr; 7] = [
    IpAddr::V4(Ipv4Addr::new(114, 114, 114, 114)), // 114DNS
    IpAddr::V4(Ipv4Addr::new(223, 5, 5, 5)),       // AliDNS
    IpAddr::V4(Ipv4Addr::new(119, 29, 29, 29)),    // DNSPod
    IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)),         // Google
    IpAddr::V4(Ipv4Addr::new(1, 1, 1, 1)),         // Cloudflare
    IpAddr::V4(Ipv4Addr::new(8, 8, 4, 4)),         // Google secondary
    IpAddr::V4(Ipv4Addr::new(208, 67, 222, 222)),  // OpenDNS
];
