// Shared test helpers: a scripted DNS lookup and config builders.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use region_ip_resolver::{Config, DnsLookup, DomainTarget, LookupError};

/// A [`DnsLookup`] that replays per-domain A answers.
///
/// Domains without a script (or whose script ran out) time out. Every A query
/// is recorded together with the server it was sent to.
#[allow(dead_code)]
pub struct ScriptedLookup {
    answers: RefCell<HashMap<String, VecDeque<Result<Vec<Ipv4Addr>, LookupError>>>>,
    nameserver: IpAddr,
    queries: RefCell<Vec<(String, IpAddr)>>,
}

#[allow(dead_code)] // Not every test file uses every helper
impl ScriptedLookup {
    pub fn new(nameserver: IpAddr) -> Self {
        Self {
            answers: RefCell::new(HashMap::new()),
            nameserver,
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn script(self, domain: &str, answers: Vec<Result<Vec<Ipv4Addr>, LookupError>>) -> Self {
        self.answers
            .borrow_mut()
            .insert(domain.to_string(), answers.into());
        self
    }

    /// Number of A queries made for `domain`.
    pub fn attempts(&self, domain: &str) -> usize {
        self.queries
            .borrow()
            .iter()
            .filter(|(d, _)| d == domain)
            .count()
    }

    /// Servers the A queries for `domain` were sent to, in order.
    pub fn servers_for(&self, domain: &str) -> Vec<IpAddr> {
        self.queries
            .borrow()
            .iter()
            .filter(|(d, _)| d == domain)
            .map(|(_, server)| *server)
            .collect()
    }
}

impl DnsLookup for ScriptedLookup {
    async fn lookup_ipv4(&self, domain: &str) -> Result<Vec<Ipv4Addr>, LookupError> {
        self.queries
            .borrow_mut()
            .push((domain.to_string(), self.nameserver));
        self.answers
            .borrow_mut()
            .get_mut(domain)
            .and_then(|answers| answers.pop_front())
            .unwrap_or(Err(LookupError::Timeout))
    }

    async fn lookup_ipv6(&self, _domain: &str) -> Result<Vec<Ipv6Addr>, LookupError> {
        Err(LookupError::NoRecords)
    }

    fn use_nameserver(&mut self, server: IpAddr) {
        self.nameserver = server;
    }

    fn nameserver(&self) -> IpAddr {
        self.nameserver
    }
}

/// Parses an IPv4 literal.
#[allow(dead_code)]
pub fn ip(s: &str) -> Ipv4Addr {
    s.parse().expect("valid IPv4 literal")
}

/// The server every test config starts on.
#[allow(dead_code)]
pub fn initial_server() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(10, 0, 0, 53))
}

/// Builds a config for `regions` under `suffix` starting on [`initial_server`].
#[allow(dead_code)]
pub fn test_config(regions: &[&str], suffix: &str) -> Config {
    Config {
        targets: regions
            .iter()
            .map(|region| DomainTarget::new(region, suffix))
            .collect(),
        dns_server: initial_server(),
        timeout_secs: 5,
    }
}
