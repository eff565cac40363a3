//! region_ip_resolver library: resolve region-prefixed domains to IPv4 addresses
//!
//! This library builds `region.suffix` domain names from configuration, resolves
//! each one's A records through a rotating chain of public DNS servers with
//! bounded retries, and saves the addresses as `address#region` lines.
//!
//! # Example
//!
//! ```no_run
//! use region_ip_resolver::{run_resolution, Config, RunOptions};
//! use std::path::Path;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load(Path::new(".env"))?;
//! let report = run_resolution(&config, &RunOptions::default()).await;
//! println!("Resolved {} of {} domains", report.resolved, report.total_domains);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Domains are resolved one at a time,
//! so a `current_thread` runtime is sufficient.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod export;
pub mod initialization;

// Re-export public API
pub use config::{Cli, Config, DomainTarget, LogFormat, LogLevel};
pub use dns::{resolve_domain, DnsLookup, DomainOutcome, DomainResolution, RetryPolicy};
pub use error_handling::{ConfigError, LookupError};
pub use run::{run_resolution, run_with_lookup, RunOptions, RunReport};

// Internal run module (contains the main resolution loop)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use log::info;

    use crate::app::{log_progress, print_run_summary};
    use crate::config::{Config, DEFAULT_OUTPUT_FILE};
    use crate::dns::{resolve_domain, DnsLookup, DomainOutcome, RetryPolicy};
    use crate::error_handling::ResolutionStats;
    use crate::export::save_results;
    use crate::initialization::init_resolver;

    /// Options of a run that do not come from the environment.
    #[derive(Debug, Clone)]
    pub struct RunOptions {
        /// File the entries are written to
        pub output: PathBuf,
        /// Retry and rotation parameters
        pub policy: RetryPolicy,
    }

    impl Default for RunOptions {
        fn default() -> Self {
            Self {
                output: PathBuf::from(DEFAULT_OUTPUT_FILE),
                policy: RetryPolicy::default(),
            }
        }
    }

    /// Results of a resolution run.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Domains in the configuration
        pub total_domains: usize,
        /// Domains with at least one IPv4 address
        pub resolved: usize,
        /// Domains answered with NXDOMAIN
        pub not_found: usize,
        /// Domains that failed every attempt
        pub exhausted: usize,
        /// Entries collected (one per IPv4 address)
        pub addresses: usize,
        /// `address#region` entries in accumulation order
        pub entries: Vec<String>,
        /// Output file
        pub output: PathBuf,
        /// Whether the output file was written
        pub saved: bool,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Resolves every configured domain and saves the entries.
    ///
    /// Creates one resolver handle pointed at `config.dns_server` and reuses it
    /// for all domains. Never fails: per-domain failures only leave that
    /// domain's entries empty, and a failed write is logged and reported in
    /// [`RunReport::saved`].
    pub async fn run_resolution(config: &Config, options: &RunOptions) -> RunReport {
        let mut lookup = init_resolver(config.dns_server, &options.policy);
        run_with_lookup(config, options, &mut lookup).await
    }

    /// Same as [`run_resolution`] with a caller-supplied lookup handle.
    ///
    /// The handle is shared across domains and never reset: a domain starts
    /// on whichever server the previous domain's retries left active, while
    /// its own rotation restarts from the head of the fallback list.
    pub async fn run_with_lookup<L: DnsLookup>(
        config: &Config,
        options: &RunOptions,
        lookup: &mut L,
    ) -> RunReport {
        let start_time = Instant::now();
        let stats = ResolutionStats::new();
        let total_domains = config.targets.len();

        info!(
            "Resolving {} domain{} via {} (DNS_TIMEOUT={}s)",
            total_domains,
            if total_domains == 1 { "" } else { "s" },
            config.dns_server,
            config.timeout_secs
        );

        let mut entries = Vec::new();
        let (mut resolved, mut not_found, mut exhausted) = (0, 0, 0);

        for (index, target) in config.targets.iter().enumerate() {
            let resolution = resolve_domain(target, lookup, &options.policy, &stats).await;
            match resolution.outcome {
                DomainOutcome::Resolved(_) => resolved += 1,
                DomainOutcome::NotFound => not_found += 1,
                DomainOutcome::Exhausted => exhausted += 1,
            }
            entries.extend(resolution.entries());

            log_progress(start_time, index + 1, total_domains);
        }

        let saved = save_results(&entries, &options.output).await;

        let report = RunReport {
            total_domains,
            resolved,
            not_found,
            exhausted,
            addresses: entries.len(),
            entries,
            output: options.output.clone(),
            saved,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        };
        print_run_summary(&report, &stats);
        report
    }
}
