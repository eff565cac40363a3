//! Configuration types and CLI options.
//!
//! This module defines the resolved run configuration, the domain targets built
//! from it, and the enums and structs used for command-line argument parsing.

use std::fmt;
use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_ENV_FILE, DEFAULT_OUTPUT_FILE};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: One JSON object per line for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
#[derive(Debug, Parser)]
#[command(
    name = "region_ip_resolver",
    version,
    about = "Resolve region-prefixed domains to IPv4 addresses and save them as address#region lines"
)]
pub struct Cli {
    /// File the address#region lines are written to (overwritten)
    #[arg(long, short, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Env file read when a required variable is missing from the environment
    #[arg(long, default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// A fully-qualified name to resolve, tagged with the region it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainTarget {
    /// Region code, used as the output tag
    pub region: String,
    /// `region.suffix`
    pub name: String,
}

impl DomainTarget {
    /// Builds `region.suffix` with a literal dot between the two parts.
    pub fn new(region: &str, suffix: &str) -> Self {
        Self {
            region: region.to_string(),
            name: format!("{region}.{suffix}"),
        }
    }

    /// Formats one output entry: `address#region`.
    pub fn entry(&self, address: impl fmt::Display) -> String {
        format!("{}#{}", address, self.region)
    }
}

impl fmt::Display for DomainTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Validated run configuration.
///
/// Built by [`Config::load`] or [`Config::from_lookup`]; every field is
/// guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Domains in region-list order
    pub targets: Vec<DomainTarget>,
    /// Server the first domain starts resolving against
    pub dns_server: IpAddr,
    /// `DNS_TIMEOUT` in seconds
    pub timeout_secs: i64,
}

impl Config {
    /// Names of the domains to resolve, in processing order.
    pub fn domains(&self) -> Vec<&str> {
        self.targets.iter().map(|t| t.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_domain_target_joins_with_dot() {
        let target = DomainTarget::new("us", "example.com");
        assert_eq!(target.name, "us.example.com");
        assert_eq!(target.region, "us");
        assert_eq!(target.to_string(), "us.example.com");
    }

    #[test]
    fn test_domain_target_entry_format() {
        let target = DomainTarget::new("eu", "example.com");
        let addr: std::net::Ipv4Addr = "1.2.3.4".parse().unwrap();
        assert_eq!(target.entry(addr), "1.2.3.4#eu");
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["region_ip_resolver"]);
        assert_eq!(cli.output, PathBuf::from("ip_list.txt"));
        assert_eq!(cli.env_file, PathBuf::from(".env"));
        assert!(matches!(cli.log_level, LogLevel::Info));
        assert!(matches!(cli.log_format, LogFormat::Plain));
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "region_ip_resolver",
            "--output",
            "out.txt",
            "--env-file",
            "conf/prod.env",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ]);
        assert_eq!(cli.output, PathBuf::from("out.txt"));
        assert_eq!(cli.env_file, PathBuf::from("conf/prod.env"));
        assert!(matches!(cli.log_level, LogLevel::Debug));
        assert!(matches!(cli.log_format, LogFormat::Json));
    }
}
