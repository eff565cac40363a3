//! Configuration loading from the environment and an env file.

use std::collections::HashMap;
use std::net::IpAddr;
use std::path::Path;

use log::{debug, info, warn};

use crate::config::constants::{ENV_DNS_SERVER, ENV_DNS_TIMEOUT, ENV_DOMAIN_SUFFIX, ENV_REGIONS};
use crate::config::types::{Config, DomainTarget};
use crate::error_handling::ConfigError;

/// Required variables, in the order they are reported when missing.
const REQUIRED_VARS: [&str; 4] = [ENV_REGIONS, ENV_DOMAIN_SUFFIX, ENV_DNS_SERVER, ENV_DNS_TIMEOUT];

impl Config {
    /// Loads the configuration from the process environment, falling back to
    /// `env_file` for any required variable that is unset or blank.
    ///
    /// Values present in the environment always win over the file. A missing
    /// env file is only an error if it leaves a required value unset.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a required value is missing from both
    /// sources, if a value does not parse, or if the env file is unreadable.
    pub fn load(env_file: &Path) -> Result<Self, ConfigError> {
        let mut values: HashMap<&'static str, String> = HashMap::new();
        for name in REQUIRED_VARS {
            if let Some(value) = non_blank(std::env::var(name).ok()) {
                values.insert(name, value);
            }
        }

        if values.len() == REQUIRED_VARS.len() {
            info!("Using configuration from environment variables");
        } else {
            match read_env_file(env_file)? {
                Some(file_values) => {
                    info!(
                        "Using {} for configuration missing from the environment",
                        env_file.display()
                    );
                    for name in REQUIRED_VARS {
                        if values.contains_key(name) {
                            continue;
                        }
                        if let Some(value) = non_blank(file_values.get(name).cloned()) {
                            values.insert(name, value);
                        }
                    }
                }
                None => debug!("Env file {} not found", env_file.display()),
            }
        }

        Self::from_lookup(|name| values.get(name).cloned())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as missing. Region codes are split on commas,
    /// trimmed, and empty entries dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] for the first required value that is
    /// absent, [`ConfigError::InvalidDnsServer`] or [`ConfigError::InvalidTimeout`]
    /// when a value does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| -> Result<String, ConfigError> {
            non_blank(lookup(name)).ok_or(ConfigError::Missing(name))
        };

        // All four must be present before any of them is parsed.
        let regions = required(ENV_REGIONS)?;
        let suffix = required(ENV_DOMAIN_SUFFIX)?;
        let dns_server = required(ENV_DNS_SERVER)?;
        let timeout = required(ENV_DNS_TIMEOUT)?;

        let dns_server: IpAddr = dns_server
            .parse()
            .map_err(|_| ConfigError::InvalidDnsServer(dns_server.clone()))?;
        let timeout_secs: i64 = timeout
            .parse()
            .map_err(|_| ConfigError::InvalidTimeout(timeout.clone()))?;
        if timeout_secs <= 0 {
            warn!("{ENV_DNS_TIMEOUT} is {timeout_secs}; queries use the built-in timeouts");
        }

        let targets: Vec<DomainTarget> = parse_regions(&regions)
            .into_iter()
            .map(|region| DomainTarget::new(region, &suffix))
            .collect();
        if targets.is_empty() {
            warn!("{ENV_REGIONS} has no region codes after trimming: {regions:?}");
        }

        Ok(Config {
            targets,
            dns_server,
            timeout_secs,
        })
    }
}

/// Splits a comma-separated region list, trimming whitespace and dropping
/// empty entries.
pub fn parse_regions(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|region| !region.is_empty())
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Reads `KEY=VALUE` pairs from an env file without touching the process
/// environment. Returns `Ok(None)` if the file does not exist.
///
/// Lines that do not parse are logged and skipped.
fn read_env_file(path: &Path) -> Result<Option<HashMap<String, String>>, ConfigError> {
    let env_file_error = |e: dotenvy::Error| ConfigError::EnvFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => return Ok(None),
        Err(e) => return Err(env_file_error(e)),
    };

    let mut values = HashMap::new();
    for item in iter {
        match item {
            Ok((key, value)) => {
                values.insert(key, value);
            }
            Err(dotenvy::Error::LineParse(line, index)) => {
                warn!(
                    "Skipping malformed line in {} (position {index}): {line:?}",
                    path.display()
                );
            }
            Err(e) => return Err(env_file_error(e)),
        }
    }
    Ok(Some(values))
}
