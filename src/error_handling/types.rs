//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! closed set of failure kinds a single DNS query can produce.

use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors raised while loading the run configuration.
///
/// Any of these aborts the run before a single DNS query is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required value is absent (or blank) in the environment and in the env file.
    #[error("missing required configuration value {0}; set it in the environment or the .env file")]
    Missing(&'static str),

    /// `DNS_SERVER` is not an IP address.
    #[error("DNS_SERVER is not a valid IP address: {0:?}")]
    InvalidDnsServer(String),

    /// `DNS_TIMEOUT` is not an integer number of seconds.
    #[error("DNS_TIMEOUT must be an integer number of seconds, got {0:?}")]
    InvalidTimeout(String),

    /// The env file exists but could not be read.
    #[error("failed to read env file {}: {message}", path.display())]
    EnvFile {
        /// Path of the env file.
        path: PathBuf,
        /// I/O message.
        message: String,
    },
}

/// Outcome of a single failed DNS query.
///
/// The set is closed on purpose: every resolver error is mapped onto one of
/// these kinds, and the retry loop decides per kind whether to try again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The name exists but has no records of the requested type. Retried.
    #[error("no records found")]
    NoRecords,

    /// The name does not exist. Terminal for the domain.
    #[error("domain does not exist (NXDOMAIN)")]
    NxDomain,

    /// The query did not complete within its deadline. Retried.
    #[error("query timed out")]
    Timeout,

    /// Transport failure, malformed response or anything else. Retried.
    #[error("resolution error: {0}")]
    Other(String),
}

impl LookupError {
    /// Returns the statistics bucket for this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            LookupError::NoRecords => FailureKind::NoRecords,
            LookupError::NxDomain => FailureKind::NxDomain,
            LookupError::Timeout => FailureKind::Timeout,
            LookupError::Other(_) => FailureKind::Other,
        }
    }

    /// Whether another attempt may be made after this error.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, LookupError::NxDomain)
    }
}

/// Errors raised while writing the result file.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The output file could not be created or written.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// Target file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Failure categories counted during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    /// Empty answer for the requested record type
    NoRecords,
    /// Name does not exist
    NxDomain,
    /// Query deadline elapsed
    Timeout,
    /// Any other resolver failure
    Other,
}

impl FailureKind {
    /// Human-readable label used in the run summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::NoRecords => "no records",
            FailureKind::NxDomain => "NXDOMAIN",
            FailureKind::Timeout => "timeout",
            FailureKind::Other => "other error",
        }
    }
}
