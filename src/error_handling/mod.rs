//! Error handling and resolution statistics.
//!
//! This module provides:
//! - Error type definitions for configuration, lookups, export and startup
//! - Mapping of resolver errors onto the closed [`LookupError`] set
//! - The fixed-interval retry delay strategy
//! - Failure counters for the run summary

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_resolve_error, get_retry_strategy};
pub use stats::ResolutionStats;
pub use types::{ConfigError, ExportError, FailureKind, InitializationError, LookupError};
