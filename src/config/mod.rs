//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (variable names, timeouts, fallback DNS servers)
//! - Loading and validation of the environment / env file configuration
//! - CLI option types and parsing

mod constants;
mod loader;
mod types;

// Re-export all constants
pub use constants::*;
pub use loader::parse_regions;
pub use types::{Cli, Config, DomainTarget, LogFormat, LogLevel};
