//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - Logger
//! - DNS resolver pinned to one switchable server

mod logger;
mod resolver;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::{build_resolver, init_resolver, resolver_opts};
