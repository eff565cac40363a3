//! DNS resolution with retries and server rotation.
//!
//! This module provides:
//! - The [`DnsLookup`] seam and its `hickory-resolver` implementation
//! - The per-domain retry loop ([`resolve_domain`])
//!
//! All queries are awaited one at a time.

mod lookup;
mod resolution;

// Re-export public API
pub use lookup::{DnsLookup, HickoryLookup};
pub use resolution::{resolve_domain, DomainOutcome, DomainResolution, RetryPolicy};
