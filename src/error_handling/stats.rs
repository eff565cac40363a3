//! Resolution statistics tracking.
//!
//! Counts failed DNS queries by kind over a run so the final summary can show
//! why domains needed retries.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::FailureKind;

/// Per-kind counters of failed queries.
///
/// Every [`FailureKind`] is initialized to zero on creation.
pub struct ResolutionStats {
    failures: HashMap<FailureKind, AtomicUsize>,
}

impl ResolutionStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for kind in FailureKind::iter() {
            failures.insert(kind, AtomicUsize::new(0));
        }
        ResolutionStats { failures }
    }

    /// Increment the counter for a failure kind.
    pub fn increment(&self, kind: FailureKind) {
        if let Some(counter) = self.failures.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment failure counter for {:?} which is not in the map",
                kind
            );
        }
    }

    /// Get the count for a failure kind.
    pub fn get_count(&self, kind: FailureKind) -> usize {
        self.failures
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total failed queries across all kinds.
    pub fn total(&self) -> usize {
        self.failures
            .values()
            .map(|c| c.load(Ordering::SeqCst))
            .sum()
    }
}

impl Default for ResolutionStats {
    fn default() -> Self {
        Self::new()
    }
}
