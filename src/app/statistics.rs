//! Run summary printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{FailureKind, ResolutionStats};
use crate::RunReport;

/// Logs the final summary of a run and the failed-query breakdown.
pub fn print_run_summary(report: &RunReport, stats: &ResolutionStats) {
    info!(
        "Run summary: domains={}, resolved={}, not_found={}, exhausted={}, addresses={}",
        report.total_domains,
        report.resolved,
        report.not_found,
        report.exhausted,
        report.addresses
    );
    print_failure_statistics(stats);
    info!("Completed in {:.1}s", report.elapsed_seconds);
}

/// Logs failed queries by kind, skipping kinds that never occurred.
pub fn print_failure_statistics(stats: &ResolutionStats) {
    if stats.total() == 0 {
        return;
    }
    info!("Failed queries: {}", stats.total());
    for kind in FailureKind::iter() {
        let count = stats.get_count(kind);
        if count > 0 {
            info!("   {}: {}", kind.as_str(), count);
        }
    }
}
