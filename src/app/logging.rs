//! Progress logging utilities.

use log::info;
use std::time::Instant;

/// Logs how many domains have been processed so far.
///
/// # Arguments
///
/// * `start_time` - The start time of processing
/// * `completed` - Domains processed so far
/// * `total` - Domains in the run
pub fn log_progress(start_time: Instant, completed: usize, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    info!(
        "Processed {}/{} domains in {:.2} seconds",
        completed, total, elapsed_secs
    );
}
