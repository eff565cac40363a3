//! Resolver error categorization and retry delay strategy.

use std::time::Duration;

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::error::ProtoErrorKind;
use hickory_resolver::proto::op::ResponseCode;
use tokio_retry::strategy::FixedInterval;

use super::types::LookupError;

/// Creates the delay sequence used between resolution attempts.
///
/// Yields `max_attempts - 1` equal delays: one before each retry, none after
/// the final attempt.
pub fn get_retry_strategy(delay: Duration, max_attempts: usize) -> impl Iterator<Item = Duration> {
    FixedInterval::new(delay).take(max_attempts.saturating_sub(1))
}

/// Maps a `hickory_resolver` error onto a [`LookupError`].
///
/// `NoRecordsFound` carrying an `NXDomain` response code is the only path to
/// [`LookupError::NxDomain`]; every other empty answer is [`LookupError::NoRecords`].
pub fn categorize_resolve_error(error: &ResolveError) -> LookupError {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. }
            if *response_code == ResponseCode::NXDomain =>
        {
            LookupError::NxDomain
        }
        ResolveErrorKind::NoRecordsFound { .. } => LookupError::NoRecords,
        ResolveErrorKind::Timeout => LookupError::Timeout,
        ResolveErrorKind::Proto(proto) if matches!(proto.kind(), ProtoErrorKind::Timeout) => {
            LookupError::Timeout
        }
        _ => LookupError::Other(error.to_string()),
    }
}
