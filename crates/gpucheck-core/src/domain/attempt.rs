//! Two-stage attempt policy: accelerator first, CPU fallback second.

use super::{Evidence, ProbeResult};
use crate::error::ProbeError;

/// Default number of characters of an accelerator error kept in `details`.
pub const DETAIL_ERROR_LIMIT: usize = 50;

/// Truncate an error message to `limit` characters, adding `...` when cut.
///
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn truncate_error(message: &str, limit: usize) -> String {
    match message.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &message[..cut]),
        None => message.to_string(),
    }
}

/// Classifies an accelerator attempt and its fallback into a [`ProbeResult`].
///
/// The fallback is only run when the accelerator stage failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptPolicy {
    pub error_limit: usize,
}

impl Default for AttemptPolicy {
    fn default() -> Self {
        Self {
            error_limit: DETAIL_ERROR_LIMIT,
        }
    }
}

impl AttemptPolicy {
    pub fn classify<F>(
        &self,
        library: &str,
        version: &str,
        accelerator: Result<Evidence, ProbeError>,
        fallback: F,
    ) -> ProbeResult
    where
        F: FnOnce() -> Result<(), ProbeError>,
    {
        let accelerator_error = match accelerator {
            Ok(evidence) => return ProbeResult::accelerated(library, version, evidence.describe()),
            Err(err) => truncate_error(&err.to_string(), self.error_limit),
        };

        match fallback() {
            Ok(()) => ProbeResult::fallback_works(library, version, &accelerator_error),
            Err(_) => ProbeResult::unavailable(library, version, &accelerator_error),
        }
    }
}
