//! Share and snapshot error types

use nakshatra_domain::DomainError;
use thiserror::Error;

/// Errors raised while decoding shared or persisted data
///
/// Every variant means the input is unusable; callers discard it and
/// start fresh rather than coercing a partial value.
#[derive(Error, Debug)]
pub enum ShareError {
    /// Token is not valid URL-safe base64
    #[error("Share token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Payload is not the expected JSON
    #[error("Malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Payload parsed but breaks a domain rule
    #[error("Invalid shared data: {0}")]
    Invalid(#[from] DomainError),

    /// Snapshot written by an incompatible version
    #[error("Unsupported snapshot version {found:?} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the snapshot, if any
        found: Option<u64>,
        /// Version this build writes
        expected: u32,
    },
}

impl ShareError {
    /// Whether the failure is a legacy snapshot rather than corruption
    pub fn is_legacy(&self) -> bool {
        matches!(self, ShareError::UnsupportedVersion { .. })
    }
}
