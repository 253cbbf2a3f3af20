//! Shared error envelope for non-business failures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error body returned for unauthorized, unavailable and internal failures.
///
/// Business failures (bad phone number, wrong code) travel inside a
/// [`Reply`](crate::types::Reply) instead, so clients can tell "show a
/// message" apart from "retry later".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// HTTP status code mirrored into the body
    pub code: u16,

    /// Stable machine-readable reason
    pub reason: String,

    /// Human-readable error message (localized)
    pub message: String,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(code: u16, reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            reason: reason.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Common error codes used across the application
pub mod error_codes {
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const SERVICE_UNAVAILABLE: &str = "SERVICE_UNAVAILABLE";
    pub const DEADLINE_EXCEEDED: &str = "DEADLINE_EXCEEDED";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
    pub const UPSTREAM_ERROR: &str = "UPSTREAM_ERROR";
    pub const PHONE_INVALID: &str = "INVALID_PHONE_FORMAT";
    pub const CODE_EMPTY: &str = "EMPTY_VERIFICATION_CODE";
    pub const CODE_MISMATCH: &str = "VERIFICATION_CODE_MISMATCH";
    pub const CODE_REQUEST_INVALID: &str = "INVALID_CODE_REQUEST";
    pub const TOKEN_MISSING: &str = "TOKEN_MISSING";
    pub const TOKEN_INVALID: &str = "TOKEN_INVALID";
    pub const TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";
    pub const CLAIMS_NOT_FOUND: &str = "CLAIMS_NOT_FOUND";
    pub const IDENTITY_NOT_FOUND: &str = "IDENTITY_NOT_FOUND";
    pub const TOKEN_UPDATED: &str = "TOKEN_UPDATED";
    pub const TOKEN_SIGNING_FAILED: &str = "TOKEN_SIGNING_FAILED";
}
