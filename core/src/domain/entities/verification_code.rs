//! Verification code kinds and issuance result.

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DIGITS: &str = "0123456789";
pub const LOWERCASE_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const ALPHANUMERIC: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// Alphabet requested from the code issuer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CodeType {
    /// Treated as digits
    Default = 0,
    Digit = 1,
    Letter = 2,
    Mixed = 3,
}

impl CodeType {
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(CodeType::Default),
            1 => Some(CodeType::Digit),
            2 => Some(CodeType::Letter),
            3 => Some(CodeType::Mixed),
            _ => None,
        }
    }

    pub fn alphabet(&self) -> &'static str {
        match self {
            CodeType::Default | CodeType::Digit => DIGITS,
            CodeType::Letter => LOWERCASE_LETTERS,
            CodeType::Mixed => ALPHANUMERIC,
        }
    }

    pub fn as_i32(&self) -> i32 {
        *self as i32
    }
}

/// Result of issuing a verification code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuedCode {
    /// The code itself, only when the delivery channel hands it back to the caller
    pub code: Option<String>,

    pub issued_at: DateTime<Utc>,

    pub ttl_seconds: u64,
}
