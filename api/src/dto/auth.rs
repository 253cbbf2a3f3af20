use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use dj_core::domain::entities::{DriverStatus, IssuedCode, IssuedSession};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// 11-digit mainland mobile number
    #[validate(length(equal = 11))]
    pub telephone: String,

    /// Missing codes are reported by the login flow as empty
    #[serde(default)]
    pub verify_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitPhoneRequest {
    #[validate(length(equal = 11))]
    pub telephone: String,
}

/// Payload of a successful code request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyCodeData {
    /// Only present when codes are delivered inline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_code: Option<String>,
    pub verify_code_time: DateTime<Utc>,
    /// Seconds
    pub verify_code_life: u64,
}

impl From<IssuedCode> for VerifyCodeData {
    fn from(issued: IssuedCode) -> Self {
        Self {
            verify_code: issued.code,
            verify_code_time: issued.issued_at,
            verify_code_life: issued.ttl_seconds,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub token_create_at: DateTime<Utc>,
    /// Seconds
    pub token_life: i64,
}

impl From<IssuedSession> for LoginData {
    fn from(session: IssuedSession) -> Self {
        Self {
            token: session.token,
            token_create_at: session.issued_at,
            token_life: session.ttl_seconds,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitPhoneData {
    pub status: Option<DriverStatus>,
    /// Whether this call registered the number
    pub created: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatePriceData {
    pub price: i64,
    /// Metres
    pub distance: i64,
    /// Seconds
    pub duration: i64,
}
