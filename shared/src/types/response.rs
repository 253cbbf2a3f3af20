//! Business reply envelope

use serde::{Deserialize, Serialize};

/// Reply code for a successful business operation
pub const REPLY_OK: i32 = 0;

/// Reply code for a failed business operation
pub const REPLY_FAILED: i32 = 1;

/// Envelope for every business reply.
///
/// The payload is flattened next to `code` and `message`, giving bodies such as
/// `{"code":0,"message":"SUCCESS","token":"…","token_life":2592000}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply<T> {
    /// `0` on success, `1` on business failure
    pub code: i32,

    /// Human-readable message (localized)
    pub message: String,

    /// Stable machine-readable reason, only set on failure
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reason: Option<String>,

    #[serde(flatten, skip_serializing_if = "Option::is_none", default)]
    pub data: Option<T>,
}

impl<T> Reply<T> {
    /// Successful reply carrying a payload
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            code: REPLY_OK,
            message: message.into(),
            reason: None,
            data: Some(data),
        }
    }

    /// Business failure with a machine reason
    pub fn failure(reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: REPLY_FAILED,
            message: message.into(),
            reason: Some(reason.into()),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == REPLY_OK
    }
}

impl Reply<()> {
    /// Successful reply without a payload
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            code: REPLY_OK,
            message: message.into(),
            reason: None,
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Payload {
        token: String,
    }

    #[test]
    fn test_success_flattens_payload() {
        let reply = Reply::success("SUCCESS", Payload { token: "abc".into() });
        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value, json!({"code": 0, "message": "SUCCESS", "token": "abc"}));
    }

    #[test]
    fn test_failure_carries_reason() {
        let reply: Reply<Payload> = Reply::failure("VERIFICATION_CODE_MISMATCH", "verify code mismatch");
        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value["code"], 1);
        assert_eq!(value["reason"], "VERIFICATION_CODE_MISMATCH");
        assert!(value.get("token").is_none());
        assert!(!reply.is_success());
    }
}
