//! Configuration for the verification service

use std::time::Duration;

use dj_shared::CodePolicy;

use crate::domain::entities::CodeType;

/// Configuration for the verification service of one identity domain
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Prefix of the store key; the phone number is appended
    pub key_prefix: String,
    /// Number of characters per code
    pub code_length: usize,
    /// Alphabet requested from the code source
    pub code_type: CodeType,
    /// Lifetime of a stored code
    pub code_ttl: Duration,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self::customer()
    }
}

impl VerificationServiceConfig {
    pub fn customer() -> Self {
        Self::from_policy(&CodePolicy::customer())
    }

    pub fn driver() -> Self {
        Self::from_policy(&CodePolicy::driver())
    }

    /// Unknown code types fall back to digits
    pub fn from_policy(policy: &CodePolicy) -> Self {
        Self {
            key_prefix: policy.key_prefix.clone(),
            code_length: policy.length,
            code_type: CodeType::from_i32(policy.code_type).unwrap_or(CodeType::Digit),
            code_ttl: Duration::from_secs(policy.ttl_seconds),
        }
    }

    pub fn store_key(&self, phone: &str) -> String {
        format!("{}{}", self.key_prefix, phone)
    }
}
