//! Verification code issuance policy

use serde::{Deserialize, Serialize};

/// How an issued code reaches the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    /// Code is returned in the issue-code reply
    #[default]
    Response,
    /// Code is posted to an SMS gateway and withheld from the reply
    SmsGateway,
}

/// Code shape and lifetime for one identity domain
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CodePolicy {
    /// Prefix of the code store key, followed by the phone number
    pub key_prefix: String,

    /// Number of characters in a code
    pub length: usize,

    /// Code alphabet: 0 default, 1 digits, 2 lowercase letters, 3 mixed
    pub code_type: i32,

    /// Lifetime of a stored code in seconds
    pub ttl_seconds: u64,
}

impl CodePolicy {
    pub fn customer() -> Self {
        Self {
            key_prefix: "CVC:".to_string(),
            length: 6,
            code_type: 2,
            ttl_seconds: 60,
        }
    }

    pub fn driver() -> Self {
        Self {
            key_prefix: "DVC:".to_string(),
            length: 6,
            code_type: 1,
            ttl_seconds: 60,
        }
    }
}

/// Verification code configuration for both identity domains
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    #[serde(default = "CodePolicy::customer")]
    pub customer: CodePolicy,

    #[serde(default = "CodePolicy::driver")]
    pub driver: CodePolicy,

    #[serde(default)]
    pub delivery: DeliveryMode,

    /// Endpoint used when `delivery` is `sms_gateway`
    #[serde(default)]
    pub sms_gateway_url: Option<String>,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            customer: CodePolicy::customer(),
            driver: CodePolicy::driver(),
            delivery: DeliveryMode::default(),
            sms_gateway_url: None,
        }
    }
}

impl VerificationConfig {
    pub fn validate(&self) -> Result<(), String> {
        for (domain, policy) in [("customer", &self.customer), ("driver", &self.driver)] {
            if policy.length == 0 {
                return Err(format!("{} code length must be positive", domain));
            }
            if policy.ttl_seconds == 0 {
                return Err(format!("{} code ttl must be positive", domain));
            }
            if !(0..=3).contains(&policy.code_type) {
                return Err(format!("{} code type {} is unknown", domain, policy.code_type));
            }
        }
        if self.customer.key_prefix == self.driver.key_prefix {
            return Err("customer and driver code keys must not share a prefix".to_string());
        }
        if self.delivery == DeliveryMode::SmsGateway && self.sms_gateway_url.is_none() {
            return Err("sms_gateway delivery requires sms_gateway_url".to_string());
        }
        Ok(())
    }
}
