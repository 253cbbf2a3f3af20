//! Session credential signing configuration

use serde::{Deserialize, Serialize};

const DEFAULT_CUSTOMER_SECRET: &str = "yourSecretKey";
const DEFAULT_DRIVER_SECRET: &str = "driver secret key";

/// JWT settings for one identity domain
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct JwtConfig {
    /// HMAC secret used to sign and verify tokens
    pub secret: String,

    /// Token lifetime in seconds
    pub token_ttl_seconds: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT subject claim, describes the purpose of the token
    pub subject: String,

    /// JWT audience claim
    pub audience: Vec<String>,
}

impl JwtConfig {
    /// Customer session defaults
    pub fn customer() -> Self {
        Self {
            secret: DEFAULT_CUSTOMER_SECRET.to_string(),
            token_ttl_seconds: 2 * 30 * 24 * 3600,
            issuer: "LaoMaDJ".to_string(),
            subject: "customer-authentication".to_string(),
            audience: vec!["customer".to_string(), "other".to_string()],
        }
    }

    /// Driver session defaults
    pub fn driver() -> Self {
        Self {
            secret: DEFAULT_DRIVER_SECRET.to_string(),
            token_ttl_seconds: 30 * 24 * 3600,
            issuer: "LaomaDJ".to_string(),
            subject: "driver authentication".to_string(),
            audience: vec!["driver".to_string()],
        }
    }

    /// Replace the signing secret
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = secret.into();
        self
    }

    /// Replace the token lifetime
    pub fn with_ttl_seconds(mut self, seconds: i64) -> Self {
        self.token_ttl_seconds = seconds;
        self
    }

    /// Check if using a built-in development secret
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_CUSTOMER_SECRET || self.secret == DEFAULT_DRIVER_SECRET
    }
}

/// Signing configuration for both identity domains
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    #[serde(default = "JwtConfig::customer")]
    pub customer: JwtConfig,

    #[serde(default = "JwtConfig::driver")]
    pub driver: JwtConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            customer: JwtConfig::customer(),
            driver: JwtConfig::driver(),
        }
    }
}

impl AuthConfig {
    /// Customer and driver credentials must never be interchangeable
    pub fn validate(&self) -> Result<(), String> {
        for (domain, jwt) in [("customer", &self.customer), ("driver", &self.driver)] {
            if jwt.secret.is_empty() {
                return Err(format!("{} signing secret must not be empty", domain));
            }
            if jwt.token_ttl_seconds <= 0 {
                return Err(format!("{} token ttl must be positive", domain));
            }
        }
        if self.customer.secret == self.driver.secret {
            return Err("customer and driver must use different signing secrets".to_string());
        }
        Ok(())
    }

    pub fn is_using_default_secrets(&self) -> bool {
        self.customer.is_using_default_secret() || self.driver.is_using_default_secret()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_defaults_differ() {
        let config = AuthConfig::default();
        assert_ne!(config.customer.secret, config.driver.secret);
        assert_ne!(config.customer.issuer, config.driver.issuer);
        assert_eq!(config.customer.token_ttl_seconds, 5_184_000);
        assert_eq!(config.driver.token_ttl_seconds, 2_592_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_shared_secret_rejected() {
        let config = AuthConfig {
            customer: JwtConfig::customer().with_secret("same"),
            driver: JwtConfig::driver().with_secret("same"),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_secret_rejected() {
        let config = AuthConfig {
            customer: JwtConfig::customer().with_secret(""),
            driver: JwtConfig::driver(),
        };
        assert!(config.validate().is_err());
    }
}
