//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - Session credential signing per identity domain
//! - `cache` - Redis connection for the verification code store
//! - `database` - MySQL connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration
//! - `upstream` - Peer code service and map provider endpoints
//! - `verification` - Verification code policies and delivery

pub mod auth;
pub mod cache;
pub mod database;
pub mod environment;
pub mod server;
pub mod upstream;
pub mod verification;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig};
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};
pub use upstream::{MapConfig, UpstreamConfig};
pub use verification::{CodePolicy, DeliveryMode, VerificationConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Session signing configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Verification code configuration
    #[serde(default)]
    pub verification: VerificationConfig,

    /// Peer and external service endpoints
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            auth: AuthConfig::default(),
            verification: VerificationConfig::default(),
            upstream: UpstreamConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for a given environment
    pub fn for_environment(env: Environment) -> Self {
        let mut config = Self {
            environment: env,
            logging: LoggingConfig::for_environment(env),
            ..Default::default()
        };
        if env.is_development() {
            config.cors = CorsConfig::development();
        }
        config
    }

    /// Check cross-section invariants before the configuration is used
    pub fn validate(&self) -> Result<(), String> {
        self.auth.validate()?;
        self.verification.validate()?;
        if self.environment.is_production() && self.auth.is_using_default_secrets() {
            return Err("default signing secrets must not be used in production".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_production_rejects_default_secrets() {
        let config = AppConfig::for_environment(Environment::Production);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_development_uses_permissive_cors() {
        let config = AppConfig::for_environment(Environment::Development);
        assert_eq!(config.cors.allowed_origins, vec!["*"]);
    }
}
