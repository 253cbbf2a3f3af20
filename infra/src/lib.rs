//! # Infrastructure Layer
//!
//! Concrete implementations of the `dj_core` storage and service traits:
//! - **Cache**: Redis client and the Redis-backed verification code store
//! - **Database**: MySQL identity and price rule repositories using SQLx
//! - **Services**: HTTP clients for the code service, the SMS gateway, and
//!   the AMap driving-direction API
//! - **Settings**: layered loading of [`dj_shared::AppConfig`]
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)
//! - `redis-cache`: Enable Redis caching support (default)

use dj_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Cache module - Redis client and code store
pub mod cache;

/// Services module - peer and external HTTP clients
pub mod services;

/// Configuration loading
pub mod settings;

pub use settings::load_config;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Peer service answered with a failure
    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl From<::config::ConfigError> for InfrastructureError {
    fn from(err: ::config::ConfigError) -> Self {
        InfrastructureError::Config(err.to_string())
    }
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Database(e) => DomainError::storage(format!("database: {}", e)),
            InfrastructureError::Cache(e) => DomainError::storage(format!("cache: {}", e)),
            InfrastructureError::Http(e) => DomainError::upstream(e.to_string()),
            InfrastructureError::Upstream(message) => DomainError::upstream(message),
            InfrastructureError::Config(message) => DomainError::Internal { message },
        }
    }
}
