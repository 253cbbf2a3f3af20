//! Shared utilities and common types for LaomaDJ server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error and reply envelopes
//! - Utility functions (phone validation, masking)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CacheConfig, CodePolicy, CorsConfig, DatabaseConfig, DeliveryMode,
    Environment, JwtConfig, LoggingConfig, MapConfig, ServerConfig, UpstreamConfig,
    VerificationConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{Language, Reply};
pub use utils::phone;
