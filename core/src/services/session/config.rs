//! Configuration for session components

use dj_shared::JwtConfig;

/// Signing constants and secret of one identity domain
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HMAC secret, never shared between domains
    pub secret: String,
    /// Credential lifetime in seconds
    pub ttl_seconds: i64,
    pub issuer: String,
    pub subject: String,
    pub audience: Vec<String>,
}

impl SessionConfig {
    pub fn customer() -> Self {
        Self::from(&JwtConfig::customer())
    }

    pub fn driver() -> Self {
        Self::from(&JwtConfig::driver())
    }
}

impl From<&JwtConfig> for SessionConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            secret: jwt.secret.clone(),
            ttl_seconds: jwt.token_ttl_seconds,
            issuer: jwt.issuer.clone(),
            subject: jwt.subject.clone(),
            audience: jwt.audience.clone(),
        }
    }
}
