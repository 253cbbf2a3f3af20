//! Configuration for the authentication service

use dj_shared::{CodePolicy, JwtConfig};

use crate::services::session::SessionConfig;
use crate::services::verification::VerificationServiceConfig;

/// Code and session settings of one identity domain
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    pub verification: VerificationServiceConfig,
    pub session: SessionConfig,
}

impl AuthServiceConfig {
    pub fn customer() -> Self {
        Self {
            verification: VerificationServiceConfig::customer(),
            session: SessionConfig::customer(),
        }
    }

    pub fn driver() -> Self {
        Self {
            verification: VerificationServiceConfig::driver(),
            session: SessionConfig::driver(),
        }
    }

    pub fn from_parts(policy: &CodePolicy, jwt: &JwtConfig) -> Self {
        Self {
            verification: VerificationServiceConfig::from_policy(policy),
            session: SessionConfig::from(jwt),
        }
    }
}
