//! Session credential issuance

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::marker::PhantomData;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Identity, IssuedSession, SessionClaims};
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::IdentityRepository;

use super::config::SessionConfig;

/// Mints HS256 session credentials and stores them on the identity record
pub struct SessionIssuer<I, R>
where
    I: Identity,
    R: IdentityRepository<I> + ?Sized,
{
    repository: Arc<R>,
    config: SessionConfig,
    encoding_key: EncodingKey,
    _identity: PhantomData<fn() -> I>,
}

impl<I, R> SessionIssuer<I, R>
where
    I: Identity,
    R: IdentityRepository<I> + ?Sized,
{
    pub fn new(repository: Arc<R>, config: SessionConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        Self {
            repository,
            config,
            encoding_key,
            _identity: PhantomData,
        }
    }

    pub fn ttl_seconds(&self) -> i64 {
        self.config.ttl_seconds
    }

    /// Issue a credential for `identity` and persist it as the authoritative one.
    ///
    /// Any previously issued credential of this identity stops validating as
    /// soon as the new one is persisted. Concurrent issuances are not
    /// serialized: whichever write lands last wins.
    pub async fn issue(&self, identity: &I) -> DomainResult<IssuedSession> {
        let now = Utc::now();
        let claims = SessionClaims {
            iss: self.config.issuer.clone(),
            sub: self.config.subject.clone(),
            aud: self.config.audience.clone(),
            iat: now.timestamp(),
            exp: now.timestamp() + self.config.ttl_seconds,
            jti: identity.key(),
            sid: Uuid::new_v4().to_string(),
        };

        let token = self.encode_jwt(&claims)?;

        let saved = self
            .repository
            .save_session(&claims.jti, Some(&token), Some(now))
            .await?;
        if !saved {
            tracing::warn!(
                domain = %I::DOMAIN,
                key = %claims.jti,
                event = "session_persist_missing",
                "Identity vanished before its session could be stored"
            );
            return Err(DomainError::NotFound {
                resource: format!("{} {}", I::DOMAIN, claims.jti),
            });
        }

        tracing::info!(
            domain = %I::DOMAIN,
            key = %claims.jti,
            event = "session_issued",
            "Session credential issued"
        );

        Ok(IssuedSession {
            token,
            issued_at: now,
            ttl_seconds: self.config.ttl_seconds,
        })
    }

    fn encode_jwt(&self, claims: &SessionClaims<I::Key>) -> DomainResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            DomainError::Token(TokenError::SigningFailed {
                message: e.to_string(),
            })
        })
    }
}
