//! Session credential validation

use constant_time_eq::constant_time_eq;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::domain::entities::{Identity, SessionClaims};
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::IdentityRepository;

use super::config::SessionConfig;

/// Admits a presented credential only when it equals the identity's stored one
pub struct SessionValidator<I, R>
where
    I: Identity,
    R: IdentityRepository<I> + ?Sized,
{
    repository: Arc<R>,
    decoding_key: DecodingKey,
    validation: Validation,
    _identity: PhantomData<fn() -> I>,
}

impl<I, R> SessionValidator<I, R>
where
    I: Identity,
    R: IdentityRepository<I> + ?Sized,
{
    pub fn new(repository: Arc<R>, config: &SessionConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(config.audience.as_slice());
        validation.validate_exp = true;

        Self {
            repository,
            decoding_key,
            validation,
            _identity: PhantomData,
        }
    }

    /// Structural check: signature, expiry, issuer, audience, and key shape
    pub fn decode(&self, token: &str) -> DomainResult<SessionClaims<I::Key>> {
        decode::<SessionClaims<I::Key>>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => DomainError::Token(TokenError::TokenExpired),
                _ => DomainError::Token(TokenError::InvalidToken),
            })
    }

    /// Check a presented credential against the persisted one.
    ///
    /// Steps run in order and the first failure wins:
    /// 1. claims must be present
    /// 2. the identity named by `jti` must be found
    /// 3. its stored credential must equal `presented` byte for byte
    pub async fn validate(
        &self,
        presented: &str,
        claims: Option<&SessionClaims<I::Key>>,
    ) -> DomainResult<I> {
        let claims = claims.ok_or(DomainError::Token(TokenError::ClaimsNotFound))?;
        let key = &claims.jti;

        let identity = match self.repository.find_by_key(key).await {
            Ok(Some(identity)) => identity,
            Ok(None) => return Err(TokenError::IdentityNotFound.into()),
            Err(e) => {
                tracing::warn!(
                    domain = %I::DOMAIN,
                    key = %key,
                    error = %e,
                    event = "session_lookup_failed",
                    "Identity lookup failed during session validation"
                );
                return Err(TokenError::IdentityNotFound.into());
            }
        };

        let current = identity
            .session_token()
            .map(|stored| constant_time_eq(stored.as_bytes(), presented.as_bytes()))
            .unwrap_or(false);
        if !current {
            tracing::info!(
                domain = %I::DOMAIN,
                key = %key,
                event = "session_stale",
                "Rejected credential that is no longer authoritative"
            );
            return Err(TokenError::TokenUpdated.into());
        }

        Ok(identity)
    }
}
