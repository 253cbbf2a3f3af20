//! Session revocation

use std::marker::PhantomData;
use std::sync::Arc;

use crate::domain::entities::Identity;
use crate::errors::DomainResult;
use crate::repositories::IdentityRepository;

/// Clears the persisted credential of an identity
pub struct SessionRevoker<I, R>
where
    I: Identity,
    R: IdentityRepository<I> + ?Sized,
{
    repository: Arc<R>,
    _identity: PhantomData<fn() -> I>,
}

impl<I, R> SessionRevoker<I, R>
where
    I: Identity,
    R: IdentityRepository<I> + ?Sized,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            _identity: PhantomData,
        }
    }

    /// Clear the credential and its issuance time.
    ///
    /// Idempotent: revoking an already-clear session, or one whose identity
    /// no longer exists, succeeds.
    pub async fn revoke(&self, key: &I::Key) -> DomainResult<()> {
        let cleared = self.repository.save_session(key, None, None).await?;
        if cleared {
            tracing::info!(
                domain = %I::DOMAIN,
                key = %key,
                event = "session_revoked",
                "Session credential revoked"
            );
        } else {
            tracing::debug!(
                domain = %I::DOMAIN,
                key = %key,
                event = "session_revoke_noop",
                "No identity to revoke"
            );
        }
        Ok(())
    }
}
