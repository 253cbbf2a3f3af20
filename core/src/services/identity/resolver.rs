//! Resolve-or-create of identities by phone number

use std::marker::PhantomData;
use std::sync::Arc;

use dj_shared::phone::mask_phone_number;

use crate::domain::entities::Identity;
use crate::errors::DomainResult;
use crate::repositories::IdentityRepository;

/// Maps a phone number to its durable identity record, creating it on first contact
pub struct IdentityResolver<I, R>
where
    I: Identity,
    R: IdentityRepository<I> + ?Sized,
{
    repository: Arc<R>,
    _identity: PhantomData<fn() -> I>,
}

impl<I, R> IdentityResolver<I, R>
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

    /// Look up the identity for `phone`, creating a minimal record if none exists.
    ///
    /// Returns the identity and whether it was created by this call. Storage
    /// failures during lookup are returned as-is; only a clean "not found"
    /// leads to creation.
    pub async fn resolve_or_create(&self, phone: &str) -> DomainResult<(I, bool)> {
        if let Some(identity) = self.repository.find_by_phone(phone).await? {
            return Ok((identity, false));
        }

        let identity = self.repository.create(phone).await?;
        tracing::info!(
            domain = %I::DOMAIN,
            phone = %mask_phone_number(phone),
            key = %identity.key(),
            event = "identity_created",
            "Created identity on first contact"
        );
        Ok((identity, true))
    }
}
