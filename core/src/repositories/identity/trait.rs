//! Identity repository trait defining the interface for customer and driver persistence.
//!
//! One trait serves both identity domains; the domain is selected by the
//! entity type. Implementations must report absence as `Ok(None)` so that a
//! missing record is never confused with a storage failure.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::Identity;
use crate::errors::DomainError;

/// Repository trait for identity persistence operations
#[async_trait]
pub trait IdentityRepository<I: Identity>: Send + Sync {
    /// Find an identity by its phone number
    ///
    /// # Returns
    /// * `Ok(Some(identity))` - Identity found
    /// * `Ok(None)` - No identity registered for this phone
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_phone(&self, phone: &str) -> Result<Option<I>, DomainError>;

    /// Find an identity by the key embedded in its session credentials
    async fn find_by_key(&self, key: &I::Key) -> Result<Option<I>, DomainError>;

    /// Create a minimal record for a phone number.
    ///
    /// If a concurrent caller created the record first, the existing record
    /// is returned instead of a duplicate.
    async fn create(&self, phone: &str) -> Result<I, DomainError>;

    /// Overwrite the persisted session credential and its issuance time.
    ///
    /// Passing `None` for both clears the session.
    ///
    /// # Returns
    /// * `Ok(true)` - A record was updated
    /// * `Ok(false)` - No record exists for the key
    async fn save_session(
        &self,
        key: &I::Key,
        token: Option<&str>,
        issued_at: Option<DateTime<Utc>>,
    ) -> Result<bool, DomainError>;
}
