//! Traits for code issuance, storage, and delivery

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::entities::CodeType;
use crate::errors::DomainError;

/// Ephemeral key/value store holding at most one live code per key
#[async_trait]
pub trait CodeStore: Send + Sync {
    /// Store `code` under `key`, replacing any previous value and resetting its TTL
    async fn put(&self, key: &str, code: &str, ttl: Duration) -> Result<(), DomainError>;

    /// Current code for `key`; `None` once the TTL has elapsed.
    ///
    /// Reading does not consume the code.
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;
}

/// Producer of fresh verification codes
#[async_trait]
pub trait CodeSource: Send + Sync {
    async fn issue(&self, length: usize, code_type: CodeType) -> Result<String, DomainError>;
}

/// Where a delivered code ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The caller is expected to return the code in its reply
    Inline,
    /// The code was sent over a side channel and must not be echoed
    OutOfBand,
}

/// Channel carrying an issued code to the user
#[async_trait]
pub trait CodeDelivery: Send + Sync {
    async fn deliver(
        &self,
        phone: &str,
        code: &str,
        ttl: Duration,
    ) -> Result<DeliveryOutcome, DomainError>;
}
