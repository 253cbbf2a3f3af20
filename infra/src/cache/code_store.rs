//! Redis-backed verification code store

use async_trait::async_trait;
use std::time::Duration;

use dj_core::errors::DomainError;
use dj_core::services::verification::CodeStore;

use super::RedisClient;

/// Stores codes as plain string values with a Redis-side TTL
#[derive(Clone)]
pub struct RedisCodeStore {
    client: RedisClient,
}

impl RedisCodeStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CodeStore for RedisCodeStore {
    async fn put(&self, key: &str, code: &str, ttl: Duration) -> Result<(), DomainError> {
        // SETEX rejects a zero expiry
        let seconds = ttl.as_secs().max(1);
        self.client
            .set_with_expiry(key, code, seconds)
            .await
            .map_err(DomainError::from)
    }

    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.client.get(key).await.map_err(DomainError::from)
    }
}
