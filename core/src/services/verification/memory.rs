//! In-memory code store with TTL

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use super::traits::CodeStore;
use crate::errors::DomainError;

/// Process-local [`CodeStore`], used in tests and single-node development runs.
///
/// Expiry follows the tokio clock, so paused-time tests can advance past a TTL.
#[derive(Default)]
pub struct MemoryCodeStore {
    entries: RwLock<HashMap<String, (String, Instant)>>,
}

impl MemoryCodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop expired entries, returns how many were removed
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, (_, expires_at)| *expires_at > now);
        before - entries.len()
    }
}

#[async_trait]
impl CodeStore for MemoryCodeStore {
    async fn put(&self, key: &str, code: &str, ttl: Duration) -> Result<(), DomainError> {
        let expires_at = Instant::now() + ttl;
        self.entries
            .write()
            .await
            .insert(key.to_string(), (code.to_string(), expires_at));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .filter(|(_, expires_at)| *expires_at > Instant::now())
            .map(|(code, _)| code.clone()))
    }
}
