//! In-memory identity repository for tests and local runs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::Identity;
use crate::errors::DomainError;

use super::trait_::IdentityRepository;

/// Mock identity repository keyed by primary id
pub struct MockIdentityRepository<I: Identity> {
    records: Arc<RwLock<HashMap<u64, I>>>,
    next_id: AtomicU64,
    fail_storage: AtomicBool,
}

impl<I: Identity> MockIdentityRepository<I> {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicU64::new(1),
            fail_storage: AtomicBool::new(false),
        }
    }

    /// Make every subsequent call fail with a storage error
    pub fn set_storage_failure(&self, fail: bool) {
        self.fail_storage.store(fail, Ordering::SeqCst);
    }

    /// Number of stored records
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    fn check_storage(&self) -> Result<(), DomainError> {
        if self.fail_storage.load(Ordering::SeqCst) {
            return Err(DomainError::storage("mock storage unavailable"));
        }
        Ok(())
    }
}

impl<I: Identity> Default for MockIdentityRepository<I> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<I: Identity> IdentityRepository<I> for MockIdentityRepository<I> {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<I>, DomainError> {
        self.check_storage()?;
        let records = self.records.read().await;
        Ok(records.values().find(|r| r.telephone() == phone).cloned())
    }

    async fn find_by_key(&self, key: &I::Key) -> Result<Option<I>, DomainError> {
        self.check_storage()?;
        let records = self.records.read().await;
        Ok(records.values().find(|r| &r.key() == key).cloned())
    }

    async fn create(&self, phone: &str) -> Result<I, DomainError> {
        self.check_storage()?;
        let mut records = self.records.write().await;

        // Unique phone, mirrors the unique index of the real tables
        if let Some(existing) = records.values().find(|r| r.telephone() == phone) {
            return Ok(existing.clone());
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = I::register(id, phone, Utc::now());
        records.insert(id, record.clone());
        Ok(record)
    }

    async fn save_session(
        &self,
        key: &I::Key,
        token: Option<&str>,
        issued_at: Option<DateTime<Utc>>,
    ) -> Result<bool, DomainError> {
        self.check_storage()?;
        let mut records = self.records.write().await;
        match records.values_mut().find(|r| &r.key() == key) {
            Some(record) => {
                record.set_session(token.map(str::to_string), issued_at);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
