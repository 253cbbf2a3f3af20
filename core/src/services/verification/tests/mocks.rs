//! Mock implementations for verification service testing

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::entities::CodeType;
use crate::errors::DomainError;
use crate::services::verification::{CodeDelivery, CodeSource, CodeStore, DeliveryOutcome};

/// Code source returning a scripted sequence of codes
pub struct ScriptedCodeSource {
    codes: Mutex<Vec<String>>,
    pub requests: Mutex<Vec<(usize, CodeType)>>,
}

impl ScriptedCodeSource {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: Mutex::new(codes.iter().rev().map(|c| c.to_string()).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CodeSource for ScriptedCodeSource {
    async fn issue(&self, length: usize, code_type: CodeType) -> Result<String, DomainError> {
        self.requests.lock().unwrap().push((length, code_type));
        self.codes
            .lock()
            .unwrap()
            .pop()
            .ok_or_else(|| DomainError::upstream("code service exhausted"))
    }
}

/// Code store whose every call fails
pub struct FailingCodeStore;

#[async_trait]
impl CodeStore for FailingCodeStore {
    async fn put(&self, _key: &str, _code: &str, _ttl: Duration) -> Result<(), DomainError> {
        Err(DomainError::storage("redis unreachable"))
    }

    async fn get(&self, _key: &str) -> Result<Option<String>, DomainError> {
        Err(DomainError::storage("redis unreachable"))
    }
}

/// Out-of-band delivery recording what it sent
#[derive(Default)]
pub struct RecordingDelivery {
    pub sent: Mutex<Vec<(String, String)>>,
    pub calls: AtomicUsize,
}

#[async_trait]
impl CodeDelivery for RecordingDelivery {
    async fn deliver(
        &self,
        phone: &str,
        code: &str,
        _ttl: Duration,
    ) -> Result<DeliveryOutcome, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sent
            .lock()
            .unwrap()
            .push((phone.to_string(), code.to_string()));
        Ok(DeliveryOutcome::OutOfBand)
    }
}
