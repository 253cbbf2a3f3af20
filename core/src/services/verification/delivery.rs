//! Delivery channel returning the code to the caller

use async_trait::async_trait;
use std::time::Duration;

use super::traits::{CodeDelivery, DeliveryOutcome};
use crate::errors::DomainError;

/// Returns the code in the issue-code reply; suitable for development and
/// for clients that relay the code themselves
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineDelivery;

#[async_trait]
impl CodeDelivery for InlineDelivery {
    async fn deliver(
        &self,
        _phone: &str,
        _code: &str,
        _ttl: Duration,
    ) -> Result<DeliveryOutcome, DomainError> {
        Ok(DeliveryOutcome::Inline)
    }
}
