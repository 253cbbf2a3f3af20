//! SMS gateway delivery of verification codes

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

use dj_core::errors::DomainError;
use dj_core::services::verification::{CodeDelivery, DeliveryOutcome};
use dj_shared::phone::mask_phone_number;

use crate::InfrastructureError;

#[derive(Debug, Serialize)]
struct SmsMessage<'a> {
    telephone: &'a str,
    code: &'a str,
    ttl_seconds: u64,
}

/// Posts each code to an HTTP SMS gateway; the code never reaches the API caller
pub struct SmsGatewayDelivery {
    client: reqwest::Client,
    url: String,
}

impl SmsGatewayDelivery {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    async fn send(&self, phone: &str, code: &str, ttl: Duration) -> Result<(), InfrastructureError> {
        let response = self
            .client
            .post(&self.url)
            .json(&SmsMessage {
                telephone: phone,
                code,
                ttl_seconds: ttl.as_secs(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(InfrastructureError::Upstream(format!(
                "SMS gateway answered {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl CodeDelivery for SmsGatewayDelivery {
    async fn deliver(
        &self,
        phone: &str,
        code: &str,
        ttl: Duration,
    ) -> Result<DeliveryOutcome, DomainError> {
        self.send(phone, code, ttl).await.map_err(|e| {
            tracing::warn!(
                phone = %mask_phone_number(phone),
                error = %e,
                "SMS delivery failed"
            );
            DomainError::from(e)
        })?;

        tracing::info!(phone = %mask_phone_number(phone), "Verification code sent by SMS");
        Ok(DeliveryOutcome::OutOfBand)
    }
}
