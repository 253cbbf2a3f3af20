//! Main verification service implementation

use chrono::Utc;
use constant_time_eq::constant_time_eq;
use std::sync::Arc;

use dj_shared::phone::{is_valid_mobile, mask_phone_number};

use crate::domain::entities::IssuedCode;
use crate::errors::{AuthError, DomainResult};

use super::config::VerificationServiceConfig;
use super::traits::{CodeDelivery, CodeSource, CodeStore, DeliveryOutcome};

/// Verification service for one identity domain
pub struct VerificationService<S, C, D>
where
    S: CodeSource + ?Sized,
    C: CodeStore + ?Sized,
    D: CodeDelivery + ?Sized,
{
    /// Producer of fresh codes
    source: Arc<S>,
    /// Ephemeral code storage
    store: Arc<C>,
    /// Channel carrying codes to users
    delivery: Arc<D>,
    config: VerificationServiceConfig,
}

impl<S, C, D> VerificationService<S, C, D>
where
    S: CodeSource + ?Sized,
    C: CodeStore + ?Sized,
    D: CodeDelivery + ?Sized,
{
    pub fn new(
        source: Arc<S>,
        store: Arc<C>,
        delivery: Arc<D>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            source,
            store,
            delivery,
            config,
        }
    }

    pub fn config(&self) -> &VerificationServiceConfig {
        &self.config
    }

    /// Issue a new code for a phone number
    ///
    /// This method:
    /// 1. Validates the phone number format
    /// 2. Obtains a code from the code source
    /// 3. Stores it under the phone's key, replacing any outstanding code
    /// 4. Hands it to the delivery channel
    ///
    /// The returned [`IssuedCode`] carries the code only for inline delivery.
    pub async fn issue_code(&self, phone: &str) -> DomainResult<IssuedCode> {
        if !is_valid_mobile(phone) {
            tracing::info!(
                phone = %mask_phone_number(phone),
                event = "code_rejected_phone",
                "Rejected code request for malformed phone number"
            );
            return Err(AuthError::InvalidPhoneFormat {
                phone: phone.to_string(),
            }
            .into());
        }

        let code = self
            .source
            .issue(self.config.code_length, self.config.code_type)
            .await?;

        self.store
            .put(&self.config.store_key(phone), &code, self.config.code_ttl)
            .await?;
        let issued_at = Utc::now();

        let outcome = self
            .delivery
            .deliver(phone, &code, self.config.code_ttl)
            .await?;

        tracing::info!(
            phone = %mask_phone_number(phone),
            ttl_seconds = self.config.code_ttl.as_secs(),
            inline = outcome == DeliveryOutcome::Inline,
            event = "code_issued",
            "Verification code issued"
        );

        Ok(IssuedCode {
            code: match outcome {
                DeliveryOutcome::Inline => Some(code),
                DeliveryOutcome::OutOfBand => None,
            },
            issued_at,
            ttl_seconds: self.config.code_ttl.as_secs(),
        })
    }

    /// Check a presented code against the outstanding one.
    ///
    /// The stored code is left in place; it stays readable until it expires
    /// or a newer code replaces it.
    pub async fn check_code(&self, phone: &str, presented: &str) -> DomainResult<()> {
        let presented = presented.trim();
        if presented.is_empty() {
            return Err(AuthError::EmptyVerificationCode.into());
        }

        let stored = self.store.get(&self.config.store_key(phone)).await?;
        let matched = stored
            .as_deref()
            .map(|code| constant_time_eq(code.as_bytes(), presented.as_bytes()))
            .unwrap_or(false);

        if !matched {
            tracing::info!(
                phone = %mask_phone_number(phone),
                outstanding = stored.is_some(),
                event = "code_mismatch",
                "Verification code did not match"
            );
            return Err(AuthError::VerificationCodeMismatch.into());
        }

        tracing::debug!(
            phone = %mask_phone_number(phone),
            event = "code_matched",
            "Verification code matched"
        );
        Ok(())
    }
}
