//! Main authentication service implementation

use std::sync::Arc;

use dj_shared::phone::{is_valid_mobile, mask_phone_number};

use crate::domain::entities::{Identity, IssuedCode, IssuedSession};
use crate::errors::{AuthError, DomainResult};
use crate::repositories::IdentityRepository;
use crate::services::identity::IdentityResolver;
use crate::services::session::{SessionIssuer, SessionRevoker, SessionValidator};
use crate::services::verification::{CodeDelivery, CodeSource, CodeStore, VerificationService};

use super::config::AuthServiceConfig;

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome<I> {
    pub identity: I,
    pub session: IssuedSession,
    /// Whether the identity was registered by this login
    pub created: bool,
}

/// Authentication service for one identity domain
pub struct AuthService<I, R, S, C, D>
where
    I: Identity,
    R: IdentityRepository<I> + ?Sized,
    S: CodeSource + ?Sized,
    C: CodeStore + ?Sized,
    D: CodeDelivery + ?Sized,
{
    repository: Arc<R>,
    verification: VerificationService<S, C, D>,
    resolver: IdentityResolver<I, R>,
    issuer: SessionIssuer<I, R>,
    revoker: SessionRevoker<I, R>,
    config: AuthServiceConfig,
}

impl<I, R, S, C, D> AuthService<I, R, S, C, D>
where
    I: Identity,
    R: IdentityRepository<I> + ?Sized,
    S: CodeSource + ?Sized,
    C: CodeStore + ?Sized,
    D: CodeDelivery + ?Sized,
{
    pub fn new(
        repository: Arc<R>,
        source: Arc<S>,
        store: Arc<C>,
        delivery: Arc<D>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            verification: VerificationService::new(
                source,
                store,
                delivery,
                config.verification.clone(),
            ),
            resolver: IdentityResolver::new(repository.clone()),
            issuer: SessionIssuer::new(repository.clone(), config.session.clone()),
            revoker: SessionRevoker::new(repository.clone()),
            repository,
            config,
        }
    }

    /// Validator sharing this service's repository and signing secret
    pub fn session_validator(&self) -> SessionValidator<I, R> {
        SessionValidator::new(self.repository.clone(), &self.config.session)
    }

    pub fn session_ttl_seconds(&self) -> i64 {
        self.issuer.ttl_seconds()
    }

    /// Issue a verification code for `phone`
    pub async fn send_code(&self, phone: &str) -> DomainResult<IssuedCode> {
        self.verification.issue_code(phone).await
    }

    /// Exchange phone and code for a session credential.
    ///
    /// Code check, resolve-or-create, and issuance are separate storage
    /// operations with no lock around them. Two concurrent logins for one
    /// phone both succeed and the later issuance becomes authoritative.
    pub async fn login(&self, phone: &str, code: &str) -> DomainResult<LoginOutcome<I>> {
        self.verification.check_code(phone, code).await?;

        let (identity, created) = self.resolver.resolve_or_create(phone).await?;
        let session = self.issuer.issue(&identity).await?;

        tracing::info!(
            domain = %I::DOMAIN,
            phone = %mask_phone_number(phone),
            created = created,
            event = "login_succeeded",
            "Login succeeded"
        );

        Ok(LoginOutcome {
            identity,
            session,
            created,
        })
    }

    /// Revoke the session of an authenticated identity; repeated calls succeed
    pub async fn logout(&self, key: &I::Key) -> DomainResult<()> {
        self.revoker.revoke(key).await
    }

    /// Register a phone number without logging in.
    ///
    /// Returns the existing record when the phone is already registered.
    pub async fn submit_phone(&self, phone: &str) -> DomainResult<(I, bool)> {
        if !is_valid_mobile(phone) {
            return Err(AuthError::InvalidPhoneFormat {
                phone: phone.to_string(),
            }
            .into());
        }
        self.resolver.resolve_or_create(phone).await
    }
}
