//! Login, logout, and phone submission flows for both domains

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{Customer, Driver, DriverStatus, Identity, Telephone};
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::{IdentityRepository, MockIdentityRepository};
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::verification::{InlineDelivery, MemoryCodeStore};

use super::mocks::SequenceCodeSource;

type Service<I> =
    AuthService<I, MockIdentityRepository<I>, SequenceCodeSource, MemoryCodeStore, InlineDelivery>;

struct Fixture<I: Identity> {
    repo: Arc<MockIdentityRepository<I>>,
    service: Service<I>,
}

fn fixture<I: Identity>(config: AuthServiceConfig, codes: &[&str]) -> Fixture<I> {
    fixture_with_store(config, codes, Arc::new(MemoryCodeStore::new()))
}

fn fixture_with_store<I: Identity>(
    config: AuthServiceConfig,
    codes: &[&str],
    store: Arc<MemoryCodeStore>,
) -> Fixture<I> {
    let repo = Arc::new(MockIdentityRepository::<I>::new());
    let service = AuthService::new(
        repo.clone(),
        Arc::new(SequenceCodeSource::new(codes)),
        store,
        Arc::new(InlineDelivery),
        config,
    );
    Fixture { repo, service }
}

fn customer_fixture(codes: &[&str]) -> Fixture<Customer> {
    fixture(AuthServiceConfig::customer(), codes)
}

fn driver_fixture(codes: &[&str]) -> Fixture<Driver> {
    fixture(AuthServiceConfig::driver(), codes)
}

async fn admit<I: Identity>(f: &Fixture<I>, token: &str) -> Result<I, DomainError> {
    let validator = f.service.session_validator();
    let claims = validator.decode(token)?;
    validator.validate(token, Some(&claims)).await
}

#[tokio::test]
async fn test_customer_first_login_registers_and_admits() {
    let f = customer_fixture(&["483920"]);

    let issued = f.service.send_code("13800138000").await.unwrap();
    assert_eq!(issued.code.as_deref(), Some("483920"));
    assert_eq!(issued.ttl_seconds, 60);

    let outcome = f.service.login("13800138000", "483920").await.unwrap();
    assert!(outcome.created);
    assert_eq!(outcome.identity.telephone(), "13800138000");
    assert_eq!(f.repo.count().await, 1);

    let admitted = admit(&f, &outcome.session.token).await.unwrap();
    assert_eq!(admitted.id, outcome.identity.id);
}

#[tokio::test]
async fn test_wrong_code_creates_no_identity() {
    let f = customer_fixture(&["483920"]);
    f.service.send_code("13800138000").await.unwrap();

    let result = f.service.login("13800138000", "000000").await;

    match result.unwrap_err() {
        DomainError::Auth(AuthError::VerificationCodeMismatch) => {}
        other => panic!("Expected VerificationCodeMismatch, got {:?}", other),
    }
    assert_eq!(f.repo.count().await, 0);
}

#[tokio::test]
async fn test_login_without_outstanding_code_fails() {
    let f = customer_fixture(&["483920"]);

    let result = f.service.login("13800138000", "483920").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::VerificationCodeMismatch))
    ));
}

#[tokio::test]
async fn test_empty_code_rejected_before_lookup() {
    let f = customer_fixture(&["483920"]);
    f.service.send_code("13800138000").await.unwrap();

    let result = f.service.login("13800138000", "   ").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::EmptyVerificationCode))
    ));
}

#[tokio::test]
async fn test_relogin_supersedes_previous_session() {
    let f = customer_fixture(&["111111", "222222"]);

    f.service.send_code("13800138000").await.unwrap();
    let first = f.service.login("13800138000", "111111").await.unwrap();

    f.service.send_code("13800138000").await.unwrap();
    let second = f.service.login("13800138000", "222222").await.unwrap();

    assert!(!second.created);
    assert_eq!(first.identity.id, second.identity.id);
    assert_ne!(first.session.token, second.session.token);

    assert!(matches!(
        admit(&f, &first.session.token).await,
        Err(DomainError::Token(TokenError::TokenUpdated))
    ));
    assert!(admit(&f, &second.session.token).await.is_ok());
}

#[tokio::test]
async fn test_code_is_reusable_until_expiry() {
    let f = customer_fixture(&["483920"]);
    f.service.send_code("13800138000").await.unwrap();

    let first = f.service.login("13800138000", "483920").await.unwrap();
    let second = f.service.login("13800138000", "483920").await.unwrap();

    assert_eq!(first.identity.id, second.identity.id);
    assert!(admit(&f, &second.session.token).await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn test_expired_code_rejected() {
    let f = customer_fixture(&["483920"]);
    f.service.send_code("13800138000").await.unwrap();

    tokio::time::advance(Duration::from_secs(61)).await;

    assert!(matches!(
        f.service.login("13800138000", "483920").await,
        Err(DomainError::Auth(AuthError::VerificationCodeMismatch))
    ));
}

#[tokio::test]
async fn test_logout_revokes_and_is_idempotent() {
    let f = customer_fixture(&["483920"]);
    f.service.send_code("13800138000").await.unwrap();
    let outcome = f.service.login("13800138000", "483920").await.unwrap();

    f.service.logout(&outcome.identity.id).await.unwrap();
    f.service.logout(&outcome.identity.id).await.unwrap();

    assert!(matches!(
        admit(&f, &outcome.session.token).await,
        Err(DomainError::Token(TokenError::TokenUpdated))
    ));
    let stored = f.repo.find_by_phone("13800138000").await.unwrap().unwrap();
    assert!(stored.session_token().is_none());
}

#[tokio::test]
async fn test_concurrent_logins_both_succeed_last_write_wins() {
    let f = Arc::new(customer_fixture(&["483920"]));
    f.service.send_code("13800138000").await.unwrap();

    let a = {
        let f = f.clone();
        tokio::spawn(async move { f.service.login("13800138000", "483920").await })
    };
    let b = {
        let f = f.clone();
        tokio::spawn(async move { f.service.login("13800138000", "483920").await })
    };
    let a = a.await.unwrap().unwrap();
    let b = b.await.unwrap().unwrap();

    assert_eq!(a.identity.id, b.identity.id);
    assert_eq!(f.repo.count().await, 1);

    let stored = f.repo.find_by_phone("13800138000").await.unwrap().unwrap();
    let current = stored.session_token().unwrap().to_string();
    assert!(current == a.session.token || current == b.session.token);

    let admitted = [&a.session.token, &b.session.token]
        .iter()
        .filter(|t| t.as_str() == current)
        .count();
    assert_eq!(admitted, 1);
}

#[tokio::test]
async fn test_driver_login_keyed_by_phone() {
    let f = driver_fixture(&["739104"]);
    f.service.send_code("13900139000").await.unwrap();

    let outcome = f.service.login("13900139000", "739104").await.unwrap();
    assert_eq!(outcome.identity.key(), Telephone("13900139000".to_string()));
    assert_eq!(outcome.session.ttl_seconds, 2_592_000);

    let claims = f.service.session_validator().decode(&outcome.session.token).unwrap();
    assert_eq!(claims.jti.as_str(), "13900139000");
}

#[tokio::test]
async fn test_customer_credential_rejected_by_driver_domain() {
    let customers = customer_fixture(&["483920"]);
    let drivers = driver_fixture(&["739104"]);

    customers.service.send_code("13800138000").await.unwrap();
    let outcome = customers.service.login("13800138000", "483920").await.unwrap();

    let result = drivers.service.session_validator().decode(&outcome.session.token);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidToken))
    ));
}

#[tokio::test]
async fn test_codes_are_scoped_per_domain() {
    let store = Arc::new(MemoryCodeStore::new());
    let customers: Fixture<Customer> =
        fixture_with_store(AuthServiceConfig::customer(), &["483920"], store.clone());
    let drivers: Fixture<Driver> =
        fixture_with_store(AuthServiceConfig::driver(), &["739104"], store);

    customers.service.send_code("13800138000").await.unwrap();
    drivers.service.send_code("13800138000").await.unwrap();

    assert!(customers.service.login("13800138000", "739104").await.is_err());
    assert!(drivers.service.login("13800138000", "739104").await.is_ok());
}

#[tokio::test]
async fn test_submit_phone_registers_stopped_driver() {
    let f = driver_fixture(&["739104"]);

    let (driver, created) = f.service.submit_phone("13900139000").await.unwrap();
    assert!(created);
    assert_eq!(driver.status, Some(DriverStatus::Stop));
    assert!(driver.session_token().is_none());

    let (again, created) = f.service.submit_phone("13900139000").await.unwrap();
    assert!(!created);
    assert_eq!(again.id, driver.id);
}

#[tokio::test]
async fn test_submit_phone_rejects_malformed_number() {
    let f = driver_fixture(&["739104"]);

    match f.service.submit_phone("12345").await.unwrap_err() {
        DomainError::Auth(AuthError::InvalidPhoneFormat { phone }) => assert_eq!(phone, "12345"),
        other => panic!("Expected InvalidPhoneFormat, got {:?}", other),
    }
    assert_eq!(f.repo.count().await, 0);
}

#[tokio::test]
async fn test_storage_failure_during_login_propagates() {
    let f = customer_fixture(&["483920"]);
    f.service.send_code("13800138000").await.unwrap();
    f.repo.set_storage_failure(true);

    assert!(matches!(
        f.service.login("13800138000", "483920").await,
        Err(DomainError::Storage { .. })
    ));
}
