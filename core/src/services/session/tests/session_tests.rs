//! Issue, validate, and revoke against the in-memory repository

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use std::sync::Arc;

use crate::domain::entities::{Customer, CustomerId, Driver, Identity, SessionClaims};
use crate::errors::{DomainError, ErrorKind, TokenError};
use crate::repositories::{IdentityRepository, MockIdentityRepository};
use crate::services::session::{SessionConfig, SessionIssuer, SessionRevoker, SessionValidator};

type CustomerRepo = MockIdentityRepository<Customer>;

struct Fixture {
    repo: Arc<CustomerRepo>,
    issuer: SessionIssuer<Customer, CustomerRepo>,
    validator: SessionValidator<Customer, CustomerRepo>,
    revoker: SessionRevoker<Customer, CustomerRepo>,
}

fn fixture() -> Fixture {
    let repo = Arc::new(CustomerRepo::new());
    let config = SessionConfig::customer();
    Fixture {
        issuer: SessionIssuer::new(repo.clone(), config.clone()),
        validator: SessionValidator::new(repo.clone(), &config),
        revoker: SessionRevoker::new(repo.clone()),
        repo,
    }
}

async fn admit(f: &Fixture, token: &str) -> Result<Customer, DomainError> {
    let claims = f.validator.decode(token)?;
    f.validator.validate(token, Some(&claims)).await
}

fn expect_token_error(result: Result<Customer, DomainError>, expected: TokenError) {
    match result {
        Err(DomainError::Token(actual)) => assert_eq!(actual, expected),
        other => panic!("Expected {:?}, got {:?}", expected, other),
    }
}

#[tokio::test]
async fn test_issue_persists_credential() {
    let f = fixture();
    let customer = f.repo.create("13800138000").await.unwrap();

    let session = f.issuer.issue(&customer).await.unwrap();

    let stored = f.repo.find_by_key(&customer.id).await.unwrap().unwrap();
    assert_eq!(stored.session_token(), Some(session.token.as_str()));
    assert_eq!(stored.session_issued_at(), Some(session.issued_at));
    assert_eq!(session.ttl_seconds, 5_184_000);
}

#[tokio::test]
async fn test_claims_carry_domain_constants() {
    let f = fixture();
    let customer = f.repo.create("13800138000").await.unwrap();
    let session = f.issuer.issue(&customer).await.unwrap();

    let claims = f.validator.decode(&session.token).unwrap();

    assert_eq!(claims.iss, "LaoMaDJ");
    assert_eq!(claims.sub, "customer-authentication");
    assert_eq!(claims.aud, vec!["customer", "other"]);
    assert_eq!(claims.jti, customer.id);
    assert_eq!(claims.exp - claims.iat, 5_184_000);
}

#[tokio::test]
async fn test_current_credential_admitted() {
    let f = fixture();
    let customer = f.repo.create("13800138000").await.unwrap();
    let session = f.issuer.issue(&customer).await.unwrap();

    let admitted = admit(&f, &session.token).await.unwrap();
    assert_eq!(admitted.id, customer.id);
}

#[tokio::test]
async fn test_reissue_invalidates_previous_credential() {
    let f = fixture();
    let customer = f.repo.create("13800138000").await.unwrap();

    let first = f.issuer.issue(&customer).await.unwrap();
    let second = f.issuer.issue(&customer).await.unwrap();

    assert_ne!(first.token, second.token);
    expect_token_error(admit(&f, &first.token).await, TokenError::TokenUpdated);
    assert!(admit(&f, &second.token).await.is_ok());
}

#[tokio::test]
async fn test_revoke_invalidates_and_is_idempotent() {
    let f = fixture();
    let customer = f.repo.create("13800138000").await.unwrap();
    let session = f.issuer.issue(&customer).await.unwrap();

    f.revoker.revoke(&customer.id).await.unwrap();
    f.revoker.revoke(&customer.id).await.unwrap();

    expect_token_error(admit(&f, &session.token).await, TokenError::TokenUpdated);
    let stored = f.repo.find_by_key(&customer.id).await.unwrap().unwrap();
    assert!(stored.session_token().is_none());
    assert!(stored.session_issued_at().is_none());
}

#[tokio::test]
async fn test_revoke_unknown_identity_is_noop() {
    let f = fixture();
    assert!(f.revoker.revoke(&CustomerId(404)).await.is_ok());
}

#[tokio::test]
async fn test_missing_claims_rejected_first() {
    let f = fixture();
    expect_token_error(f.validator.validate("anything", None).await, TokenError::ClaimsNotFound);
}

#[tokio::test]
async fn test_unknown_identity_rejected() {
    let f = fixture();
    let customer = f.repo.create("13800138000").await.unwrap();
    let session = f.issuer.issue(&customer).await.unwrap();
    let mut claims = f.validator.decode(&session.token).unwrap();
    claims.jti = CustomerId(999);

    expect_token_error(
        f.validator.validate(&session.token, Some(&claims)).await,
        TokenError::IdentityNotFound,
    );
}

#[tokio::test]
async fn test_lookup_failure_reported_as_identity_not_found() {
    let f = fixture();
    let customer = f.repo.create("13800138000").await.unwrap();
    let session = f.issuer.issue(&customer).await.unwrap();
    let claims = f.validator.decode(&session.token).unwrap();

    f.repo.set_storage_failure(true);
    let result = f.validator.validate(&session.token, Some(&claims)).await;

    assert_eq!(result.as_ref().unwrap_err().kind(), ErrorKind::Unauthorized);
    expect_token_error(result, TokenError::IdentityNotFound);
}

#[tokio::test]
async fn test_issue_for_missing_identity_fails() {
    let f = fixture();
    let ghost = Customer::new(CustomerId(77), "13800138000");

    let err = f.issuer.issue(&ghost).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_persistence_failure_propagates() {
    let f = fixture();
    let customer = f.repo.create("13800138000").await.unwrap();
    f.repo.set_storage_failure(true);

    let err = f.issuer.issue(&customer).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unavailable);
}

#[tokio::test]
async fn test_tampered_token_rejected() {
    let f = fixture();
    let customer = f.repo.create("13800138000").await.unwrap();
    let session = f.issuer.issue(&customer).await.unwrap();
    let tampered = format!("{}x", session.token);

    expect_token_error(admit(&f, &tampered).await, TokenError::InvalidToken);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let f = fixture();
    let customer = f.repo.create("13800138000").await.unwrap();
    let config = SessionConfig::customer();
    let past = Utc::now().timestamp() - 7_200;
    let claims = SessionClaims {
        iss: config.issuer.clone(),
        sub: config.subject.clone(),
        aud: config.audience.clone(),
        iat: past - 60,
        exp: past,
        jti: customer.id,
        sid: "expired".to_string(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .unwrap();

    expect_token_error(admit(&f, &token).await, TokenError::TokenExpired);
}

#[tokio::test]
async fn test_domains_do_not_accept_each_other() {
    let customers = Arc::new(MockIdentityRepository::<Customer>::new());
    let drivers = Arc::new(MockIdentityRepository::<Driver>::new());
    let customer = customers.create("13800138000").await.unwrap();
    let driver = drivers.create("13800138000").await.unwrap();

    let customer_token = SessionIssuer::new(customers.clone(), SessionConfig::customer())
        .issue(&customer)
        .await
        .unwrap()
        .token;
    let driver_token = SessionIssuer::new(drivers.clone(), SessionConfig::driver())
        .issue(&driver)
        .await
        .unwrap()
        .token;

    let driver_validator = SessionValidator::new(drivers, &SessionConfig::driver());
    let customer_validator = SessionValidator::new(customers, &SessionConfig::customer());

    assert!(matches!(
        driver_validator.decode(&customer_token),
        Err(DomainError::Token(TokenError::InvalidToken))
    ));
    assert!(matches!(
        customer_validator.decode(&driver_token),
        Err(DomainError::Token(TokenError::InvalidToken))
    ));
}
