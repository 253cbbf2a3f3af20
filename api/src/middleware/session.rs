//! Session authentication middleware for the customer and driver scopes.
//!
//! Every operation outside the domain's public allow-list must present
//! `Authorization: Bearer <token>`. The token is decoded (signature, expiry,
//! issuer, audience) and then checked against the identity's persisted
//! credential. On success a [`SessionContext`] is attached to the request;
//! domains configured with `attach_identity` also attach the full record as
//! [`Authenticated`].

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::{header::AUTHORIZATION, header::HeaderMap, Method},
    Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
    time::Duration,
};

use dj_core::domain::entities::{Identity, SessionClaims};
use dj_core::errors::{DomainError, TokenError};
use dj_core::repositories::IdentityRepository;
use dj_core::services::session::SessionValidator;

use crate::handlers::{request_language, with_deadline, ApiError};

/// Operations exposed by the identity scopes, named by their path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetVerifyCode,
    Login,
    Logout,
    SubmitPhone,
    Profile,
    EstimatePrice,
}

impl Operation {
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "get-verify-code" => Some(Operation::GetVerifyCode),
            "login" => Some(Operation::Login),
            "logout" => Some(Operation::Logout),
            "submit-phone" => Some(Operation::SubmitPhone),
            "profile" => Some(Operation::Profile),
            "estimate-price" => Some(Operation::EstimatePrice),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::GetVerifyCode => "GetVerifyCode",
            Operation::Login => "Login",
            Operation::Logout => "Logout",
            Operation::SubmitPhone => "SubmitPhone",
            Operation::Profile => "Profile",
            Operation::EstimatePrice => "EstimatePrice",
        }
    }
}

/// Public allow-list of one domain scope.
///
/// Scope middleware runs before resource matching, so the operation is
/// resolved from the path segment following the scope name.
#[derive(Debug, Clone, Copy)]
pub struct OperationTable {
    scope: &'static str,
    public: &'static [Operation],
}

impl OperationTable {
    pub const CUSTOMER: OperationTable = OperationTable {
        scope: "customer",
        public: &[Operation::GetVerifyCode, Operation::Login],
    };

    pub const DRIVER: OperationTable = OperationTable {
        scope: "driver",
        public: &[Operation::GetVerifyCode, Operation::Login, Operation::SubmitPhone],
    };

    pub fn resolve(&self, path: &str) -> Option<Operation> {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        segments.find(|s| *s == self.scope)?;
        segments.next().and_then(Operation::from_segment)
    }

    /// Unknown operations are never public
    pub fn is_public(&self, path: &str) -> bool {
        self.resolve(path)
            .map(|op| self.public.contains(&op))
            .unwrap_or(false)
    }
}

/// Session facts attached to an authenticated request
#[derive(Debug, Clone)]
pub struct SessionContext<K> {
    pub key: K,
    /// Per-issuance id of the presented credential
    pub session_id: String,
    pub issued_at: i64,
    pub expires_at: i64,
}

impl<K: Clone> SessionContext<K> {
    fn from_claims(claims: &SessionClaims<K>) -> Self {
        Self {
            key: claims.jti.clone(),
            session_id: claims.sid.clone(),
            issued_at: claims.iat,
            expires_at: claims.exp,
        }
    }
}

/// Full identity record resolved during authentication
#[derive(Debug, Clone)]
pub struct Authenticated<I>(pub I);

fn from_extensions<T: Clone + 'static>(req: &HttpRequest) -> Ready<Result<T, Error>> {
    let language = request_language(req);
    ready(req.extensions().get::<T>().cloned().ok_or_else(|| {
        ApiError::new(DomainError::Token(TokenError::ClaimsNotFound), language).into()
    }))
}

impl<K: Clone + 'static> FromRequest for SessionContext<K> {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        from_extensions(req)
    }
}

impl<I: Clone + 'static> FromRequest for Authenticated<I> {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        from_extensions(req)
    }
}

/// Extracts the credential from `Authorization: Bearer <token>`
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// Session authentication middleware factory
pub struct SessionAuth<I, R>
where
    I: Identity,
    R: IdentityRepository<I> + ?Sized,
{
    validator: Arc<SessionValidator<I, R>>,
    table: OperationTable,
    attach_identity: bool,
    deadline: Duration,
}

impl<I, R> SessionAuth<I, R>
where
    I: Identity,
    R: IdentityRepository<I> + ?Sized,
{
    pub fn new(validator: Arc<SessionValidator<I, R>>, table: OperationTable, deadline: Duration) -> Self {
        Self {
            validator,
            table,
            attach_identity: false,
            deadline,
        }
    }

    /// Also attach the resolved record as [`Authenticated`]
    pub fn attach_identity(mut self) -> Self {
        self.attach_identity = true;
        self
    }
}

impl<S, B, I, R> Transform<S, ServiceRequest> for SessionAuth<I, R>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    I: Identity,
    R: IdentityRepository<I> + ?Sized + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionAuthMiddleware<S, I, R>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthMiddleware {
            service: Rc::new(service),
            validator: self.validator.clone(),
            table: self.table,
            attach_identity: self.attach_identity,
            deadline: self.deadline,
        }))
    }
}

pub struct SessionAuthMiddleware<S, I, R>
where
    I: Identity,
    R: IdentityRepository<I> + ?Sized,
{
    service: Rc<S>,
    validator: Arc<SessionValidator<I, R>>,
    table: OperationTable,
    attach_identity: bool,
    deadline: Duration,
}

impl<S, B, I, R> Service<ServiceRequest> for SessionAuthMiddleware<S, I, R>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    I: Identity,
    R: IdentityRepository<I> + ?Sized + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        if req.method() == Method::OPTIONS || self.table.is_public(req.path()) {
            return Box::pin(async move {
                service.call(req).await.map(ServiceResponse::map_into_left_body)
            });
        }

        let validator = self.validator.clone();
        let attach_identity = self.attach_identity;
        let deadline = self.deadline;
        let operation = self.table.resolve(req.path());

        Box::pin(async move {
            let checked = async {
                let token = extract_bearer_token(req.headers()).ok_or(TokenError::MissingToken)?;
                let claims = validator.decode(&token)?;
                let identity =
                    with_deadline(deadline, validator.validate(&token, Some(&claims))).await?;
                Ok::<_, DomainError>((claims, identity))
            }
            .await;

            match checked {
                Ok((claims, identity)) => {
                    req.extensions_mut().insert(SessionContext::from_claims(&claims));
                    if attach_identity {
                        req.extensions_mut().insert(Authenticated(identity));
                    }
                    service.call(req).await.map(ServiceResponse::map_into_left_body)
                }
                // Rejections are rendered here so outer middleware still sees a response
                Err(error) => {
                    tracing::info!(
                        domain = %I::DOMAIN,
                        operation = operation.map(|op| op.name()).unwrap_or("unknown"),
                        reason = error.code(),
                        "Session rejected"
                    );
                    let language = request_language(req.request());
                    let response = ApiError::new(error, language).error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test::{init_service, read_body_json, try_call_service, TestRequest};
    use actix_web::{web, App, HttpResponse};
    use dj_core::domain::entities::Customer;
    use dj_core::repositories::MockIdentityRepository;
    use dj_core::services::session::SessionConfig;

    async fn ok() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    fn customer_auth() -> SessionAuth<Customer, MockIdentityRepository<Customer>> {
        let repository = Arc::new(MockIdentityRepository::<Customer>::new());
        let validator = Arc::new(SessionValidator::new(repository, &SessionConfig::customer()));
        SessionAuth::new(validator, OperationTable::CUSTOMER, Duration::from_secs(1))
    }

    #[test]
    fn test_operation_resolution() {
        let table = OperationTable::CUSTOMER;
        assert_eq!(
            table.resolve("/api/v1/customer/get-verify-code/13800138000"),
            Some(Operation::GetVerifyCode)
        );
        assert_eq!(
            table.resolve("/api/v1/customer/estimate-price/a/b"),
            Some(Operation::EstimatePrice)
        );
        assert_eq!(table.resolve("/api/v1/customer/unknown"), None);
        assert_eq!(table.resolve("/api/v1/driver/login"), None);
    }

    #[test]
    fn test_allow_lists_per_domain() {
        assert!(OperationTable::CUSTOMER.is_public("/api/v1/customer/login"));
        assert!(!OperationTable::CUSTOMER.is_public("/api/v1/customer/logout"));
        assert!(!OperationTable::CUSTOMER.is_public("/api/v1/customer/submit-phone"));

        assert!(OperationTable::DRIVER.is_public("/api/v1/driver/submit-phone"));
        assert!(OperationTable::DRIVER.is_public("/api/v1/driver/get-verify-code/13900139000"));
        assert!(!OperationTable::DRIVER.is_public("/api/v1/driver/profile"));
    }

    #[test]
    fn test_extract_bearer_token() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(req.headers()), Some("test_token_123".to_string()));

        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(req.headers()), None);

        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer "))
            .to_srv_request();
        assert_eq!(extract_bearer_token(req.headers()), None);

        // The credential is compared byte for byte, so surrounding spaces are kept
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer  test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(req.headers()), Some(" test_token_123".to_string()));

        let req = TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(req.headers()), None);
    }

    #[actix_web::test]
    async fn test_rejection_is_returned_as_response() {
        let app = init_service(
            App::new().service(
                web::scope("/api/v1/customer")
                    .wrap(customer_auth())
                    .route("/logout", web::get().to(ok)),
            ),
        )
        .await;

        let req = TestRequest::get().uri("/api/v1/customer/logout").to_request();
        let resp = try_call_service(&app, req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = read_body_json(resp).await;
        assert_eq!(body["code"], 1);
        assert_eq!(body["reason"], "TOKEN_MISSING");
    }

    #[actix_web::test]
    async fn test_public_operation_passes_through() {
        let app = init_service(
            App::new().service(
                web::scope("/api/v1/customer")
                    .wrap(customer_auth())
                    .route("/login", web::post().to(ok)),
            ),
        )
        .await;

        let req = TestRequest::post().uri("/api/v1/customer/login").to_request();
        let resp = try_call_service(&app, req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
