//! Mapping of domain failures to HTTP replies

use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::{header, StatusCode},
    HttpRequest, HttpResponse, ResponseError,
};
use std::fmt;

use dj_core::errors::{DomainError, ErrorKind};
use dj_shared::{error_codes, ErrorResponse, Language, Reply};

/// Language requested through `Accept-Language`, English by default
pub fn request_language(req: &HttpRequest) -> Language {
    req.headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .map(Language::from_accept_language)
        .unwrap_or_default()
}

/// Domain failure rendered in the caller's language.
///
/// Validation and mismatch failures are business outcomes: HTTP 200 with
/// reply code 1. Rejected sessions are 401, transient infrastructure
/// failures 503, everything else 500.
#[derive(Debug)]
pub struct ApiError {
    error: DomainError,
    language: Language,
}

impl ApiError {
    pub fn new(error: DomainError, language: Language) -> Self {
        Self { error, language }
    }

    pub fn reply(&self) -> Reply<()> {
        Reply::failure(self.error.code(), self.error.localized_message(self.language))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.error.kind() {
            ErrorKind::Validation | ErrorKind::Mismatch => StatusCode::OK,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self.error.kind() {
            ErrorKind::Unavailable | ErrorKind::Internal => {
                tracing::warn!(error = %self.error, code = self.error.code(), "Request failed")
            }
            _ => tracing::info!(error = %self.error, code = self.error.code(), "Request rejected"),
        }
        HttpResponse::build(self.status_code()).json(self.reply())
    }
}

/// Failure of a service-to-service endpoint.
///
/// Peers get plain HTTP statuses with the shared [`ErrorResponse`] body
/// instead of the business reply envelope.
#[derive(Debug)]
pub struct PeerError(pub DomainError);

impl fmt::Display for PeerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<DomainError> for PeerError {
    fn from(error: DomainError) -> Self {
        PeerError(error)
    }
}

impl ResponseError for PeerError {
    fn status_code(&self) -> StatusCode {
        match (&self.0, self.0.kind()) {
            (DomainError::NotFound { .. }, _) => StatusCode::NOT_FOUND,
            (_, ErrorKind::Validation | ErrorKind::Mismatch) => StatusCode::BAD_REQUEST,
            (_, ErrorKind::Unauthorized) => StatusCode::UNAUTHORIZED,
            (_, ErrorKind::Unavailable) => StatusCode::SERVICE_UNAVAILABLE,
            (_, ErrorKind::Internal) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(error = %self.0, code = self.0.code(), "Peer request failed");
        }
        HttpResponse::build(status).json(ErrorResponse::new(
            status.as_u16(),
            self.0.code(),
            self.0.localized_message(Language::English),
        ))
    }
}

/// Malformed JSON bodies get the shared error shape instead of actix's plain text
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let language = request_language(req);
    let body = ErrorResponse::new(
        StatusCode::BAD_REQUEST.as_u16(),
        error_codes::BAD_REQUEST,
        format!(
            "{}: {}",
            language.pick("invalid request body", "请求体格式错误"),
            err
        ),
    );
    let response = HttpResponse::BadRequest().json(body);
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;
    use dj_core::errors::{AuthError, TokenError};

    fn body_json(response: HttpResponse) -> serde_json::Value {
        let bytes = response.into_body().try_into_bytes().unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_mismatch_is_business_failure() {
        let err = ApiError::new(AuthError::VerificationCodeMismatch.into(), Language::English);
        assert_eq!(err.status_code(), StatusCode::OK);

        let body = body_json(err.error_response());
        assert_eq!(body["code"], 1);
        assert_eq!(body["reason"], error_codes::CODE_MISMATCH);
        assert_eq!(body["message"], "verify code mismatch");
    }

    #[test]
    fn test_token_updated_is_unauthorized_in_chinese() {
        let err = ApiError::new(TokenError::TokenUpdated.into(), Language::Chinese);
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(err.error_response())["message"], "登录凭证已更新");
    }

    #[test]
    fn test_storage_failure_is_unavailable() {
        let err = ApiError::new(DomainError::storage("redis down"), Language::English);
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        let body = body_json(err.error_response());
        assert_eq!(body["reason"], error_codes::STORAGE_ERROR);
        assert!(!body["message"].as_str().unwrap().contains("redis"));
    }

    #[test]
    fn test_peer_errors_use_plain_statuses() {
        let missing = PeerError(DomainError::NotFound {
            resource: "price rule".to_string(),
        });
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

        let invalid = PeerError(AuthError::InvalidCodeRequest {
            message: "length".to_string(),
        }
        .into());
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
        let body = body_json(invalid.error_response());
        assert_eq!(body["code"], 400);
        assert_eq!(body["reason"], error_codes::CODE_REQUEST_INVALID);
    }
}
