//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError};

use dj_shared::{error_codes, Language};
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Ephemeral store or database failure
    #[error("Storage failure: {message}")]
    Storage { message: String },

    /// Peer service, external API, or deadline failure
    #[error("Upstream failure: {message}")]
    Upstream { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Coarse classification deciding how a caller should react
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input; show the message, do not retry
    Validation,
    /// Presented code did not match; show the message
    Mismatch,
    /// Session rejected
    Unauthorized,
    /// Transient infrastructure failure; retry the whole operation
    Unavailable,
    Internal,
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation { .. } => ErrorKind::Validation,
            DomainError::NotFound { .. } => ErrorKind::Internal,
            DomainError::Storage { .. } | DomainError::Upstream { .. } => ErrorKind::Unavailable,
            DomainError::Internal { .. } => ErrorKind::Internal,
            DomainError::Auth(AuthError::VerificationCodeMismatch) => ErrorKind::Mismatch,
            DomainError::Auth(_) => ErrorKind::Validation,
            DomainError::Token(e) if e.is_unauthorized() => ErrorKind::Unauthorized,
            DomainError::Token(_) => ErrorKind::Internal,
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => error_codes::VALIDATION_ERROR,
            DomainError::NotFound { .. } => error_codes::NOT_FOUND,
            DomainError::Storage { .. } => error_codes::STORAGE_ERROR,
            DomainError::Upstream { .. } => error_codes::UPSTREAM_ERROR,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
            DomainError::Auth(e) => e.code(),
            DomainError::Token(e) => e.code(),
        }
    }

    /// User-facing message in the requested language.
    ///
    /// Infrastructure details stay in the logs; callers only learn that the
    /// operation may be retried.
    pub fn localized_message(&self, lang: Language) -> String {
        let (en, zh) = match self {
            DomainError::Validation { message } => return message.clone(),
            DomainError::NotFound { .. } => ("resource not found", "资源不存在"),
            DomainError::Storage { .. } => ("storage service unavailable", "存储服务不可用"),
            DomainError::Upstream { .. } => ("dependent service unavailable", "依赖服务不可用"),
            DomainError::Internal { .. } => ("internal server error", "服务器内部错误"),
            DomainError::Auth(e) => e.messages(),
            DomainError::Token(e) => e.messages(),
        };
        lang.pick(en, zh).to_string()
    }

    pub fn storage(message: impl Into<String>) -> Self {
        DomainError::Storage {
            message: message.into(),
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        DomainError::Upstream {
            message: message.into(),
        }
    }
}
