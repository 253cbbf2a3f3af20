//! Authentication and session error types
//!
//! Each variant knows its stable machine code and a bilingual message
//! pair; the presentation layer picks the language.

use dj_shared::error_codes;
use thiserror::Error;

/// Verification code and login errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid phone format: {phone}")]
    InvalidPhoneFormat { phone: String },

    #[error("Verification code is empty")]
    EmptyVerificationCode,

    #[error("Verification code mismatch")]
    VerificationCodeMismatch,

    #[error("Invalid code request: {message}")]
    InvalidCodeRequest { message: String },
}

impl AuthError {
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidPhoneFormat { .. } => error_codes::PHONE_INVALID,
            AuthError::EmptyVerificationCode => error_codes::CODE_EMPTY,
            AuthError::VerificationCodeMismatch => error_codes::CODE_MISMATCH,
            AuthError::InvalidCodeRequest { .. } => error_codes::CODE_REQUEST_INVALID,
        }
    }

    /// English and Chinese user-facing messages
    pub fn messages(&self) -> (&'static str, &'static str) {
        match self {
            AuthError::InvalidPhoneFormat { .. } => ("invalid telephone format", "电话号码格式错误"),
            AuthError::EmptyVerificationCode => ("verify code is empty", "验证码不能为空"),
            AuthError::VerificationCodeMismatch => ("verify code mismatch", "验证码不匹配"),
            AuthError::InvalidCodeRequest { .. } => ("invalid verify code request", "验证码请求参数错误"),
        }
    }
}

/// Session credential errors
///
/// Every variant except `SigningFailed` is an Unauthorized outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is missing")]
    MissingToken,

    #[error("token is invalid")]
    InvalidToken,

    #[error("token has expired")]
    TokenExpired,

    #[error("claims not found")]
    ClaimsNotFound,

    #[error("identity not found")]
    IdentityNotFound,

    #[error("token was updated")]
    TokenUpdated,

    #[error("token signing failed: {message}")]
    SigningFailed { message: String },
}

impl TokenError {
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::MissingToken => error_codes::TOKEN_MISSING,
            TokenError::InvalidToken => error_codes::TOKEN_INVALID,
            TokenError::TokenExpired => error_codes::TOKEN_EXPIRED,
            TokenError::ClaimsNotFound => error_codes::CLAIMS_NOT_FOUND,
            TokenError::IdentityNotFound => error_codes::IDENTITY_NOT_FOUND,
            TokenError::TokenUpdated => error_codes::TOKEN_UPDATED,
            TokenError::SigningFailed { .. } => error_codes::TOKEN_SIGNING_FAILED,
        }
    }

    pub fn messages(&self) -> (&'static str, &'static str) {
        match self {
            TokenError::MissingToken => ("token is missing", "缺少登录凭证"),
            TokenError::InvalidToken => ("token is invalid", "登录凭证无效"),
            TokenError::TokenExpired => ("token has expired", "登录凭证已过期"),
            TokenError::ClaimsNotFound => ("claims not found", "凭证声明缺失"),
            TokenError::IdentityNotFound => ("identity not found", "用户不存在"),
            TokenError::TokenUpdated => ("token was updated", "登录凭证已更新"),
            TokenError::SigningFailed { .. } => ("token generation failed", "Token生成失败"),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        !matches!(self, TokenError::SigningFailed { .. })
    }
}
