//! `/api/v1/verify-code`: the in-process code issuing peer service

use actix_web::{web, HttpResponse};

use dj_core::domain::entities::CodeType;
use dj_core::errors::{AuthError, DomainError};
use dj_core::services::code::generate_code;

use crate::dto::peer::{CodeRequest, CodeResponse};
use crate::handlers::PeerError;
use crate::routes::validate_body;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/verify-code", web::post().to(issue_code));
}

/// Handler for POST /api/v1/verify-code
///
/// ```json
/// { "length": 6, "type": 2 }
/// ```
pub async fn issue_code(body: web::Json<CodeRequest>) -> Result<HttpResponse, PeerError> {
    validate_body(&*body, None).map_err(|_| invalid_request(format!(
        "length must be between 1 and 64, got {}",
        body.length
    )))?;

    let code_type = CodeType::from_i32(body.code_type)
        .ok_or_else(|| invalid_request(format!("unknown code type {}", body.code_type)))?;

    let code = generate_code(code_type, body.length)?;
    Ok(HttpResponse::Ok().json(CodeResponse { code }))
}

fn invalid_request(message: String) -> DomainError {
    AuthError::InvalidCodeRequest { message }.into()
}
