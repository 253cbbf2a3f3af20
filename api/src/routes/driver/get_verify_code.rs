use actix_web::{web, HttpRequest, HttpResponse};

use dj_shared::Reply;

use crate::handlers::{request_language, ApiError};
use crate::routes::session_flow;
use crate::state::AppState;

/// Handler for GET /api/v1/driver/get-verify-code/{telephone}
pub async fn get_verify_code(
    req: HttpRequest,
    state: web::Data<AppState>,
    telephone: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let language = request_language(&req);
    let data = session_flow::get_verify_code(&*state.driver, &telephone, state.request_timeout)
        .await
        .map_err(|e| ApiError::new(e, language))?;

    Ok(HttpResponse::Ok().json(Reply::success("SUCCESS", data)))
}
