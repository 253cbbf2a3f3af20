use actix_web::{web, HttpRequest, HttpResponse};

use dj_core::domain::entities::Telephone;
use dj_shared::Reply;

use crate::handlers::{request_language, ApiError};
use crate::middleware::SessionContext;
use crate::routes::session_flow;
use crate::state::AppState;

/// Handler for GET /api/v1/driver/logout
pub async fn logout(
    req: HttpRequest,
    state: web::Data<AppState>,
    session: SessionContext<Telephone>,
) -> Result<HttpResponse, ApiError> {
    let language = request_language(&req);
    session_flow::logout(&*state.driver, &session.key, state.request_timeout)
        .await
        .map_err(|e| ApiError::new(e, language))?;

    Ok(HttpResponse::Ok().json(Reply::ok(language.pick("logout success", "退出成功"))))
}
