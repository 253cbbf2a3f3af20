use actix_web::{web, HttpRequest, HttpResponse};

use dj_shared::Reply;

use crate::dto::auth::LoginRequest;
use crate::handlers::{request_language, ApiError};
use crate::routes::session_flow;
use crate::state::AppState;

/// Handler for POST /api/v1/customer/login
///
/// ```json
/// { "telephone": "13800138000", "verify_code": "abcdef" }
/// ```
///
/// Registers the customer on first login and replaces any previous session.
pub async fn login(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let language = request_language(&req);
    let (data, _) = session_flow::login(&*state.customer, &body, state.request_timeout)
        .await
        .map_err(|e| ApiError::new(e, language))?;

    Ok(HttpResponse::Ok().json(Reply::success(
        language.pick("login success", "登录成功"),
        data,
    )))
}
