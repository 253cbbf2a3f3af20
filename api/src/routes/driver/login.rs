use actix_web::{web, HttpRequest, HttpResponse};

use dj_shared::Reply;

use crate::dto::auth::LoginRequest;
use crate::handlers::{request_language, ApiError};
use crate::routes::session_flow;
use crate::state::AppState;

/// Handler for POST /api/v1/driver/login
///
/// ```json
/// { "telephone": "13900139000", "verify_code": "123456" }
/// ```
pub async fn login(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let language = request_language(&req);
    let (data, _) = session_flow::login(&*state.driver, &body, state.request_timeout)
        .await
        .map_err(|e| ApiError::new(e, language))?;

    Ok(HttpResponse::Ok().json(Reply::success(
        language.pick("login success", "司机登录成功"),
        data,
    )))
}
