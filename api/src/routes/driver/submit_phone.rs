use actix_web::{web, HttpRequest, HttpResponse};

use dj_shared::phone::mask_phone_number;
use dj_shared::Reply;

use crate::dto::auth::{SubmitPhoneData, SubmitPhoneRequest};
use crate::handlers::{request_language, with_deadline, ApiError};
use crate::routes::validate_body;
use crate::state::AppState;

/// Handler for POST /api/v1/driver/submit-phone
///
/// Registers the number with status `stop`, or reports the status of an
/// existing registration. No session is issued.
pub async fn submit_phone(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<SubmitPhoneRequest>,
) -> Result<HttpResponse, ApiError> {
    let language = request_language(&req);
    let reject = |e| ApiError::new(e, language);

    validate_body(&*body, Some(body.telephone.as_str())).map_err(reject)?;
    let (driver, created) = with_deadline(
        state.request_timeout,
        state.driver.submit_phone(&body.telephone),
    )
    .await
    .map_err(reject)?;

    tracing::info!(
        phone = %mask_phone_number(&body.telephone),
        created = created,
        event = "driver_phone_submitted",
        "Driver phone submitted"
    );

    Ok(HttpResponse::Ok().json(Reply::success(
        language.pick("telephone submitted", "司机号码提交成功"),
        SubmitPhoneData {
            status: driver.status,
            created,
        },
    )))
}
