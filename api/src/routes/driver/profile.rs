use actix_web::HttpResponse;

use dj_core::domain::entities::Driver;
use dj_shared::Reply;

use crate::middleware::Authenticated;

/// Handler for GET /api/v1/driver/profile
///
/// Returns the record the session middleware resolved; the credential
/// itself is never serialized.
pub async fn profile(driver: Authenticated<Driver>) -> HttpResponse {
    HttpResponse::Ok().json(Reply::success("SUCCESS", driver.0))
}
