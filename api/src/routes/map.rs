//! `/api/v1/map`

use actix_web::{web, HttpResponse};

use crate::dto::peer::{DrivingInfoResponse, RouteRequest};
use crate::handlers::{with_deadline, PeerError};
use crate::routes::validate_body;
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/map").route("/driving-info", web::post().to(driving_info)));
}

/// Handler for POST /api/v1/map/driving-info
pub async fn driving_info(
    state: web::Data<AppState>,
    body: web::Json<RouteRequest>,
) -> Result<HttpResponse, PeerError> {
    validate_body(&*body, None)?;

    let info = with_deadline(
        state.request_timeout,
        state.valuation.driving_info(&body.origin, &body.destination),
    )
    .await?;

    Ok(HttpResponse::Ok().json(DrivingInfoResponse {
        distance: info.distance,
        duration: info.duration,
    }))
}
