//! `/api/v1/valuation`

use actix_web::{web, HttpResponse};
use chrono::{Local, Timelike};

use crate::dto::peer::{PriceResponse, RouteRequest};
use crate::handlers::{with_deadline, PeerError};
use crate::routes::validate_body;
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/valuation").route("/estimate-price", web::post().to(estimate_price)));
}

/// Handler for POST /api/v1/valuation/estimate-price
pub async fn estimate_price(
    state: web::Data<AppState>,
    body: web::Json<RouteRequest>,
) -> Result<HttpResponse, PeerError> {
    validate_body(&*body, None)?;
    let hour = Local::now().hour() as i32;

    let estimate = with_deadline(
        state.request_timeout,
        state
            .valuation
            .estimate_price(&body.origin, &body.destination, state.default_city_id, hour),
    )
    .await?;

    Ok(HttpResponse::Ok().json(PriceResponse {
        price: estimate.price,
    }))
}
