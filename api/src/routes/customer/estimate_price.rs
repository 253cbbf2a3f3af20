use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{Local, Timelike};

use dj_core::domain::entities::CustomerId;
use dj_shared::Reply;

use crate::dto::auth::EstimatePriceData;
use crate::handlers::{request_language, with_deadline, ApiError};
use crate::middleware::SessionContext;
use crate::state::AppState;

/// Handler for GET /api/v1/customer/estimate-price/{origin}/{destination}
///
/// Prices the route with the default city's rule for the current local hour.
pub async fn estimate_price(
    req: HttpRequest,
    state: web::Data<AppState>,
    session: SessionContext<CustomerId>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ApiError> {
    let language = request_language(&req);
    let (origin, destination) = path.into_inner();
    let hour = Local::now().hour() as i32;

    let estimate = with_deadline(
        state.request_timeout,
        state
            .valuation
            .estimate_price(&origin, &destination, state.default_city_id, hour),
    )
    .await
    .map_err(|e| ApiError::new(e, language))?;

    tracing::info!(
        customer_id = %session.key,
        price = estimate.price,
        "Customer price estimate"
    );

    Ok(HttpResponse::Ok().json(Reply::success(
        "SUCCESS",
        EstimatePriceData {
            price: estimate.price,
            distance: estimate.distance_m,
            duration: estimate.duration_s,
        },
    )))
}
