//! Application factory
//!
//! Builds the actix-web application around a shared [`AppState`]. The binary
//! and the integration tests both go through [`create_app`].

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use dj_shared::{error_codes, CorsConfig, ErrorResponse};

use crate::handlers::{health::health_check, json_error_handler};
use crate::middleware::{create_cors, OperationTable, SessionAuth};
use crate::routes;
use crate::state::AppState;

/// Create and configure the application with all dependencies
pub fn create_app(
    state: web::Data<AppState>,
    cors: &CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let customer_auth = SessionAuth::new(
        state.customer_validator(),
        OperationTable::CUSTOMER,
        state.request_timeout,
    );
    let driver_auth = SessionAuth::new(
        state.driver_validator(),
        OperationTable::DRIVER,
        state.request_timeout,
    )
    .attach_identity();

    App::new()
        .app_data(state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // The last wrap runs first, so tracing covers CORS rejections too
        .wrap(create_cors(cors))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/customer")
                        .wrap(customer_auth)
                        .configure(routes::customer::configure),
                )
                .service(
                    web::scope("/driver")
                        .wrap(driver_auth)
                        .configure(routes::driver::configure),
                )
                .configure(routes::verify_code::configure)
                .configure(routes::valuation::configure)
                .configure(routes::map::configure),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        404,
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
