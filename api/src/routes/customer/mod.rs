//! `/api/v1/customer`

mod estimate_price;
mod get_verify_code;
mod login;
mod logout;

pub use estimate_price::estimate_price;
pub use get_verify_code::get_verify_code;
pub use login::login;
pub use logout::logout;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/get-verify-code/{telephone}", web::get().to(get_verify_code))
        .route("/login", web::post().to(login))
        .route("/logout", web::get().to(logout))
        .route(
            "/estimate-price/{origin}/{destination}",
            web::get().to(estimate_price),
        );
}
