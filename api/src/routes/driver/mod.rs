//! `/api/v1/driver`

mod get_verify_code;
mod login;
mod logout;
mod profile;
mod submit_phone;

pub use get_verify_code::get_verify_code;
pub use login::login;
pub use logout::logout;
pub use profile::profile;
pub use submit_phone::submit_phone;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/get-verify-code/{telephone}", web::get().to(get_verify_code))
        .route("/submit-phone", web::post().to(submit_phone))
        .route("/login", web::post().to(login))
        .route("/logout", web::get().to(logout))
        .route("/profile", web::get().to(profile));
}
