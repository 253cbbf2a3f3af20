//! HTTP surface of the LaomaDJ platform
//!
//! Customer and driver session scopes, the verification code peer endpoint,
//! fare valuation and map lookups, all served by actix-web.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use app::create_app;
pub use state::AppState;
