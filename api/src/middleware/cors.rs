//! CORS middleware configuration for cross-origin requests.
//!
//! Mobile clients (passenger and driver apps) and the web console call the
//! API from other origins. Origins, methods, and headers come from
//! [`CorsConfig`]; a `"*"` origin allows any origin.

use actix_cors::Cors;
use actix_web::http::{header::HeaderName, Method};

use dj_shared::CorsConfig;

/// Creates a CORS middleware instance from configuration.
///
/// A disabled configuration yields actix-cors' default, which only admits
/// same-origin requests.
pub fn create_cors(config: &CorsConfig) -> Cors {
    if !config.enabled {
        tracing::info!("CORS disabled, only same-origin requests are admitted");
        return Cors::default();
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| match Method::from_bytes(m.trim().as_bytes()) {
            Ok(method) => Some(method),
            Err(_) => {
                tracing::warn!(method = %m, "Ignoring invalid CORS method");
                None
            }
        })
        .collect();

    let headers: Vec<HeaderName> = config
        .allowed_headers
        .iter()
        .filter_map(|h| match HeaderName::from_bytes(h.trim().as_bytes()) {
            Ok(name) => Some(name),
            Err(_) => {
                tracing::warn!(header = %h, "Ignoring invalid CORS header");
                None
            }
        })
        .collect();

    let mut cors = Cors::default()
        .allowed_methods(methods)
        .allowed_headers(headers)
        .max_age(config.max_age);

    if config.allows_any_origin() {
        tracing::info!("Configuring CORS for any origin");
        cors = cors.allow_any_origin();
    } else {
        for origin in config.allowed_origins.iter().map(|s| s.trim()) {
            if !origin.is_empty() {
                tracing::info!(origin = origin, "Adding allowed origin");
                cors = cors.allowed_origin(origin);
            }
        }
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}
