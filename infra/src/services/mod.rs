//! HTTP clients for peer and external services

pub mod amap;
pub mod code_source;
pub mod delivery;

pub use amap::AmapDrivingClient;
pub use code_source::HttpCodeSource;
pub use delivery::SmsGatewayDelivery;

use std::time::Duration;

use crate::InfrastructureError;

/// Shared `reqwest` client with a total request timeout
pub fn http_client(timeout: Duration) -> Result<reqwest::Client, InfrastructureError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(InfrastructureError::Http)
}
