//! Bodies of the service-to-service endpoints.
//!
//! These replies are plain JSON objects rather than the business envelope;
//! peers read `code` as the generated value, not a status.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CodeRequest {
    #[validate(range(min = 1, max = 64))]
    pub length: usize,

    /// 0 default (digits), 1 digits, 2 letters, 3 mixed
    #[serde(rename = "type", default)]
    pub code_type: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeResponse {
    pub code: String,
}

/// Route between two "longitude,latitude" points
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RouteRequest {
    #[validate(length(min = 3))]
    pub origin: String,

    #[validate(length(min = 3))]
    pub destination: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceResponse {
    pub price: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrivingInfoResponse {
    /// Metres, as reported by the map provider
    pub distance: String,
    /// Seconds, as reported by the map provider
    pub duration: String,
}
