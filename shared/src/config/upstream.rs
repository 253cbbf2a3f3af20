//! Peer and external service endpoints

use serde::{Deserialize, Serialize};

/// Endpoints of services this backend calls out to
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Base URL of the verification code service. When unset, codes are
    /// generated in-process.
    #[serde(default)]
    pub code_service_url: Option<String>,

    /// Driving distance provider
    #[serde(default)]
    pub map: MapConfig,

    /// City used for fare rules when the caller does not name one
    #[serde(default = "default_city_id")]
    pub default_city_id: u32,

    /// Outbound HTTP timeout in seconds
    #[serde(default = "default_http_timeout")]
    pub http_timeout: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            code_service_url: None,
            map: MapConfig::default(),
            default_city_id: default_city_id(),
            http_timeout: default_http_timeout(),
        }
    }
}

/// AMap driving direction API settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MapConfig {
    pub api_url: String,

    #[serde(default)]
    pub api_key: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            api_url: String::from("https://restapi.amap.com/v3/direction/driving"),
            api_key: String::new(),
        }
    }
}

fn default_city_id() -> u32 {
    1
}

fn default_http_timeout() -> u64 {
    5
}
