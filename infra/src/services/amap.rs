//! AMap (Gaode) driving-direction client

use async_trait::async_trait;
use serde::Deserialize;

use dj_core::domain::entities::DrivingInfo;
use dj_core::errors::DomainError;
use dj_core::services::valuation::DrivingInfoProvider;
use dj_shared::MapConfig;

use crate::InfrastructureError;

#[derive(Debug, Deserialize)]
struct DirectionResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    info: String,
    #[serde(default)]
    route: Option<Route>,
}

#[derive(Debug, Deserialize)]
struct Route {
    #[serde(default)]
    paths: Vec<Path>,
}

#[derive(Debug, Deserialize)]
struct Path {
    distance: String,
    duration: String,
}

impl DirectionResponse {
    /// First route of a successful answer
    fn into_driving_info(self) -> Result<DrivingInfo, InfrastructureError> {
        if self.status == "0" {
            return Err(InfrastructureError::Upstream(format!(
                "map provider rejected request: {}",
                self.info
            )));
        }
        let path = self
            .route
            .and_then(|r| r.paths.into_iter().next())
            .ok_or_else(|| InfrastructureError::Upstream("map provider returned no route".to_string()))?;

        Ok(DrivingInfo {
            distance: path.distance,
            duration: path.duration,
        })
    }
}

pub struct AmapDrivingClient {
    client: reqwest::Client,
    config: MapConfig,
}

impl AmapDrivingClient {
    pub fn new(client: reqwest::Client, config: MapConfig) -> Self {
        Self { client, config }
    }

    async fn fetch(&self, origin: &str, destination: &str) -> Result<DrivingInfo, InfrastructureError> {
        let response: DirectionResponse = self
            .client
            .get(&self.config.api_url)
            .query(&[
                ("origin", origin),
                ("destination", destination),
                ("extensions", "base"),
                ("output", "json"),
                ("key", self.config.api_key.as_str()),
            ])
            .send()
            .await?
            .json()
            .await?;

        response.into_driving_info()
    }
}

#[async_trait]
impl DrivingInfoProvider for AmapDrivingClient {
    async fn driving_info(&self, origin: &str, destination: &str) -> Result<DrivingInfo, DomainError> {
        self.fetch(origin, destination).await.map_err(|e| {
            tracing::warn!(origin, destination, error = %e, "Driving info lookup failed");
            DomainError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_path_is_used() {
        let body = r#"{
            "status": "1", "info": "OK", "infocode": "10000", "count": "2",
            "route": {
                "origin": "116.481028,39.989643",
                "destination": "116.434446,39.90816",
                "paths": [
                    {"distance": "12400", "duration": "1530", "strategy": "fastest"},
                    {"distance": "13100", "duration": "1490", "strategy": "shortest"}
                ]
            }
        }"#;
        let response: DirectionResponse = serde_json::from_str(body).unwrap();
        let info = response.into_driving_info().unwrap();
        assert_eq!(info.distance, "12400");
        assert_eq!(info.duration, "1530");
    }

    #[test]
    fn test_status_zero_is_upstream_error() {
        let body = r#"{"status": "0", "info": "INVALID_USER_KEY", "infocode": "10001"}"#;
        let response: DirectionResponse = serde_json::from_str(body).unwrap();
        match response.into_driving_info() {
            Err(InfrastructureError::Upstream(message)) => assert!(message.contains("INVALID_USER_KEY")),
            other => panic!("Expected upstream error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_route_is_upstream_error() {
        let body = r#"{"status": "1", "info": "OK", "route": {"paths": []}}"#;
        let response: DirectionResponse = serde_json::from_str(body).unwrap();
        assert!(response.into_driving_info().is_err());
    }
}
