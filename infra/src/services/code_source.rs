//! Client for the peer code-issuing service

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use dj_core::domain::entities::CodeType;
use dj_core::errors::DomainError;
use dj_core::services::verification::CodeSource;

use crate::InfrastructureError;

#[derive(Debug, Serialize)]
struct IssueCodeRequest {
    length: usize,
    #[serde(rename = "type")]
    code_type: i32,
}

#[derive(Debug, Deserialize)]
struct IssueCodeResponse {
    code: String,
}

/// Obtains codes from `POST {base_url}/verify-code`
pub struct HttpCodeSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCodeSource {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/verify-code", base_url.trim_end_matches('/')),
        }
    }

    async fn request(&self, length: usize, code_type: CodeType) -> Result<String, InfrastructureError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&IssueCodeRequest {
                length,
                code_type: code_type.as_i32(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(InfrastructureError::Upstream(format!(
                "code service answered {}",
                response.status()
            )));
        }

        let body: IssueCodeResponse = response.json().await?;
        if body.code.chars().count() != length {
            return Err(InfrastructureError::Upstream(format!(
                "code service returned {} symbols, expected {}",
                body.code.chars().count(),
                length
            )));
        }
        Ok(body.code)
    }
}

#[async_trait]
impl CodeSource for HttpCodeSource {
    async fn issue(&self, length: usize, code_type: CodeType) -> Result<String, DomainError> {
        self.request(length, code_type).await.map_err(|e| {
            tracing::warn!(endpoint = %self.endpoint, error = %e, "Code service request failed");
            DomainError::from(e)
        })
    }
}
