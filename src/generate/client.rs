//! HTTP client for the reply generation endpoint.

use reqwest::Client;
use std::time::{Duration, Instant};

use crate::config::ApiConfig;

use super::error::GenerateError;
use super::types::{GenerateRequest, GenerateResponse};

/// Path appended to the configured base URL.
pub const GENERATE_PATH: &str = "/api/generate";

/// Posts drafts to `<base_url>/api/generate`.
///
/// One call to [`GenerateClient::generate`] issues exactly one request.
/// There is no retry layer.
#[derive(Clone)]
pub struct GenerateClient {
    client: Client,
    endpoint: String,
}

impl GenerateClient {
    pub fn new(config: &ApiConfig) -> Result<Self, GenerateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint_url(&config.base_url),
        })
    }

    /// Full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send `email_content` verbatim and return the generated reply.
    ///
    /// Blank input is rejected locally with [`GenerateError::EmptyInput`].
    pub async fn generate(&self, email_content: &str) -> Result<String, GenerateError> {
        if email_content.trim().is_empty() {
            return Err(GenerateError::EmptyInput);
        }

        let request = GenerateRequest::new(email_content);

        tracing::debug!(
            url = %self.endpoint,
            content_len = email_content.len(),
            "Sending generate request"
        );

        let start = Instant::now();
        let response = self.client.post(&self.endpoint).json(&request).send().await?;
        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::warn!(
                status = %status,
                latency_ms,
                "Generate endpoint returned an error status"
            );

            return Err(GenerateError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let body: GenerateResponse = serde_json::from_str(&text)?;

        tracing::info!(
            status = %status,
            latency_ms,
            response_len = body.response.len(),
            "Generate request completed"
        );

        Ok(body.response)
    }
}

fn endpoint_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), GENERATE_PATH)
}
