use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::VideoProvider;
use crate::{
    error::{Result, VideoGenError},
    http_client::http_client,
    types::VideoJob,
};

/// Default Runway API base URL
const DEFAULT_BASE_URL: &str = "https://api.dev.runwayml.com";

/// Model served through this adapter
const MODEL: &str = "gen3a_turbo";

/// API version header Runway requires on every call
const API_VERSION: &str = "2024-11-06";

/// Runway video provider
pub(crate) struct RunwayProvider {
    name: String,
    client: Client,
    api_key: Option<SecretString>,
    base_url: String,
}

impl RunwayProvider {
    pub fn new(name: String, api_key: Option<SecretString>, base_url: Option<String>) -> Self {
        Self {
            name,
            client: http_client(),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

/// Wire format for the Runway text-to-video request
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RunwayRequest<'a> {
    model: &'static str,
    prompt_text: &'a str,
    duration: u32,
}

/// Wire format for the Runway text-to-video response
#[derive(Deserialize)]
struct RunwayResponse {
    #[serde(default)]
    output: Vec<String>,
}

#[async_trait]
impl VideoProvider for RunwayProvider {
    async fn generate(&self, job: &VideoJob) -> Result<String> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| VideoGenError::MissingCredentials(self.name.clone()))?;

        let url = format!("{}/v1/text_to_video", self.base_url.trim_end_matches('/'));
        let prompt = job.styled_prompt();

        let wire_request = RunwayRequest {
            model: MODEL,
            prompt_text: &prompt,
            duration: job.duration,
        };

        tracing::debug!(provider = %self.name, duration = job.duration, "sending video generation request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key.expose_secret()))
            .header("X-Runway-Version", API_VERSION)
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(provider = %self.name, error = %e, "video generation request failed");
                VideoGenError::ConnectionError(format!("Failed to send request to Runway: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!(provider = %self.name, status = %status, "Runway API error");

            return Err(match status.as_u16() {
                401 => VideoGenError::AuthenticationFailed(error_text),
                code => VideoGenError::ProviderApiError {
                    status: code,
                    message: error_text,
                },
            });
        }

        let wire_response: RunwayResponse = response.json().await.map_err(|e| {
            tracing::error!(provider = %self.name, error = %e, "failed to parse Runway response");
            VideoGenError::InvalidResponse(format!("malformed response body: {e}"))
        })?;

        wire_response
            .output
            .into_iter()
            .next()
            .ok_or_else(|| VideoGenError::InvalidResponse("no output clip returned".to_string()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
