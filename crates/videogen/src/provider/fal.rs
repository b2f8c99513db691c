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

const DEFAULT_BASE_URL: &str = "https://fal.run";

/// Seedance, hosted on fal
pub(crate) const SEEDANCE_SLUG: &str = "fal-ai/bytedance/seedance/v1/pro/text-to-video";

/// Hailuo, hosted on fal
pub(crate) const HAILUO_SLUG: &str = "fal-ai/minimax/hailuo-02/standard/text-to-video";

/// fal aggregator video provider
///
/// Several backends are only reachable through the fal hosting layer;
/// this adapter covers all of them, parameterized by model slug.
pub(crate) struct FalProvider {
    name: String,
    client: Client,
    api_key: Option<SecretString>,
    base_url: String,
    model_slug: &'static str,
}

impl FalProvider {
    pub fn new(
        name: String,
        api_key: Option<SecretString>,
        base_url: Option<String>,
        model_slug: &'static str,
    ) -> Self {
        Self {
            name,
            client: http_client(),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model_slug,
        }
    }
}

#[derive(Serialize)]
struct FalRequest<'a> {
    prompt: &'a str,
    duration: u32,
}

#[derive(Deserialize)]
struct FalResponse {
    video: Option<FalVideo>,
}

#[derive(Deserialize)]
struct FalVideo {
    url: Option<String>,
}

#[async_trait]
impl VideoProvider for FalProvider {
    async fn generate(&self, job: &VideoJob) -> Result<String> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| VideoGenError::MissingCredentials(self.name.clone()))?;

        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), self.model_slug);
        let prompt = job.styled_prompt();

        let wire_request = FalRequest {
            prompt: &prompt,
            duration: job.duration,
        };

        tracing::debug!(
            provider = %self.name,
            model = self.model_slug,
            duration = job.duration,
            "sending video generation request"
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Key {}", api_key.expose_secret()))
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(provider = %self.name, error = %e, "video generation request failed");
                VideoGenError::ConnectionError(format!("Failed to send request to fal: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!(provider = %self.name, status = %status, "fal API error");

            return Err(match status.as_u16() {
                401 => VideoGenError::AuthenticationFailed(error_text),
                code => VideoGenError::ProviderApiError {
                    status: code,
                    message: error_text,
                },
            });
        }

        let wire_response: FalResponse = response.json().await.map_err(|e| {
            tracing::error!(provider = %self.name, error = %e, "failed to parse fal response");
            VideoGenError::InvalidResponse(format!("malformed response body: {e}"))
        })?;

        wire_response
            .video
            .and_then(|video| video.url)
            .ok_or_else(|| VideoGenError::InvalidResponse("no video URL returned".to_string()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
