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

const DEFAULT_BASE_URL: &str = "https://api.klingai.com";

const MODEL: &str = "kling-v1-6";

/// Kling video provider
pub(crate) struct KlingProvider {
    name: String,
    client: Client,
    api_key: Option<SecretString>,
    base_url: String,
}

impl KlingProvider {
    pub fn new(name: String, api_key: Option<SecretString>, base_url: Option<String>) -> Self {
        Self {
            name,
            client: http_client(),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

#[derive(Serialize)]
struct KlingRequest<'a> {
    model_name: &'static str,
    prompt: &'a str,
    duration: u32,
}

#[derive(Deserialize)]
struct KlingResponse {
    data: Option<KlingData>,
}

#[derive(Deserialize)]
struct KlingData {
    video_url: Option<String>,
}

#[async_trait]
impl VideoProvider for KlingProvider {
    async fn generate(&self, job: &VideoJob) -> Result<String> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| VideoGenError::MissingCredentials(self.name.clone()))?;

        let url = format!("{}/v1/videos/text2video", self.base_url.trim_end_matches('/'));
        let prompt = job.styled_prompt();

        let wire_request = KlingRequest {
            model_name: MODEL,
            prompt: &prompt,
            duration: job.duration,
        };

        tracing::debug!(provider = %self.name, duration = job.duration, "sending video generation request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key.expose_secret()))
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(provider = %self.name, error = %e, "video generation request failed");
                VideoGenError::ConnectionError(format!("Failed to send request to Kling: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!(provider = %self.name, status = %status, "Kling API error");

            return Err(match status.as_u16() {
                401 => VideoGenError::AuthenticationFailed(error_text),
                code => VideoGenError::ProviderApiError {
                    status: code,
                    message: error_text,
                },
            });
        }

        let wire_response: KlingResponse = response.json().await.map_err(|e| {
            tracing::error!(provider = %self.name, error = %e, "failed to parse Kling response");
            VideoGenError::InvalidResponse(format!("malformed response body: {e}"))
        })?;

        wire_response
            .data
            .and_then(|data| data.video_url)
            .ok_or_else(|| VideoGenError::InvalidResponse("no video URL returned".to_string()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
