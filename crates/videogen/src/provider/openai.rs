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

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const MODEL: &str = "sora-1.0";

/// OpenAI Sora video provider
pub(crate) struct OpenAiProvider {
    name: String,
    client: Client,
    api_key: Option<SecretString>,
    base_url: String,
}

impl OpenAiProvider {
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
struct SoraRequest<'a> {
    model: &'static str,
    prompt: &'a str,
    seconds: u32,
}

#[derive(Deserialize)]
struct SoraResponse {
    #[serde(default)]
    data: Vec<SoraClip>,
}

#[derive(Deserialize)]
struct SoraClip {
    url: Option<String>,
}

#[async_trait]
impl VideoProvider for OpenAiProvider {
    async fn generate(&self, job: &VideoJob) -> Result<String> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| VideoGenError::MissingCredentials(self.name.clone()))?;

        let url = format!("{}/videos/generations", self.base_url.trim_end_matches('/'));
        let prompt = job.styled_prompt();

        let wire_request = SoraRequest {
            model: MODEL,
            prompt: &prompt,
            seconds: job.duration,
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
                VideoGenError::ConnectionError(format!("Failed to send request to Sora: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!(provider = %self.name, status = %status, "Sora API error");

            return Err(match status.as_u16() {
                401 => VideoGenError::AuthenticationFailed(error_text),
                code => VideoGenError::ProviderApiError {
                    status: code,
                    message: error_text,
                },
            });
        }

        let wire_response: SoraResponse = response.json().await.map_err(|e| {
            tracing::error!(provider = %self.name, error = %e, "failed to parse Sora response");
            VideoGenError::InvalidResponse(format!("malformed response body: {e}"))
        })?;

        wire_response
            .data
            .into_iter()
            .find_map(|clip| clip.url)
            .ok_or_else(|| VideoGenError::InvalidResponse("no clip URL returned".to_string()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
