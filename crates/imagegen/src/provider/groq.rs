use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::ImageProvider;
use crate::{
    error::{ImageGenError, Result},
    http_client::http_client,
    types::{ImageJob, inline_encoded},
};

/// Default Groq API base URL
const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Model served through this adapter
const MODEL: &str = "flux-1-schnell";

/// Groq caps a single request at four images
const MAX_IMAGES: u32 = 4;

/// Groq image provider
///
/// OpenAI-style wire format; images arrive inline as `b64_json`.
pub(crate) struct GroqProvider {
    name: String,
    client: Client,
    api_key: Option<SecretString>,
    base_url: String,
}

impl GroqProvider {
    pub fn new(name: String, api_key: Option<SecretString>, base_url: Option<String>) -> Self {
        Self {
            name,
            client: http_client(),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

/// Wire format for the Groq image generation request
#[derive(Serialize)]
struct GroqImageRequest<'a> {
    model: &'static str,
    prompt: &'a str,
    n: u32,
    size: &'a str,
    response_format: &'static str,
}

/// Wire format for the Groq image generation response
#[derive(Deserialize)]
struct GroqImageResponse {
    data: Vec<GroqImageData>,
}

#[derive(Deserialize)]
struct GroqImageData {
    b64_json: Option<String>,
}

#[async_trait]
impl ImageProvider for GroqProvider {
    async fn generate(&self, job: &ImageJob) -> Result<Vec<String>> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| ImageGenError::MissingCredentials(self.name.clone()))?;

        let url = format!("{}/images/generations", self.base_url.trim_end_matches('/'));
        let count = job.count.min(MAX_IMAGES);
        let prompt = job.styled_prompt();

        let wire_request = GroqImageRequest {
            model: MODEL,
            prompt: &prompt,
            n: count,
            size: &job.size,
            response_format: "b64_json",
        };

        tracing::debug!(provider = %self.name, count, "sending image generation request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key.expose_secret()))
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(provider = %self.name, error = %e, "image generation request failed");
                ImageGenError::ConnectionError(format!("Failed to send request to Groq: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!(provider = %self.name, status = %status, "Groq image API error");

            return Err(match status.as_u16() {
                401 => ImageGenError::AuthenticationFailed(error_text),
                code => ImageGenError::ProviderApiError {
                    status: code,
                    message: error_text,
                },
            });
        }

        let wire_response: GroqImageResponse = response.json().await.map_err(|e| {
            tracing::error!(provider = %self.name, error = %e, "failed to parse Groq image response");
            ImageGenError::InvalidResponse(format!("malformed response body: {e}"))
        })?;

        if wire_response.data.is_empty() {
            return Err(ImageGenError::InvalidResponse("no images returned".to_string()));
        }

        wire_response
            .data
            .into_iter()
            .map(|entry| {
                entry
                    .b64_json
                    .map(|b64| inline_encoded("image/png", &b64))
                    .ok_or_else(|| {
                        ImageGenError::InvalidResponse("image entry without b64_json payload".to_string())
                    })
            })
            .collect()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn max_images(&self) -> u32 {
        MAX_IMAGES
    }
}
