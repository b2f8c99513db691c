use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::ImageProvider;
use crate::{
    error::{ImageGenError, Result},
    http_client::http_client,
    types::{ImageJob, inline_media},
};

/// Default xAI API base URL
const DEFAULT_BASE_URL: &str = "https://api.x.ai/v1";

/// Model served through this adapter
const MODEL: &str = "grok-2-image";

const MAX_IMAGES: u32 = 10;

/// xAI image provider
///
/// The generations endpoint answers with remote URLs; the adapter
/// performs the second fetch itself so callers always receive inline
/// payloads.
pub(crate) struct XaiProvider {
    name: String,
    client: Client,
    api_key: Option<SecretString>,
    base_url: String,
}

impl XaiProvider {
    pub fn new(name: String, api_key: Option<SecretString>, base_url: Option<String>) -> Self {
        Self {
            name,
            client: http_client(),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Fetch a generated image and inline it
    async fn fetch_image(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await.map_err(|e| {
            ImageGenError::ConnectionError(format!("Failed to fetch generated image: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageGenError::ProviderApiError {
                status: status.as_u16(),
                message: format!("image fetch from {url} failed"),
            });
        }

        let mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/png")
            .to_string();

        let bytes = response.bytes().await.map_err(|e| {
            ImageGenError::ConnectionError(format!("Failed to read generated image body: {e}"))
        })?;

        Ok(inline_media(&mime, &bytes))
    }
}

/// Wire format for the xAI image generation request
#[derive(Serialize)]
struct XaiImageRequest<'a> {
    model: &'static str,
    prompt: &'a str,
    n: u32,
}

/// Wire format for the xAI image generation response
#[derive(Deserialize)]
struct XaiImageResponse {
    data: Vec<XaiImageData>,
}

#[derive(Deserialize)]
struct XaiImageData {
    url: Option<String>,
}

#[async_trait]
impl ImageProvider for XaiProvider {
    async fn generate(&self, job: &ImageJob) -> Result<Vec<String>> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| ImageGenError::MissingCredentials(self.name.clone()))?;

        let url = format!("{}/images/generations", self.base_url.trim_end_matches('/'));
        let count = job.count.min(MAX_IMAGES);
        let prompt = job.styled_prompt();

        let wire_request = XaiImageRequest {
            model: MODEL,
            prompt: &prompt,
            n: count,
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
                ImageGenError::ConnectionError(format!("Failed to send request to xAI: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!(provider = %self.name, status = %status, "xAI image API error");

            return Err(match status.as_u16() {
                401 => ImageGenError::AuthenticationFailed(error_text),
                code => ImageGenError::ProviderApiError {
                    status: code,
                    message: error_text,
                },
            });
        }

        let wire_response: XaiImageResponse = response.json().await.map_err(|e| {
            tracing::error!(provider = %self.name, error = %e, "failed to parse xAI image response");
            ImageGenError::InvalidResponse(format!("malformed response body: {e}"))
        })?;

        if wire_response.data.is_empty() {
            return Err(ImageGenError::InvalidResponse("no images returned".to_string()));
        }

        let mut images = Vec::with_capacity(wire_response.data.len());
        for entry in wire_response.data {
            let url = entry.url.ok_or_else(|| {
                ImageGenError::InvalidResponse("image entry without a URL".to_string())
            })?;
            images.push(self.fetch_image(&url).await?);
        }

        Ok(images)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn max_images(&self) -> u32 {
        MAX_IMAGES
    }
}
