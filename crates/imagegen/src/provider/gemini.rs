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

/// Default Generative Language API base URL
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model served through this adapter
const MODEL: &str = "imagen-3.0-generate-002";

const MAX_IMAGES: u32 = 4;

/// Gemini (Imagen) image provider
///
/// Google's `:predict` wire format; images arrive inline as
/// `bytesBase64Encoded` predictions.
pub(crate) struct GeminiProvider {
    name: String,
    client: Client,
    api_key: Option<SecretString>,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(name: String, api_key: Option<SecretString>, base_url: Option<String>) -> Self {
        Self {
            name,
            client: http_client(),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

/// Map a `"{width}x{height}"` dimension string to the closest supported
/// aspect ratio; the predict API takes ratios, not pixel sizes
fn aspect_ratio(size: &str) -> &'static str {
    let Some((width, height)) = size
        .split_once('x')
        .and_then(|(w, h)| Some((w.parse::<u32>().ok()?, h.parse::<u32>().ok()?)))
    else {
        return "1:1";
    };

    if width > height {
        "16:9"
    } else if height > width {
        "9:16"
    } else {
        "1:1"
    }
}

/// Wire format for the predict request
#[derive(Serialize)]
struct PredictRequest<'a> {
    instances: Vec<PredictInstance<'a>>,
    parameters: PredictParameters,
}

#[derive(Serialize)]
struct PredictInstance<'a> {
    prompt: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictParameters {
    sample_count: u32,
    aspect_ratio: &'static str,
}

/// Wire format for the predict response
#[derive(Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: Option<String>,
    mime_type: Option<String>,
}

#[async_trait]
impl ImageProvider for GeminiProvider {
    async fn generate(&self, job: &ImageJob) -> Result<Vec<String>> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| ImageGenError::MissingCredentials(self.name.clone()))?;

        let url = format!(
            "{}/models/{MODEL}:predict",
            self.base_url.trim_end_matches('/')
        );
        let count = job.count.min(MAX_IMAGES);
        let prompt = job.styled_prompt();

        let wire_request = PredictRequest {
            instances: vec![PredictInstance { prompt: &prompt }],
            parameters: PredictParameters {
                sample_count: count,
                aspect_ratio: aspect_ratio(&job.size),
            },
        };

        tracing::debug!(provider = %self.name, count, "sending image generation request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key.expose_secret())
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(provider = %self.name, error = %e, "image generation request failed");
                ImageGenError::ConnectionError(format!("Failed to send request to Gemini: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!(provider = %self.name, status = %status, "Gemini predict API error");

            return Err(match status.as_u16() {
                401 | 403 => ImageGenError::AuthenticationFailed(error_text),
                code => ImageGenError::ProviderApiError {
                    status: code,
                    message: error_text,
                },
            });
        }

        let wire_response: PredictResponse = response.json().await.map_err(|e| {
            tracing::error!(provider = %self.name, error = %e, "failed to parse Gemini predict response");
            ImageGenError::InvalidResponse(format!("malformed response body: {e}"))
        })?;

        if wire_response.predictions.is_empty() {
            return Err(ImageGenError::InvalidResponse("no predictions returned".to_string()));
        }

        wire_response
            .predictions
            .into_iter()
            .map(|prediction| {
                let mime = prediction.mime_type.unwrap_or_else(|| "image/png".to_string());
                prediction
                    .bytes_base64_encoded
                    .map(|b64| inline_encoded(&mime, &b64))
                    .ok_or_else(|| {
                        ImageGenError::InvalidResponse("prediction without image bytes".to_string())
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
