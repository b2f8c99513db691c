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

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const MODEL: &str = "veo-3.0-generate-001";

/// Google Veo video provider, `:predict` wire format
pub(crate) struct GoogleProvider {
    name: String,
    client: Client,
    api_key: Option<SecretString>,
    base_url: String,
}

impl GoogleProvider {
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
    duration_seconds: u32,
}

#[derive(Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    video_uri: Option<String>,
}

#[async_trait]
impl VideoProvider for GoogleProvider {
    async fn generate(&self, job: &VideoJob) -> Result<String> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| VideoGenError::MissingCredentials(self.name.clone()))?;

        let url = format!(
            "{}/models/{MODEL}:predict",
            self.base_url.trim_end_matches('/')
        );
        let prompt = job.styled_prompt();

        let wire_request = PredictRequest {
            instances: vec![PredictInstance { prompt: &prompt }],
            parameters: PredictParameters {
                duration_seconds: job.duration,
            },
        };

        tracing::debug!(provider = %self.name, duration = job.duration, "sending video generation request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key.expose_secret())
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(provider = %self.name, error = %e, "video generation request failed");
                VideoGenError::ConnectionError(format!("Failed to send request to Veo: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!(provider = %self.name, status = %status, "Veo predict API error");

            return Err(match status.as_u16() {
                401 | 403 => VideoGenError::AuthenticationFailed(error_text),
                code => VideoGenError::ProviderApiError {
                    status: code,
                    message: error_text,
                },
            });
        }

        let wire_response: PredictResponse = response.json().await.map_err(|e| {
            tracing::error!(provider = %self.name, error = %e, "failed to parse Veo predict response");
            VideoGenError::InvalidResponse(format!("malformed response body: {e}"))
        })?;

        wire_response
            .predictions
            .into_iter()
            .find_map(|prediction| prediction.video_uri)
            .ok_or_else(|| VideoGenError::InvalidResponse("no video URI returned".to_string()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
