use secrecy::SecretString;
use serde::Deserialize;

/// Configuration for a single image provider
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageProviderConfig {
    /// Provider type
    #[serde(rename = "type")]
    pub provider_type: ImageProviderType,
    /// API key; absent or empty keys fail per-request, not at startup
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<String>,
    /// Substitute a locally generated placeholder when the provider
    /// fails, instead of reporting the failure (best-effort mode)
    #[serde(default)]
    pub fallback: bool,
}

/// Supported image generation backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageProviderType {
    /// Groq-hosted diffusion models, OpenAI-style wire format
    Groq,
    /// xAI image generation; results arrive as remote URLs
    Xai,
    /// Google Imagen via the `:predict` endpoint
    Gemini,
}

/// Configuration for a single video provider
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VideoProviderConfig {
    /// Provider type
    #[serde(rename = "type")]
    pub provider_type: VideoProviderType,
    /// API key; absent or empty keys fail per-request, not at startup
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Supported video generation backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoProviderType {
    /// Runway text-to-video tasks
    Runway,
    /// Kling text-to-video
    Kling,
    /// Google Veo via the `:predict` endpoint
    Veo3,
    /// OpenAI Sora video generations
    Sora,
    /// ByteDance Seedance, served through the fal aggregator
    Seedance,
    /// MiniMax Hailuo, served through the fal aggregator
    Hailuo,
}
