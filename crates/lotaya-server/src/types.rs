use serde::{Deserialize, Serialize};

/// Image generation request body
#[derive(Debug, Deserialize)]
pub struct ImageGenerationRequest {
    pub prompt: String,
    /// Provider name from the image model enumeration
    pub model: String,
    #[serde(default)]
    pub style: Option<String>,
    /// `"{width}x{height}"`, defaults to 1024x1024
    #[serde(default)]
    pub size: Option<String>,
    /// Defaults to 1; clamped to the provider's maximum
    #[serde(default)]
    pub num_images: Option<u32>,
}

/// Image generation response envelope
#[derive(Debug, Serialize)]
pub struct ImageGenerationResponse {
    pub success: bool,
    pub message: String,
    pub model_used: String,
    pub prompt: String,
    pub generation_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Video generation request body
#[derive(Debug, Deserialize)]
pub struct VideoGenerationRequest {
    pub prompt: String,
    /// Provider name from the video model enumeration
    pub model: String,
    /// Clip length in seconds, defaults to 10
    #[serde(default)]
    pub duration: Option<u32>,
}

/// Video generation response envelope
#[derive(Debug, Serialize)]
pub struct VideoGenerationResponse {
    pub success: bool,
    pub message: String,
    pub model_used: String,
    pub prompt: String,
    pub generation_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Script-to-video conversion request body
#[derive(Debug, Deserialize)]
pub struct TextToVideoRequest {
    pub script: String,
    /// Provider name from the video model enumeration
    pub model: String,
    #[serde(default)]
    pub style: Option<String>,
}

/// Script-to-video conversion response envelope
#[derive(Debug, Serialize)]
pub struct TextToVideoResponse {
    pub success: bool,
    pub message: String,
    pub script: String,
    pub model_used: String,
    pub conversion_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
