use std::sync::Arc;

use imagegen::{ImageJob, ImageRegistry};
use lotaya_core::{GenerationRecord, GenerationResult, TerminalState};
use lotaya_store::GenerationStore;
use uuid::Uuid;
use videogen::{VideoJob, VideoRegistry};

use crate::{
    error::GatewayError,
    types::{
        ImageGenerationRequest, ImageGenerationResponse, TextToVideoRequest, TextToVideoResponse,
        VideoGenerationRequest, VideoGenerationResponse,
    },
    validate,
};

/// Drives the generation lifecycle: validate, create a record, dispatch
/// to the named provider, write the terminal state, answer the caller
///
/// Provider failures are reported, not retried; a client that wants
/// another attempt resubmits. Persistence failures are logged and
/// tolerated so generation keeps working when the store is down.
pub struct Orchestrator {
    store: Arc<dyn GenerationStore>,
    images: ImageRegistry,
    videos: VideoRegistry,
}

impl Orchestrator {
    pub fn new(store: Arc<dyn GenerationStore>, images: ImageRegistry, videos: VideoRegistry) -> Self {
        Self { store, images, videos }
    }

    pub(crate) fn store(&self) -> &Arc<dyn GenerationStore> {
        &self.store
    }

    pub(crate) fn image_models(&self) -> Vec<String> {
        self.images.names()
    }

    pub(crate) fn video_models(&self) -> Vec<String> {
        self.videos.names()
    }

    /// Handle an image generation request end to end
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] for invalid input or an unknown model;
    /// no record exists in that case
    pub async fn generate_image(
        &self,
        request: ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse, GatewayError> {
        let prompt = validate::prompt(&request.prompt)?;
        if !self.images.contains(&request.model) {
            return Err(GatewayError::UnknownModel {
                kind: "image",
                name: request.model,
            });
        }
        let size = validate::size(request.size.as_deref())?;
        let count = validate::count(request.num_images)?;

        let record =
            GenerationRecord::image(prompt, &request.model, request.style.clone(), &size, count);
        let id = record.generation_id;
        self.persist_create(&record).await;

        let job = ImageJob {
            prompt: prompt.to_owned(),
            count,
            size,
            style: request.style,
        };

        match self.images.generate(&request.model, &job).await {
            Ok(images) => {
                tracing::info!(%id, model = %request.model, count = images.len(), "image generation completed");
                self.persist_terminal(id, TerminalState::Completed(GenerationResult::Images(images.clone())))
                    .await;

                Ok(ImageGenerationResponse {
                    success: true,
                    message: "Image generation completed".to_owned(),
                    model_used: request.model,
                    prompt: prompt.to_owned(),
                    generation_id: id.to_string(),
                    images: Some(images),
                    error: None,
                })
            }
            Err(e) => {
                let reason = e.to_string();
                tracing::error!(%id, model = %request.model, error = %reason, "image generation failed");
                self.persist_terminal(id, TerminalState::Failed(reason.clone())).await;

                Ok(ImageGenerationResponse {
                    success: false,
                    message: "Image generation failed".to_owned(),
                    model_used: request.model,
                    prompt: prompt.to_owned(),
                    generation_id: id.to_string(),
                    images: None,
                    error: Some(reason),
                })
            }
        }
    }

    /// Handle a video generation request end to end
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] for invalid input or an unknown model
    pub async fn generate_video(
        &self,
        request: VideoGenerationRequest,
    ) -> Result<VideoGenerationResponse, GatewayError> {
        let prompt = validate::prompt(&request.prompt)?;
        if !self.videos.contains(&request.model) {
            return Err(GatewayError::UnknownModel {
                kind: "video",
                name: request.model,
            });
        }
        let duration = validate::duration(request.duration)?;

        let record = GenerationRecord::video(prompt, &request.model, duration);
        let id = record.generation_id;
        self.persist_create(&record).await;

        let job = VideoJob {
            prompt: prompt.to_owned(),
            duration,
            style: None,
        };

        match self.videos.generate(&request.model, &job).await {
            Ok(video_url) => {
                tracing::info!(%id, model = %request.model, "video generation completed");
                self.persist_terminal(id, TerminalState::Completed(GenerationResult::Video(video_url.clone())))
                    .await;

                Ok(VideoGenerationResponse {
                    success: true,
                    message: "Video generation completed".to_owned(),
                    model_used: request.model,
                    prompt: prompt.to_owned(),
                    generation_id: id.to_string(),
                    video_url: Some(video_url),
                    error: None,
                })
            }
            Err(e) => {
                let reason = e.to_string();
                tracing::error!(%id, model = %request.model, error = %reason, "video generation failed");
                self.persist_terminal(id, TerminalState::Failed(reason.clone())).await;

                Ok(VideoGenerationResponse {
                    success: false,
                    message: "Video generation failed".to_owned(),
                    model_used: request.model,
                    prompt: prompt.to_owned(),
                    generation_id: id.to_string(),
                    video_url: None,
                    error: Some(reason),
                })
            }
        }
    }

    /// Handle a script-to-video conversion end to end
    ///
    /// The script rides through the same video dispatch with the
    /// default clip length.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] for invalid input or an unknown model
    pub async fn convert_script(
        &self,
        request: TextToVideoRequest,
    ) -> Result<TextToVideoResponse, GatewayError> {
        let script = validate::script(&request.script)?;
        if !self.videos.contains(&request.model) {
            return Err(GatewayError::UnknownModel {
                kind: "video",
                name: request.model,
            });
        }

        let record = GenerationRecord::script(
            script,
            &request.model,
            request.style.clone(),
            validate::DEFAULT_DURATION_SECS,
        );
        let id = record.generation_id;
        self.persist_create(&record).await;

        let job = VideoJob {
            prompt: script.to_owned(),
            duration: validate::DEFAULT_DURATION_SECS,
            style: request.style,
        };

        match self.videos.generate(&request.model, &job).await {
            Ok(video_url) => {
                tracing::info!(%id, model = %request.model, "script conversion completed");
                self.persist_terminal(id, TerminalState::Completed(GenerationResult::Video(video_url.clone())))
                    .await;

                Ok(TextToVideoResponse {
                    success: true,
                    message: "Text to video conversion completed".to_owned(),
                    script: script.to_owned(),
                    model_used: request.model,
                    conversion_id: id.to_string(),
                    video_url: Some(video_url),
                    error: None,
                })
            }
            Err(e) => {
                let reason = e.to_string();
                tracing::error!(%id, model = %request.model, error = %reason, "script conversion failed");
                self.persist_terminal(id, TerminalState::Failed(reason.clone())).await;

                Ok(TextToVideoResponse {
                    success: false,
                    message: "Text to video conversion failed".to_owned(),
                    script: script.to_owned(),
                    model_used: request.model,
                    conversion_id: id.to_string(),
                    video_url: None,
                    error: Some(reason),
                })
            }
        }
    }

    /// Insert the processing record; failures degrade, never abort
    async fn persist_create(&self, record: &GenerationRecord) {
        if let Err(e) = self.store.create(record).await {
            tracing::warn!(
                id = %record.generation_id,
                error = %e,
                "failed to persist generation record, continuing without persistence"
            );
        }
    }

    /// Write the terminal state; failures degrade, never abort
    async fn persist_terminal(&self, id: Uuid, terminal: TerminalState) {
        if let Err(e) = self.store.update_terminal(id, terminal).await {
            tracing::warn!(%id, error = %e, "failed to persist terminal state");
        }
    }
}
