#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! HTTP surface of the Lotaya gateway
//!
//! Assembles the axum router over the orchestrator, which owns the
//! store handle and the provider registries. Everything is constructed
//! at startup and passed down explicitly; no ambient state.

mod cors;
mod error;
mod health;
mod models;
mod orchestrate;
mod status;
mod types;
mod validate;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use imagegen::ImageRegistry;
use lotaya_config::Config;
use tower_http::trace::TraceLayer;
use videogen::VideoRegistry;

pub use error::GatewayError;
pub use health::HealthResponse;
pub use models::ModelCatalog;
pub use orchestrate::Orchestrator;
pub use status::GenerationStatusResponse;
pub use types::{
    ImageGenerationRequest, ImageGenerationResponse, TextToVideoRequest, TextToVideoResponse,
    VideoGenerationRequest, VideoGenerationResponse,
};

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the store connection string is malformed
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8001)));

        let store = lotaya_store::from_config(&config.store)?;
        let images = ImageRegistry::from_config(&config.image_providers);
        let videos = VideoRegistry::from_config(&config.video_providers);
        let orchestrator = Arc::new(Orchestrator::new(store, images, videos));

        let mut app = Router::new()
            .route("/api/models", get(model_catalog))
            .route("/api/generate/image", post(generate_image))
            .route("/api/generate/video", post(generate_video))
            .route("/api/convert/text-to-video", post(convert_text_to_video))
            .route("/api/generations/{id}", get(generation_status));

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, get(health::health_handler));
        }

        let mut app = app.with_state(orchestrator);

        // Apply middleware layers (innermost first)

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        // CORS
        if let Some(ref cors_config) = config.server.cors {
            app = app.layer(cors::cors_layer(cors_config));
        }

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

/// Handle model catalog requests
async fn model_catalog(State(orchestrator): State<Arc<Orchestrator>>) -> Json<ModelCatalog> {
    Json(models::catalog(&orchestrator))
}

/// Handle image generation requests
async fn generate_image(
    State(orchestrator): State<Arc<Orchestrator>>,
    Json(request): Json<ImageGenerationRequest>,
) -> Result<Json<ImageGenerationResponse>, GatewayError> {
    tracing::debug!(model = %request.model, "image generation handler called");

    // Spawned so a client disconnect cannot cancel an in-flight
    // generation; the terminal state is still written
    let response = tokio::spawn(async move { orchestrator.generate_image(request).await })
        .await
        .map_err(|e| GatewayError::Internal(format!("generation task failed: {e}")))??;

    Ok(Json(response))
}

/// Handle video generation requests
async fn generate_video(
    State(orchestrator): State<Arc<Orchestrator>>,
    Json(request): Json<VideoGenerationRequest>,
) -> Result<Json<VideoGenerationResponse>, GatewayError> {
    tracing::debug!(model = %request.model, "video generation handler called");

    let response = tokio::spawn(async move { orchestrator.generate_video(request).await })
        .await
        .map_err(|e| GatewayError::Internal(format!("generation task failed: {e}")))??;

    Ok(Json(response))
}

/// Handle script-to-video conversion requests
async fn convert_text_to_video(
    State(orchestrator): State<Arc<Orchestrator>>,
    Json(request): Json<TextToVideoRequest>,
) -> Result<Json<TextToVideoResponse>, GatewayError> {
    tracing::debug!(model = %request.model, "script conversion handler called");

    let response = tokio::spawn(async move { orchestrator.convert_script(request).await })
        .await
        .map_err(|e| GatewayError::Internal(format!("generation task failed: {e}")))??;

    Ok(Json(response))
}

/// Handle status polling requests
async fn generation_status(
    State(orchestrator): State<Arc<Orchestrator>>,
    Path(id): Path<String>,
) -> Json<GenerationStatusResponse> {
    Json(status::lookup(orchestrator.store(), &id).await)
}
