//! Mock provider backend for integration tests
//!
//! Speaks every wire dialect the adapters know — OpenAI-style image
//! generations (inline and URL-based), Google `:predict`, and the four
//! video shapes — returning canned payloads.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

/// 1x1 transparent PNG every image endpoint serves
pub const PNG_B64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

/// Mock backend that returns predictable responses
pub struct MockProvider {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    addr: SocketAddr,
    image_count: AtomicU32,
    video_count: AtomicU32,
    /// Number of requests to fail before succeeding (0 = never fail)
    fail_count: AtomicU32,
}

impl MockProvider {
    /// Start the mock server, returning immediately
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(0).await
    }

    /// Start a mock server that fails the first `n` requests with 500
    pub async fn start_failing(n: u32) -> anyhow::Result<Self> {
        Self::start_inner(n).await
    }

    async fn start_inner(fail_count: u32) -> anyhow::Result<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let state = Arc::new(MockState {
            addr,
            image_count: AtomicU32::new(0),
            video_count: AtomicU32::new(0),
            fail_count: AtomicU32::new(fail_count),
        });

        let app = Router::new()
            .route("/groq/images/generations", routing::post(handle_inline_images))
            .route("/xai/images/generations", routing::post(handle_url_images))
            .route("/files/{name}", routing::get(handle_file))
            .route("/gemini/models/{model}", routing::post(handle_predict_images))
            .route("/runway/v1/text_to_video", routing::post(handle_runway))
            .route("/kling/v1/videos/text2video", routing::post(handle_kling))
            .route("/google/models/{model}", routing::post(handle_predict_video))
            .route("/sora/videos/generations", routing::post(handle_sora))
            .route("/fal/{*slug}", routing::post(handle_fal))
            .with_state(Arc::clone(&state));

        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for a given wire dialect prefix (e.g. "groq")
    pub fn dialect_url(&self, dialect: &str) -> String {
        format!("http://{}/{dialect}", self.addr)
    }

    /// Canned clip URL every video endpoint returns
    pub fn clip_url(&self) -> String {
        format!("http://{}/clips/out.mp4", self.addr)
    }

    /// Number of image generation requests received
    pub fn image_count(&self) -> u32 {
        self.state.image_count.load(Ordering::Relaxed)
    }

    /// Number of video generation requests received
    pub fn video_count(&self) -> u32 {
        self.state.video_count.load(Ordering::Relaxed)
    }
}

impl Drop for MockProvider {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

impl MockState {
    /// Consume one failure token; true means answer with 500
    fn should_fail(&self) -> bool {
        let remaining = self.fail_count.load(Ordering::Relaxed);
        if remaining > 0 {
            self.fail_count.fetch_sub(1, Ordering::Relaxed);
            return true;
        }
        false
    }

    fn clip_url(&self) -> String {
        format!("http://{}/clips/out.mp4", self.addr)
    }
}

fn failure_response() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "error": { "message": "mock provider intentional failure" }
        })),
    )
        .into_response()
}

// -- Image dialects --

#[derive(Debug, Deserialize)]
struct OpenAiStyleImageRequest {
    #[allow(dead_code)]
    prompt: String,
    #[serde(default = "one")]
    n: u32,
}

fn one() -> u32 {
    1
}

async fn handle_inline_images(
    State(state): State<Arc<MockState>>,
    Json(req): Json<OpenAiStyleImageRequest>,
) -> axum::response::Response {
    state.image_count.fetch_add(1, Ordering::Relaxed);
    if state.should_fail() {
        return failure_response();
    }

    let data: Vec<_> = (0..req.n)
        .map(|_| serde_json::json!({ "b64_json": PNG_B64 }))
        .collect();

    Json(serde_json::json!({ "data": data })).into_response()
}

async fn handle_url_images(
    State(state): State<Arc<MockState>>,
    Json(req): Json<OpenAiStyleImageRequest>,
) -> axum::response::Response {
    state.image_count.fetch_add(1, Ordering::Relaxed);
    if state.should_fail() {
        return failure_response();
    }

    let data: Vec<_> = (0..req.n)
        .map(|i| serde_json::json!({ "url": format!("http://{}/files/{i}.png", state.addr) }))
        .collect();

    Json(serde_json::json!({ "data": data })).into_response()
}

async fn handle_file(Path(_name): Path<String>) -> impl IntoResponse {
    let bytes = STANDARD.decode(PNG_B64).expect("valid base64");
    ([(axum::http::header::CONTENT_TYPE, "image/png")], bytes)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PredictImageParameters {
    #[serde(default = "one")]
    sample_count: u32,
}

#[derive(Debug, Deserialize)]
struct PredictImageRequest {
    #[allow(dead_code)]
    instances: serde_json::Value,
    parameters: PredictImageParameters,
}

async fn handle_predict_images(
    State(state): State<Arc<MockState>>,
    Path(_model): Path<String>,
    Json(req): Json<PredictImageRequest>,
) -> axum::response::Response {
    state.image_count.fetch_add(1, Ordering::Relaxed);
    if state.should_fail() {
        return failure_response();
    }

    let predictions: Vec<_> = (0..req.parameters.sample_count)
        .map(|_| serde_json::json!({ "bytesBase64Encoded": PNG_B64, "mimeType": "image/png" }))
        .collect();

    Json(serde_json::json!({ "predictions": predictions })).into_response()
}

// -- Video dialects --

async fn handle_runway(
    State(state): State<Arc<MockState>>,
    Json(_req): Json<serde_json::Value>,
) -> axum::response::Response {
    state.video_count.fetch_add(1, Ordering::Relaxed);
    if state.should_fail() {
        return failure_response();
    }

    Json(serde_json::json!({ "output": [state.clip_url()] })).into_response()
}

async fn handle_kling(
    State(state): State<Arc<MockState>>,
    Json(_req): Json<serde_json::Value>,
) -> axum::response::Response {
    state.video_count.fetch_add(1, Ordering::Relaxed);
    if state.should_fail() {
        return failure_response();
    }

    Json(serde_json::json!({ "data": { "video_url": state.clip_url() } })).into_response()
}

async fn handle_predict_video(
    State(state): State<Arc<MockState>>,
    Path(_model): Path<String>,
    Json(_req): Json<serde_json::Value>,
) -> axum::response::Response {
    state.video_count.fetch_add(1, Ordering::Relaxed);
    if state.should_fail() {
        return failure_response();
    }

    Json(serde_json::json!({ "predictions": [{ "videoUri": state.clip_url() }] })).into_response()
}

async fn handle_sora(
    State(state): State<Arc<MockState>>,
    Json(_req): Json<serde_json::Value>,
) -> axum::response::Response {
    state.video_count.fetch_add(1, Ordering::Relaxed);
    if state.should_fail() {
        return failure_response();
    }

    Json(serde_json::json!({ "data": [{ "url": state.clip_url() }] })).into_response()
}

async fn handle_fal(
    State(state): State<Arc<MockState>>,
    Path(_slug): Path<String>,
    Json(_req): Json<serde_json::Value>,
) -> axum::response::Response {
    state.video_count.fetch_add(1, Ordering::Relaxed);
    if state.should_fail() {
        return failure_response();
    }

    Json(serde_json::json!({ "video": { "url": state.clip_url() } })).into_response()
}
