use std::sync::Arc;

use lotaya_core::{GenerationRecord, GenerationResult, GenerationStatus};
use lotaya_store::GenerationStore;
use serde::Serialize;
use uuid::Uuid;

/// Status projection returned by the polling endpoint
#[derive(Debug, Serialize)]
pub struct GenerationStatusResponse {
    pub generation_id: String,
    pub status: String,
    /// Coarse indicator: 0 absent or failed, 50 processing, 100 completed
    pub progress: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationStatusResponse {
    /// Soft-fail shape for unknown or unreadable ids
    ///
    /// An unknown id is a normal outcome of this endpoint, not an error.
    fn not_found(raw_id: &str) -> Self {
        Self {
            generation_id: raw_id.to_owned(),
            status: "not_found".to_owned(),
            progress: 0,
            result_url: None,
            images: None,
            error: None,
        }
    }

    fn from_record(record: GenerationRecord) -> Self {
        let progress = match record.status {
            GenerationStatus::Processing => 50,
            GenerationStatus::Completed => 100,
            GenerationStatus::Failed => 0,
        };

        let (images, result_url) = match record.result {
            Some(GenerationResult::Images(images)) => (Some(images), None),
            Some(GenerationResult::Video(url)) => (None, Some(url)),
            None => (None, None),
        };

        Self {
            generation_id: record.generation_id.to_string(),
            status: record.status.to_string(),
            progress,
            result_url,
            images,
            error: record.error,
        }
    }
}

/// Look up a generation by its raw path id
///
/// Store failures degrade to `not_found`; in degraded mode the record
/// may genuinely never have been written.
pub(crate) async fn lookup(store: &Arc<dyn GenerationStore>, raw_id: &str) -> GenerationStatusResponse {
    let Ok(id) = Uuid::parse_str(raw_id) else {
        return GenerationStatusResponse::not_found(raw_id);
    };

    match store.find(id).await {
        Ok(Some(record)) => GenerationStatusResponse::from_record(record),
        Ok(None) => GenerationStatusResponse::not_found(raw_id),
        Err(e) => {
            tracing::warn!(%id, error = %e, "status lookup failed, reporting not_found");
            GenerationStatusResponse::not_found(raw_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use lotaya_core::TerminalState;

    use super::*;

    #[test]
    fn processing_record_projects_half_progress() {
        let record = GenerationRecord::image("a sunset", "groq", None, "1024x1024", 1);
        let projected = GenerationStatusResponse::from_record(record);

        assert_eq!(projected.status, "processing");
        assert_eq!(projected.progress, 50);
        assert!(projected.images.is_none());
        assert!(projected.result_url.is_none());
        assert!(projected.error.is_none());
    }

    #[test]
    fn completed_image_record_projects_images() {
        let mut record = GenerationRecord::image("a sunset", "groq", None, "1024x1024", 2);
        record.apply_terminal(TerminalState::Completed(GenerationResult::Images(vec![
            "data:image/png;base64,AAAA".to_owned(),
            "data:image/png;base64,BBBB".to_owned(),
        ])));

        let projected = GenerationStatusResponse::from_record(record);

        assert_eq!(projected.status, "completed");
        assert_eq!(projected.progress, 100);
        assert_eq!(projected.images.unwrap().len(), 2);
        assert!(projected.result_url.is_none());
    }

    #[test]
    fn completed_video_record_projects_result_url() {
        let mut record = GenerationRecord::video("waves", "runway", 10);
        record.apply_terminal(TerminalState::Completed(GenerationResult::Video(
            "https://cdn.example.com/clip.mp4".to_owned(),
        )));

        let projected = GenerationStatusResponse::from_record(record);

        assert_eq!(projected.result_url.as_deref(), Some("https://cdn.example.com/clip.mp4"));
        assert!(projected.images.is_none());
    }

    #[test]
    fn failed_record_projects_error_without_progress() {
        let mut record = GenerationRecord::video("waves", "kling", 10);
        record.apply_terminal(TerminalState::Failed("remote timed out".to_owned()));

        let projected = GenerationStatusResponse::from_record(record);

        assert_eq!(projected.status, "failed");
        assert_eq!(projected.progress, 0);
        assert_eq!(projected.error.as_deref(), Some("remote timed out"));
    }

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let json =
            serde_json::to_value(GenerationStatusResponse::not_found("missing-id")).unwrap();

        assert_eq!(json["status"], "not_found");
        assert_eq!(json["progress"], 0);
        assert!(json.get("images").is_none());
        assert!(json.get("result_url").is_none());
        assert!(json.get("error").is_none());
    }
}
