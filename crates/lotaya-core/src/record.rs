use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What kind of media a generation produces
///
/// The kind determines which provider registry the request is routed
/// through and which result shape a completed record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GenerationKind {
    /// Text-to-image
    Image,
    /// Text-to-video
    Video,
    /// Script-to-video conversion
    TextToVideo,
}

/// Lifecycle state of a generation record
///
/// Transitions only ever move `Processing` into one of the two terminal
/// states; see [`GenerationRecord::apply_terminal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GenerationStatus {
    /// Record created, provider call in flight
    Processing,
    /// Provider returned a usable result
    Completed,
    /// Provider call failed; the error field carries the reason
    Failed,
}

impl GenerationStatus {
    /// Whether this status is terminal (no further transitions)
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Normalized result of a completed generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum GenerationResult {
    /// Ordered inline encoded-media payloads, one per generated image
    Images(Vec<String>),
    /// Locator for the produced video
    Video(String),
}

/// Terminal outcome applied to a processing record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalState {
    /// The provider produced a result
    Completed(GenerationResult),
    /// The provider call failed with the given reason
    Failed(String),
}

/// Persisted generation record, identified by `generation_id`
///
/// Created once at request intake with `Processing` status and mutated
/// at most once afterwards, when the provider call resolves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub generation_id: Uuid,
    pub kind: GenerationKind,
    /// Prompt text, or the script for script-to-video conversions
    pub prompt: String,
    /// Name of the provider the request was dispatched to
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Requested dimensions, image generations only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Requested image count, pre-clamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Requested clip length in seconds, video kinds only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    pub status: GenerationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<GenerationResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub created_at: Timestamp,
}

impl GenerationRecord {
    fn new(kind: GenerationKind, prompt: &str, provider: &str) -> Self {
        Self {
            generation_id: Uuid::new_v4(),
            kind,
            prompt: prompt.to_owned(),
            provider: provider.to_owned(),
            style: None,
            size: None,
            count: None,
            duration: None,
            status: GenerationStatus::Processing,
            result: None,
            error: None,
            created_at: Timestamp::now(),
        }
    }

    /// Create a processing record for an image generation
    pub fn image(
        prompt: &str,
        provider: &str,
        style: Option<String>,
        size: &str,
        count: u32,
    ) -> Self {
        Self {
            style,
            size: Some(size.to_owned()),
            count: Some(count),
            ..Self::new(GenerationKind::Image, prompt, provider)
        }
    }

    /// Create a processing record for a video generation
    pub fn video(prompt: &str, provider: &str, duration: u32) -> Self {
        Self {
            duration: Some(duration),
            ..Self::new(GenerationKind::Video, prompt, provider)
        }
    }

    /// Create a processing record for a script-to-video conversion
    pub fn script(script: &str, provider: &str, style: Option<String>, duration: u32) -> Self {
        Self {
            style,
            duration: Some(duration),
            ..Self::new(GenerationKind::TextToVideo, script, provider)
        }
    }

    /// Apply a terminal outcome to a processing record
    ///
    /// Returns `true` when the transition was applied. A record that is
    /// already terminal is left untouched: status never moves backwards
    /// and `result`/`error` stay mutually exclusive.
    pub fn apply_terminal(&mut self, terminal: TerminalState) -> bool {
        if self.status.is_terminal() {
            return false;
        }

        match terminal {
            TerminalState::Completed(result) => {
                self.status = GenerationStatus::Completed;
                self.result = Some(result);
                self.error = None;
            }
            TerminalState::Failed(reason) => {
                self.status = GenerationStatus::Failed;
                self.result = None;
                self.error = Some(reason);
            }
        }

        true
    }
}
