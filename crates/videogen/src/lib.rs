#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

//! Video provider adapters
//!
//! Text-to-video and script-to-video requests dispatch through the same
//! registry. Unlike image generation, results are locator URLs, not
//! inline payloads; clips are too large to inline.

mod error;
mod http_client;
mod provider;
mod registry;
mod types;

pub use error::{Result, VideoGenError};
pub use provider::VideoProvider;
pub use registry::VideoRegistry;
pub use types::VideoJob;

/// Video effect presets advertised by the model catalog
///
/// Selection happens client-side; no server-side pipeline sits behind
/// these names.
pub const EFFECT_PRESETS: &[&str] = &["ai_hug", "ai_kissing", "french_kiss", "decapitate", "eye_pop"];
