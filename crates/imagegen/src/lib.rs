#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

//! Image provider adapters
//!
//! Each backend (groq, xai, gemini) speaks its own wire dialect; the
//! adapters normalize every response into inline `data:` URIs so the
//! caller never has to fetch anything itself. Providers are looked up
//! by name through [`ImageRegistry`].

mod error;
mod http_client;
mod provider;
mod registry;
mod types;

pub use error::{ImageGenError, Result};
pub use provider::ImageProvider;
pub use registry::ImageRegistry;
pub use types::{ImageJob, inline_encoded, inline_media};
