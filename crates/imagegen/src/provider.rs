pub(crate) mod fallback;
pub(crate) mod gemini;
pub(crate) mod groq;
pub(crate) mod xai;

use async_trait::async_trait;

use crate::{error::Result, types::ImageJob};

/// Trait for image provider implementations
///
/// `generate` returns one inline `data:` URI per produced image, in
/// provider order. Adapters clamp the requested count to `max_images`
/// instead of rejecting oversized requests.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Generate images for the given job
    async fn generate(&self, job: &ImageJob) -> Result<Vec<String>>;

    /// Get the provider name
    fn name(&self) -> &str;

    /// Largest image count a single call may request
    fn max_images(&self) -> u32;
}
