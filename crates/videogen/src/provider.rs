pub(crate) mod fal;
pub(crate) mod google;
pub(crate) mod kling;
pub(crate) mod openai;
pub(crate) mod runway;

use async_trait::async_trait;

use crate::{error::Result, types::VideoJob};

/// Trait for video provider implementations
///
/// `generate` returns a locator for the produced clip. One outbound
/// call per invocation; provider-side task polling is the provider
/// client's concern, not ours.
#[async_trait]
pub trait VideoProvider: Send + Sync {
    /// Generate a video clip for the given job
    async fn generate(&self, job: &VideoJob) -> Result<String>;

    /// Get the provider name
    fn name(&self) -> &str;
}
