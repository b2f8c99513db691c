use async_trait::async_trait;

use super::ImageProvider;
use crate::{
    error::Result,
    types::{ImageJob, inline_encoded},
};

/// 1x1 transparent PNG used as the substitute payload
const PLACEHOLDER_PNG_B64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

/// Best-effort decorator around an image provider
///
/// Enabled per provider with `fallback = true`. A provider failure is
/// absorbed and replaced with locally generated placeholder images, so
/// callers always receive a result. Validation errors never reach this
/// point; only provider and transport failures are masked.
pub(crate) struct Fallback {
    inner: Box<dyn ImageProvider>,
}

impl Fallback {
    pub fn wrap(inner: Box<dyn ImageProvider>) -> Box<dyn ImageProvider> {
        Box::new(Self { inner })
    }
}

#[async_trait]
impl ImageProvider for Fallback {
    async fn generate(&self, job: &ImageJob) -> Result<Vec<String>> {
        match self.inner.generate(job).await {
            Ok(images) => Ok(images),
            Err(e) => {
                tracing::warn!(
                    provider = %self.inner.name(),
                    error = %e,
                    "provider failed, substituting placeholder output"
                );

                let count = job.count.min(self.inner.max_images()).max(1);
                Ok((0..count)
                    .map(|_| inline_encoded("image/png", PLACEHOLDER_PNG_B64))
                    .collect())
            }
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn max_images(&self) -> u32 {
        self.inner.max_images()
    }
}
