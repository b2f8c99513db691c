//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use lotaya_config::{
    Config, ImageProviderConfig, ImageProviderType, VideoProviderConfig, VideoProviderType,
};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    ///
    /// Binds to port 0, serves the health endpoint, and uses the
    /// in-memory record store.
    pub fn new() -> Self {
        let mut config = Config::default();
        config.server.listen_address = Some(SocketAddr::from(([127, 0, 0, 1], 0)));
        Self { config }
    }

    /// Add an image provider pointed at a mock backend
    pub fn with_image_provider(
        mut self,
        name: &str,
        provider_type: ImageProviderType,
        base_url: &str,
    ) -> Self {
        self.config.image_providers.insert(
            name.to_owned(),
            ImageProviderConfig {
                provider_type,
                api_key: Some(SecretString::from("test-key")),
                base_url: Some(base_url.to_owned()),
                fallback: false,
            },
        );
        self
    }

    /// Add a best-effort image provider pointed at a mock backend
    pub fn with_fallback_image_provider(
        mut self,
        name: &str,
        provider_type: ImageProviderType,
        base_url: &str,
    ) -> Self {
        self.config.image_providers.insert(
            name.to_owned(),
            ImageProviderConfig {
                provider_type,
                api_key: Some(SecretString::from("test-key")),
                base_url: Some(base_url.to_owned()),
                fallback: true,
            },
        );
        self
    }

    /// Add a video provider pointed at a mock backend
    pub fn with_video_provider(
        mut self,
        name: &str,
        provider_type: VideoProviderType,
        base_url: &str,
    ) -> Self {
        self.config.video_providers.insert(
            name.to_owned(),
            VideoProviderConfig {
                provider_type,
                api_key: Some(SecretString::from("test-key")),
                base_url: Some(base_url.to_owned()),
            },
        );
        self
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
