use indexmap::IndexMap;
use lotaya_config::{VideoProviderConfig, VideoProviderType};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    error::{Result, VideoGenError},
    provider::{
        VideoProvider,
        fal::{FalProvider, HAILUO_SLUG, SEEDANCE_SLUG},
        google::GoogleProvider,
        kling::KlingProvider,
        openai::OpenAiProvider,
        runway::RunwayProvider,
    },
    types::VideoJob,
};

/// Video providers keyed by model name
#[derive(Default)]
pub struct VideoRegistry {
    providers: IndexMap<String, Box<dyn VideoProvider>>,
}

impl VideoRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under its own name
    pub fn register(&mut self, provider: Box<dyn VideoProvider>) {
        self.providers.insert(provider.name().to_owned(), provider);
    }

    /// Build the registry from configuration
    ///
    /// Providers with a missing or empty API key are still registered;
    /// they fail per-request rather than at startup.
    pub fn from_config(configs: &IndexMap<String, VideoProviderConfig>) -> Self {
        let mut registry = Self::new();

        for (name, config) in configs {
            tracing::debug!("initializing video provider: {name}");

            let api_key = configured_key(config.api_key.as_ref());
            let base_url = config.base_url.clone();

            let provider: Box<dyn VideoProvider> = match config.provider_type {
                VideoProviderType::Runway => {
                    Box::new(RunwayProvider::new(name.clone(), api_key, base_url))
                }
                VideoProviderType::Kling => {
                    Box::new(KlingProvider::new(name.clone(), api_key, base_url))
                }
                VideoProviderType::Veo3 => {
                    Box::new(GoogleProvider::new(name.clone(), api_key, base_url))
                }
                VideoProviderType::Sora => {
                    Box::new(OpenAiProvider::new(name.clone(), api_key, base_url))
                }
                VideoProviderType::Seedance => {
                    Box::new(FalProvider::new(name.clone(), api_key, base_url, SEEDANCE_SLUG))
                }
                VideoProviderType::Hailuo => {
                    Box::new(FalProvider::new(name.clone(), api_key, base_url, HAILUO_SLUG))
                }
            };

            registry.register(provider);
        }

        tracing::debug!("video registry initialized with {} provider(s)", registry.providers.len());

        registry
    }

    /// Whether a provider is registered under this name
    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Registered provider names, in configuration order
    pub fn names(&self) -> Vec<String> {
        self.providers.keys().cloned().collect()
    }

    /// Dispatch a job to the named provider
    pub async fn generate(&self, name: &str, job: &VideoJob) -> Result<String> {
        let provider = self
            .providers
            .get(name)
            .ok_or_else(|| VideoGenError::ProviderNotFound(name.to_owned()))?;

        provider.generate(job).await
    }
}

/// Treat an empty key as unconfigured; config files default keys from
/// environment variables with an empty fallback
fn configured_key(key: Option<&SecretString>) -> Option<SecretString> {
    key.filter(|key| !key.expose_secret().is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_provider_types_register() {
        let configs: IndexMap<String, VideoProviderConfig> = toml::from_str(
            r#"
            [runway]
            type = "runway"
            api_key = "rw-1"

            [kling]
            type = "kling"

            [veo3]
            type = "veo3"

            [sora]
            type = "sora"

            [seedance]
            type = "seedance"

            [hailuo]
            type = "hailuo"
            "#,
        )
        .unwrap();

        let registry = VideoRegistry::from_config(&configs);
        assert_eq!(
            registry.names(),
            vec!["runway", "kling", "veo3", "sora", "seedance", "hailuo"]
        );
    }

    #[tokio::test]
    async fn unknown_provider_is_rejected() {
        let registry = VideoRegistry::new();
        let job = VideoJob {
            prompt: "waves".to_owned(),
            duration: 10,
            style: None,
        };

        let err = registry.generate("nope", &job).await.unwrap_err();
        assert!(matches!(err, VideoGenError::ProviderNotFound(name) if name == "nope"));
    }

    #[tokio::test]
    async fn missing_api_key_fails_per_request() {
        let configs: IndexMap<String, VideoProviderConfig> = toml::from_str(
            r#"
            [kling]
            type = "kling"
            "#,
        )
        .unwrap();
        let registry = VideoRegistry::from_config(&configs);
        let job = VideoJob {
            prompt: "waves".to_owned(),
            duration: 10,
            style: None,
        };

        let err = registry.generate("kling", &job).await.unwrap_err();
        assert!(matches!(err, VideoGenError::MissingCredentials(name) if name == "kling"));
    }
}
