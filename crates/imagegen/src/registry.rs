use indexmap::IndexMap;
use lotaya_config::{ImageProviderConfig, ImageProviderType};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    error::{ImageGenError, Result},
    provider::{
        ImageProvider, fallback::Fallback, gemini::GeminiProvider, groq::GroqProvider,
        xai::XaiProvider,
    },
    types::ImageJob,
};

/// Image providers keyed by model name
///
/// Adding a backend means registering another adapter; dispatch code
/// never changes.
#[derive(Default)]
pub struct ImageRegistry {
    providers: IndexMap<String, Box<dyn ImageProvider>>,
}

impl ImageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under its own name
    pub fn register(&mut self, provider: Box<dyn ImageProvider>) {
        self.providers.insert(provider.name().to_owned(), provider);
    }

    /// Build the registry from configuration
    ///
    /// Providers with a missing or empty API key are still registered;
    /// they fail per-request rather than at startup.
    pub fn from_config(configs: &IndexMap<String, ImageProviderConfig>) -> Self {
        let mut registry = Self::new();

        for (name, config) in configs {
            tracing::debug!("initializing image provider: {name}");

            let api_key = configured_key(config.api_key.as_ref());
            let base_url = config.base_url.clone();

            let provider: Box<dyn ImageProvider> = match config.provider_type {
                ImageProviderType::Groq => {
                    Box::new(GroqProvider::new(name.clone(), api_key, base_url))
                }
                ImageProviderType::Xai => {
                    Box::new(XaiProvider::new(name.clone(), api_key, base_url))
                }
                ImageProviderType::Gemini => {
                    Box::new(GeminiProvider::new(name.clone(), api_key, base_url))
                }
            };

            let provider = if config.fallback {
                Fallback::wrap(provider)
            } else {
                provider
            };

            registry.register(provider);
        }

        tracing::debug!("image registry initialized with {} provider(s)", registry.providers.len());

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
    pub async fn generate(&self, name: &str, job: &ImageJob) -> Result<Vec<String>> {
        let provider = self
            .providers
            .get(name)
            .ok_or_else(|| ImageGenError::ProviderNotFound(name.to_owned()))?;

        provider.generate(job).await
    }
}

/// Treat an empty key as unconfigured; config files default keys from
/// environment variables with an empty fallback
fn configured_key(key: Option<&SecretString>) -> Option<SecretString> {
    key.filter(|key| !key.expose_secret().is_empty()).cloned()
}
