#![allow(clippy::must_use_candidate)]

//! Configuration for the Lotaya gateway
//!
//! Loaded from a TOML file with `{{ env.VAR }}` placeholder expansion, so
//! API keys and connection strings stay out of the config file itself.

pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod providers;
pub mod server;
pub mod store;

use indexmap::IndexMap;
use serde::Deserialize;

pub use cors::*;
pub use health::*;
pub use providers::*;
pub use server::*;
pub use store::*;

/// Top-level Lotaya configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Generation record store configuration
    #[serde(default)]
    pub store: StoreConfig,
    /// Image provider configurations keyed by model name
    #[serde(default)]
    pub image_providers: IndexMap<String, ImageProviderConfig>,
    /// Video provider configurations keyed by model name
    #[serde(default)]
    pub video_providers: IndexMap<String, VideoProviderConfig>,
}
