use serde::Deserialize;

/// Generation record store configuration
///
/// When no URL is configured the gateway falls back to an in-process
/// store; records then do not survive a restart.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Document store connection string (`redis://…`); empty or absent
    /// selects the in-memory backend
    #[serde(default)]
    pub url: Option<String>,
    /// Key prefix for stored generation documents
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl StoreConfig {
    /// Configured connection string, treating the empty string as unset
    ///
    /// Config files default the URL from an environment variable with an
    /// empty fallback, so `""` must mean "not configured".
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            key_prefix: default_key_prefix(),
        }
    }
}

fn default_key_prefix() -> String {
    "lotaya:generation".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_reads_as_unset() {
        let config: StoreConfig = toml::from_str("url = \"\"").unwrap();
        assert_eq!(config.url(), None);
    }

    #[test]
    fn configured_url_is_returned() {
        let config: StoreConfig = toml::from_str("url = \"redis://cache:6379\"").unwrap();
        assert_eq!(config.url(), Some("redis://cache:6379"));
        assert_eq!(config.key_prefix, "lotaya:generation");
    }
}
