use serde::Deserialize;

/// Health endpoint configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthConfig {
    /// Whether the liveness endpoint is served
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Path the endpoint is mounted at
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            path: default_path(),
        }
    }
}

const fn default_enabled() -> bool {
    true
}

fn default_path() -> String {
    "/api/health".to_owned()
}
