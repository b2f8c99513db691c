use serde::{Deserialize, Deserializer};

/// CORS configuration
///
/// The original deployment fronts a browser app, so the default config
/// file enables the permissive form.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    /// Allowed origins: `"*"` or an explicit list
    #[serde(default)]
    pub origins: Origins,
    /// Allow credentialed requests; ignored when origins is `"*"`
    #[serde(default)]
    pub credentials: bool,
    /// Preflight cache lifetime in seconds
    #[serde(default)]
    pub max_age: Option<u64>,
}

/// Wildcard or an explicit origin list
#[derive(Debug, Clone, Default)]
pub enum Origins {
    /// Any origin
    #[default]
    Any,
    /// Explicit origins
    List(Vec<String>),
}

impl<'de> Deserialize<'de> for Origins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            One(String),
            Many(Vec<String>),
        }

        match Raw::deserialize(deserializer)? {
            Raw::One(s) if s == "*" => Ok(Self::Any),
            Raw::One(s) => Err(serde::de::Error::custom(format!(
                "expected \"*\" or an array of origins, got \"{s}\""
            ))),
            Raw::Many(list) => Ok(Self::List(list)),
        }
    }
}
