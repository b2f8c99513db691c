use std::time::Duration;

use axum::http::HeaderValue;
use lotaya_config::{CorsConfig, Origins};
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};

/// Build the CORS layer from configuration
///
/// Credentialed mode requires explicit origins; tower-http rejects the
/// wildcard/credentials combination, so credentials are dropped when
/// origins is `"*"`.
pub(crate) fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let credentials = config.credentials && !matches!(config.origins, Origins::Any);

    let mut layer = if credentials {
        CorsLayer::new()
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    } else {
        CorsLayer::new().allow_methods(Any).allow_headers(Any)
    };

    layer = match &config.origins {
        Origins::Any => layer.allow_origin(Any),
        Origins::List(origins) => {
            let parsed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(%origin, "ignoring unparsable CORS origin");
                        None
                    }
                })
                .collect();
            layer.allow_origin(parsed)
        }
    };

    if let Some(seconds) = config.max_age {
        layer = layer.max_age(Duration::from_secs(seconds));
    }

    layer
}
