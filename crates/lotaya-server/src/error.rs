use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lotaya_core::HttpError;
use serde::Serialize;
use thiserror::Error;

/// Request rejections surfaced before any record is created
///
/// Provider failures never appear here; those are reported through the
/// response envelope with `success = false` and a failed record.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Malformed client input
    #[error("invalid request: {0}")]
    Validation(String),

    /// Model name not registered for the requested generation kind
    #[error("unknown {kind} model '{name}'")]
    UnknownModel { kind: &'static str, name: String },

    /// Generation task died before producing a response
    #[error("internal error: {0}")]
    Internal(String),
}

impl HttpError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::UnknownModel { .. } => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::UnknownModel { .. } => "unknown_model_error",
            Self::Internal(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}

/// JSON error envelope
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorDetails,
}

#[derive(Debug, Serialize)]
struct ErrorDetails {
    message: String,
    r#type: String,
    code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = HttpError::status_code(&self);

        let error_response = ErrorResponse {
            error: ErrorDetails {
                message: self.client_message(),
                r#type: self.error_type().to_string(),
                code: status.as_u16(),
            },
        };

        (status, Json(error_response)).into_response()
    }
}
