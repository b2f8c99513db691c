use thiserror::Error;

pub type Result<T> = std::result::Result<T, VideoGenError>;

/// Video generation failures
#[derive(Debug, Error)]
pub enum VideoGenError {
    /// No provider registered under this name
    #[error("video provider '{0}' is not configured")]
    ProviderNotFound(String),

    /// Provider has no usable API key
    #[error("no API key configured for video provider '{0}'")]
    MissingCredentials(String),

    /// Remote rejected the credentials
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Remote returned a non-success status
    #[error("provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Network failure or timeout reaching the remote
    #[error("connection error: {0}")]
    ConnectionError(String),

    /// Remote answered 2xx but the payload was unusable
    #[error("provider returned unusable data: {0}")]
    InvalidResponse(String),
}
