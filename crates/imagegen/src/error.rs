use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImageGenError>;

/// Image generation failures
///
/// Everything except `ProviderNotFound` is a provider-call failure the
/// orchestrator records as a failed generation; `ProviderNotFound` is
/// caught before a record exists.
#[derive(Debug, Error)]
pub enum ImageGenError {
    /// No provider registered under this name
    #[error("image provider '{0}' is not configured")]
    ProviderNotFound(String),

    /// Provider has no usable API key
    #[error("no API key configured for image provider '{0}'")]
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
