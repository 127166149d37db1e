//! Error types for image editing.

use std::time::Duration;

/// Maximum length of an API error body carried into an error message.
const MAX_ERROR_MESSAGE_LEN: usize = 500;

/// Errors that can occur while editing an image.
#[derive(Debug, thiserror::Error)]
pub enum EditVizError {
    /// No API key was submitted and none is configured.
    #[error("API key is required!")]
    MissingCredential,

    /// No image was uploaded.
    #[error("Please upload an image first.")]
    MissingImage,

    /// API key rejected by the service.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Billing is not enabled for the API key.
    #[error("billing error: {0}")]
    Billing(String),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Rate limit exceeded.
    #[error("rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    /// Content was blocked by safety filters.
    #[error("content blocked: {0}")]
    ContentBlocked(String),

    /// Invalid request parameters.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The service answered with something we could not interpret.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Network or HTTP error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to decode base64 image data.
    #[error("failed to decode: {0}")]
    Decode(String),

    /// I/O error (e.g., saving file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EditVizError {
    /// Returns true for the checked failures raised before any network call.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::MissingCredential | Self::MissingImage)
    }

    /// Returns the server-suggested wait, if the service sent one.
    ///
    /// Informational only: edits are never retried automatically.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after } => *retry_after,
            _ => None,
        }
    }
}

/// Result type alias for image editing operations.
pub type Result<T> = std::result::Result<T, EditVizError>;

/// Parses a `Retry-After` header given in seconds.
pub(crate) fn parse_retry_after(headers: &reqwest::header::HeaderMap) -> Option<u64> {
    headers
        .get(reqwest::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

/// Makes an API error body safe to show to a user.
///
/// Google API keys (`AIza...`) are redacted and the body is truncated.
pub(crate) fn sanitize_error_message(text: &str) -> String {
    let mut out = String::with_capacity(text.len().min(MAX_ERROR_MESSAGE_LEN));
    let mut rest = text.trim();

    while let Some(pos) = rest.find("AIza") {
        out.push_str(&rest[..pos]);
        out.push_str("[REDACTED]");
        let tail = &rest[pos..];
        let key_len = tail
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
            .unwrap_or(tail.len());
        rest = &tail[key_len..];
    }
    out.push_str(rest);

    if out.chars().count() > MAX_ERROR_MESSAGE_LEN {
        let mut truncated: String = out.chars().take(MAX_ERROR_MESSAGE_LEN).collect();
        truncated.push_str("...");
        return truncated;
    }
    out
}
