//! Analysis service error types.

use thiserror::Error;

/// Errors that can occur while talking to the analysis service.
/// They never leave [`InsightAdapter`](super::InsightAdapter); callers get
/// a fallback text instead.
#[derive(Debug, Error)]
pub enum InsightError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The response body could not be understood.
    #[error("parse error: {0}")]
    Parse(String),

    /// No API key in the config file or environment.
    #[error("no API key configured (set `api_key` or GEMINI_API_KEY)")]
    MissingApiKey,
}
