//! Quotation API error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpbitError {
    /// Argument rejected by client-side validation; no request was sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Server answered with a status outside 200/201. The message carries
    /// the response body when the server sent one, else the status code.
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body was not valid JSON.
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Transport-level failure (connect, timeout) before a status line
    /// was received.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type alias for quotation API calls.
pub type UpbitResult<T> = Result<T, UpbitError>;
