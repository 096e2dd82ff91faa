//! Error handling for backend calls.
//!
//! Network errors, timeouts, non-2xx statuses, and malformed JSON all
//! collapse into one failure class whose text is shown to the user verbatim.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    /// Reqwest error, typically network trouble or a timeout.
    #[error("Request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body was not the JSON shape we expected.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl BackendError {
    pub async fn from_response(response: reqwest::Response) -> BackendError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        BackendError::Http { status, message }
    }
}
