// src/api/error.rs
use thiserror::Error;

/// Failures talking to the marketplace API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Couldn't reach the API at all (DNS, TLS, timeout...).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The API answered with a non-2xx status.
    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The body wasn't the JSON shape we expected.
    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}
