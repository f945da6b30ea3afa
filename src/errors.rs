// errors.rs
use astra::Response;
use thiserror::Error;

use crate::api::ApiError;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (API, XLSX).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Request body exceeds {0} bytes")]
    PayloadTooLarge(u64),
    #[error("Upstream API error: {0}")]
    Upstream(ApiError),
    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::PayloadTooLarge(_) => 413,
            ServerError::Upstream(_) => 502,
            ServerError::XlsxError(_) | ServerError::InternalError => 500,
        }
    }
}

impl From<ApiError> for ServerError {
    fn from(e: ApiError) -> Self {
        // A record the API doesn't know is our 404 too.
        if e.is_not_found() {
            ServerError::NotFound
        } else {
            ServerError::Upstream(e)
        }
    }
}
