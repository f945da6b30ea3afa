use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};

/// 302 back to a list or detail page after a write.
pub fn redirect(location: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(302)
        .header("Location", location)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
