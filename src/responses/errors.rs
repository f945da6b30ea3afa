use crate::errors::ServerError;
use crate::templates::components::error::error_page;
use astra::{Body, Response, ResponseBuilder};
use tracing::{error, warn};

/// Convert a ServerError into a proper HTML error page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();
    let message = match &err {
        ServerError::NotFound => "Not Found".to_string(),
        ServerError::BadRequest(msg) => msg.clone(),
        ServerError::PayloadTooLarge(limit) => {
            format!("The submitted form is too large (limit {} KB).", limit / 1024)
        }
        ServerError::Upstream(e) => format!("The marketplace API could not complete the request: {e}"),
        ServerError::XlsxError(msg) => format!("Spreadsheet Error: {msg}"),
        ServerError::InternalError => "Internal Server Error".to_string(),
    };

    if status >= 500 {
        error!(%err, "request failed");
    } else {
        warn!(%err, "request rejected");
    }

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(error_page(status, &message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
