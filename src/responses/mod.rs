pub mod errors;
pub mod html;
pub mod redirect;
pub mod xlsx;

pub use crate::errors::ResultResp;
pub use errors::html_error_response;

// Normal HTML responses
pub use html::{html_fragment_pushing, html_response, html_response_with_status};
pub use redirect::redirect;
pub use xlsx::xlsx_response;
