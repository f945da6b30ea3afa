use crate::app::App;
use crate::domain::forms::{parse_form, PostedForm, UploadedFile};
use crate::errors::ServerError;
use crate::responses::ResultResp;
use crate::screens::categories::{self, Categories};
use crate::screens::offers::{self, Offers};
use crate::screens::reservations::{self, Reservations};
use crate::screens::users::{self, Users};
use crate::screens::{dashboard, export, list, parse_id};
use astra::Request;
use multipart::server::Multipart;
use std::io::Read;

const MAX_FORM_BYTES: u64 = 64 * 1024;
/// Room for a category image plus its text fields.
const MAX_UPLOAD_BYTES: u64 = 8 * 1024 * 1024;

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let posted = if req.method().as_str() == "POST" {
        read_form(&mut req)?
    } else {
        PostedForm::default()
    };
    let form = &posted.values;

    let method = req.method().as_str();
    let path = req.uri().path();
    let query = req.uri().query().unwrap_or("");
    let htmx = is_htmx(&req);

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method, segments.as_slice()) {
        ("GET", []) => dashboard::show(app),

        // Users
        ("GET", ["users"]) => list::<Users>(app, query, htmx),
        ("GET", ["users", "export.xlsx"]) => export::<Users>(app, query),
        ("GET", ["users", id]) => users::detail(app, parse_id(id)?),
        ("GET", ["users", id, "edit"]) => users::edit_form(app, parse_id(id)?),
        ("POST", ["users", id, "edit"]) => users::edit_submit(app, parse_id(id)?, form),
        ("POST", ["users", id, "verification"]) => {
            users::toggle_verification(app, parse_id(id)?, htmx)
        }

        // Offers
        ("GET", ["offers"]) => list::<Offers>(app, query, htmx),
        ("GET", ["offers", "export.xlsx"]) => export::<Offers>(app, query),
        ("GET", ["offers", id]) => offers::detail(app, parse_id(id)?),
        ("GET", ["offers", id, "edit"]) => offers::edit_form(app, parse_id(id)?),
        ("POST", ["offers", id, "edit"]) => offers::edit_submit(app, parse_id(id)?, form),
        ("POST", ["offers", id, "status"]) => offers::toggle_status(app, parse_id(id)?, htmx),

        // Reservations
        ("GET", ["reservations"]) => list::<Reservations>(app, query, htmx),
        ("GET", ["reservations", "export.xlsx"]) => export::<Reservations>(app, query),
        ("GET", ["reservations", id]) => reservations::detail(app, parse_id(id)?),
        ("GET", ["reservations", id, "edit"]) => reservations::edit_form(app, parse_id(id)?),
        ("POST", ["reservations", id, "edit"]) => {
            reservations::edit_submit(app, parse_id(id)?, form)
        }

        // Categories
        ("GET", ["categories"]) => list::<Categories>(app, query, htmx),
        ("GET", ["categories", "export.xlsx"]) => export::<Categories>(app, query),
        ("GET", ["categories", "create"]) => categories::create_form(),
        ("POST", ["categories", "create"]) => categories::create_submit(app, &posted),
        ("GET", ["categories", id]) => categories::detail(app, parse_id(id)?),
        ("GET", ["categories", id, "edit"]) => categories::edit_form(app, parse_id(id)?),
        ("POST", ["categories", id, "edit"]) => categories::edit_submit(app, parse_id(id)?, &posted),
        ("POST", ["categories", id, "delete"]) => categories::delete(app, parse_id(id)?),

        _ => Err(ServerError::NotFound),
    }
}

/// htmx marks its own requests; those get fragments instead of pages.
fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "true")
}

/// `multipart/form-data` boundary, if the request is a multipart upload.
fn multipart_boundary(req: &Request) -> Result<Option<String>, ServerError> {
    let Some(raw) = req.headers().get("Content-Type").and_then(|v| v.to_str().ok()) else {
        return Ok(None);
    };
    let Ok(content_type) = raw.parse::<mime::Mime>() else {
        return Ok(None);
    };
    if content_type.type_() != mime::MULTIPART || content_type.subtype() != mime::FORM_DATA {
        return Ok(None);
    }
    content_type
        .get_param(mime::BOUNDARY)
        .map(|b| Some(b.as_str().to_string()))
        .ok_or_else(|| ServerError::BadRequest("Multipart body without a boundary".into()))
}

/// Reads at most `limit` bytes; anything longer is rejected, never cut.
fn read_body(req: &mut Request, limit: u64) -> Result<Vec<u8>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .take(limit + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable form body: {e}")))?;
    if body.len() as u64 > limit {
        return Err(ServerError::PayloadTooLarge(limit));
    }
    Ok(body)
}

fn read_form(req: &mut Request) -> Result<PostedForm, ServerError> {
    if let Some(boundary) = multipart_boundary(req)? {
        let body = read_body(req, MAX_UPLOAD_BYTES)?;
        return parse_multipart(&body, &boundary);
    }

    let body = read_body(req, MAX_FORM_BYTES)?;
    let body = String::from_utf8(body)
        .map_err(|_| ServerError::BadRequest("Form body is not valid UTF-8".into()))?;
    Ok(PostedForm::from_values(parse_form(&body)))
}

fn parse_multipart(body: &[u8], boundary: &str) -> Result<PostedForm, ServerError> {
    let bad = |e: std::io::Error| ServerError::BadRequest(format!("Malformed multipart body: {e}"));
    let mut multipart = Multipart::with_body(body, boundary);
    let mut form = PostedForm::default();

    while let Some(mut field) = multipart.read_entry().map_err(bad)? {
        let mut data = Vec::new();
        field.data.read_to_end(&mut data).map_err(bad)?;
        let name = field.headers.name.to_string();

        match field.headers.filename.clone() {
            Some(file_name) => form.files.push(UploadedFile {
                field: name,
                file_name,
                content_type: field
                    .headers
                    .content_type
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_default(),
                bytes: data,
            }),
            None => {
                form.values
                    .insert(name, String::from_utf8_lossy(&data).into_owned());
            }
        }
    }

    Ok(form)
}
