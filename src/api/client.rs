// src/api/client.rs
use reqwest::blocking::{multipart, Client, RequestBuilder, Response};
use reqwest::header::ACCEPT;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::api::{AdminApi, ApiError};
use crate::domain::reservation::ReservationPayload;
use crate::domain::{
    Category, CategoryInput, Post, PostUpdate, Reservation, ReservationUpdate, User, UserUpdate,
};

/// Every endpoint wraps its payload as `{ "status": "...", "data": ... }`.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Blocking JSON client for the marketplace API.
pub struct HttpApi {
    base_url: String,
    token: Option<String>,
    client: Client,
}

impl HttpApi {
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Bearer token goes on everything except the login call.
    fn authorize(&self, path: &str, req: RequestBuilder) -> RequestBuilder {
        if path.contains("/login") {
            return req;
        }
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let req = self
            .client
            .request(method, self.url(path))
            .header(ACCEPT, "application/json");
        self.authorize(path, req)
    }

    fn send(&self, method: &Method, path: &str, req: RequestBuilder) -> Result<Response, ApiError> {
        let started = Instant::now();
        let resp = req.send()?;
        let status = resp.status();

        debug!(
            %method,
            path,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "api call"
        );

        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
        warn!(%method, path, status = status.as_u16(), "api call failed");
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let text = resp.text()?;
        let envelope: Envelope<T> =
            serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.send(&Method::GET, path, self.request(Method::GET, path))?;
        Self::decode(resp)
    }

    fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        let req = self.request(method.clone(), path).json(body);
        self.send(&method, path, req)
    }

    fn send_multipart(
        &self,
        method: Method,
        path: &str,
        input: &CategoryInput,
    ) -> Result<Response, ApiError> {
        let form = category_form(input)?;
        let req = self.request(method.clone(), path).multipart(form);
        self.send(&method, path, req)
    }
}

/// Text fields, plus the image as a file part when one was uploaded.
fn category_form(input: &CategoryInput) -> Result<multipart::Form, ApiError> {
    let form = input
        .fields()
        .into_iter()
        .fold(multipart::Form::new(), |form, (name, value)| {
            form.text(name, value.to_string())
        });

    let Some(image) = &input.image else {
        return Ok(form);
    };
    let part = multipart::Part::bytes(image.bytes.clone())
        .file_name(image.file_name.clone())
        .mime_str(&image.content_type)?;
    Ok(form.part("image", part))
}

impl AdminApi for HttpApi {
    fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get("/admin/users")
    }

    fn get_user(&self, id: i64) -> Result<User, ApiError> {
        self.get(&format!("/admin/users/{id}"))
    }

    fn update_user(&self, id: i64, update: &UserUpdate) -> Result<(), ApiError> {
        self.send_json(Method::PUT, &format!("/admin/users/{id}"), update)?;
        Ok(())
    }

    fn change_user_verification(&self, id: i64, status: &str) -> Result<(), ApiError> {
        let body = json!({ "id": id, "status": status });
        self.send_json(Method::POST, "/admin/verificationStatus", &body)?;
        Ok(())
    }

    fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.get("/admin/posts")
    }

    fn get_post(&self, id: i64) -> Result<Post, ApiError> {
        self.get(&format!("/posts/{id}"))
    }

    fn update_post(&self, id: i64, update: &PostUpdate) -> Result<(), ApiError> {
        self.send_json(Method::PUT, &format!("/posts/{id}"), update)?;
        Ok(())
    }

    fn change_post_status(&self, id: i64, status: &str) -> Result<(), ApiError> {
        let body = json!({ "id": id, "status": status });
        self.send_json(Method::POST, "/post/change_status", &body)?;
        Ok(())
    }

    fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get("/categories")
    }

    fn get_category(&self, id: i64) -> Result<Category, ApiError> {
        self.get(&format!("/categories/{id}"))
    }

    fn create_category(&self, input: &CategoryInput) -> Result<Category, ApiError> {
        let resp = self.send_multipart(Method::POST, "/categories", input)?;
        Self::decode(resp)
    }

    fn update_category(&self, id: i64, input: &CategoryInput) -> Result<(), ApiError> {
        self.send_multipart(Method::PUT, &format!("/categories/{id}"), input)?;
        Ok(())
    }

    fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("/categories/{id}");
        self.send(&Method::DELETE, &path, self.request(Method::DELETE, &path))?;
        Ok(())
    }

    fn list_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        self.get("/reservations")
    }

    fn get_reservation(&self, id: i64) -> Result<Reservation, ApiError> {
        let payload: ReservationPayload = self.get(&format!("/reservations/{id}"))?;
        Ok(payload.into())
    }

    fn update_reservation(&self, id: i64, update: &ReservationUpdate) -> Result<(), ApiError> {
        self.send_json(Method::PUT, &format!("/reservations/{id}"), update)?;
        Ok(())
    }
}
