// Shared fixtures for router tests: an in-memory AdminApi plus request
// and response helpers.
use crate::api::{AdminApi, ApiError};
use crate::app::App;
use crate::domain::{
    Category, CategoryInput, Post, PostUpdate, Reservation, ReservationUpdate, User, UserUpdate,
};
use astra::{Body, Request, Response};
use serde_json::json;
use std::io::Read;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct FakeState {
    users: Mutex<Vec<User>>,
    posts: Mutex<Vec<Post>>,
    categories: Mutex<Vec<Category>>,
    reservations: Mutex<Vec<Reservation>>,
    calls: Mutex<Vec<String>>,
    fail_lists: AtomicBool,
}

/// Cheap to clone; every clone sees the same records.
#[derive(Clone, Default)]
pub struct FakeApi {
    state: Arc<FakeState>,
}

fn not_found() -> ApiError {
    ApiError::Status {
        status: 404,
        body: r#"{"status":"error","message":"Not found"}"#.to_string(),
    }
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(self, users: Vec<User>) -> Self {
        *self.state.users.lock().unwrap() = users;
        self
    }

    pub fn with_posts(self, posts: Vec<Post>) -> Self {
        *self.state.posts.lock().unwrap() = posts;
        self
    }

    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        *self.state.categories.lock().unwrap() = categories;
        self
    }

    pub fn with_reservations(self, reservations: Vec<Reservation>) -> Self {
        *self.state.reservations.lock().unwrap() = reservations;
        self
    }

    /// Make every list call fail as if the API were down.
    pub fn fail_lists(&self) {
        self.state.fail_lists.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.calls.lock().unwrap().clone()
    }

    pub fn user(&self, id: i64) -> Option<User> {
        self.state.users.lock().unwrap().iter().find(|u| u.id == id).cloned()
    }

    pub fn post(&self, id: i64) -> Option<Post> {
        self.state.posts.lock().unwrap().iter().find(|p| p.id == id).cloned()
    }

    pub fn category(&self, id: i64) -> Option<Category> {
        self.state.categories.lock().unwrap().iter().find(|c| c.id == id).cloned()
    }

    pub fn reservation(&self, id: i64) -> Option<Reservation> {
        self.state.reservations.lock().unwrap().iter().find(|r| r.id == id).cloned()
    }

    fn record(&self, call: String) {
        self.state.calls.lock().unwrap().push(call);
    }

    fn list<T: Clone>(&self, rows: &Mutex<Vec<T>>) -> Result<Vec<T>, ApiError> {
        if self.state.fail_lists.load(Ordering::SeqCst) {
            return Err(ApiError::Transport("connection refused".into()));
        }
        Ok(rows.lock().unwrap().clone())
    }
}

impl AdminApi for FakeApi {
    fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.list(&self.state.users)
    }

    fn get_user(&self, id: i64) -> Result<User, ApiError> {
        self.user(id).ok_or_else(not_found)
    }

    fn update_user(&self, id: i64, update: &UserUpdate) -> Result<(), ApiError> {
        let mut users = self.state.users.lock().unwrap();
        let user = users.iter_mut().find(|u| u.id == id).ok_or_else(not_found)?;
        user.first_name = update.first_name.clone();
        user.last_name = update.last_name.clone();
        user.email = update.email.clone();
        user.phone = update.phone.clone();
        drop(users);
        self.record(format!("update_user {id}"));
        Ok(())
    }

    fn change_user_verification(&self, id: i64, status: &str) -> Result<(), ApiError> {
        let mut users = self.state.users.lock().unwrap();
        let user = users.iter_mut().find(|u| u.id == id).ok_or_else(not_found)?;
        user.verification_status = Some(status.to_string());
        drop(users);
        self.record(format!("change_user_verification {id} {status}"));
        Ok(())
    }

    fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.list(&self.state.posts)
    }

    fn get_post(&self, id: i64) -> Result<Post, ApiError> {
        self.post(id).ok_or_else(not_found)
    }

    fn update_post(&self, id: i64, update: &PostUpdate) -> Result<(), ApiError> {
        let mut posts = self.state.posts.lock().unwrap();
        let post = posts.iter_mut().find(|p| p.id == id).ok_or_else(not_found)?;
        post.title = update.title.clone();
        post.sub_title = update.sub_title.clone();
        post.price = update.price;
        post.status = update.status.clone();
        drop(posts);
        self.record(format!("update_post {id}"));
        Ok(())
    }

    fn change_post_status(&self, id: i64, status: &str) -> Result<(), ApiError> {
        let mut posts = self.state.posts.lock().unwrap();
        let post = posts.iter_mut().find(|p| p.id == id).ok_or_else(not_found)?;
        post.status = status.to_string();
        drop(posts);
        self.record(format!("change_post_status {id} {status}"));
        Ok(())
    }

    fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.list(&self.state.categories)
    }

    fn get_category(&self, id: i64) -> Result<Category, ApiError> {
        self.category(id).ok_or_else(not_found)
    }

    fn create_category(&self, input: &CategoryInput) -> Result<Category, ApiError> {
        let mut categories = self.state.categories.lock().unwrap();
        let id = categories.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let mut created = category(id, &input.title_en, &input.title_es, "2024-06-01 09:00:00");
        created.image_url = input.image.as_ref().map(|img| format!("https://cdn.test/{}", img.file_name));
        categories.push(created.clone());
        drop(categories);
        self.record(format!("create_category {id}"));
        Ok(created)
    }

    fn update_category(&self, id: i64, input: &CategoryInput) -> Result<(), ApiError> {
        let mut categories = self.state.categories.lock().unwrap();
        let cat = categories.iter_mut().find(|c| c.id == id).ok_or_else(not_found)?;
        cat.title_en = input.title_en.clone();
        cat.title_es = input.title_es.clone();
        cat.description_en = Some(input.description_en.clone());
        if let Some(img) = &input.image {
            cat.image_url = Some(format!("https://cdn.test/{}", img.file_name));
        }
        drop(categories);
        self.record(format!("update_category {id}"));
        Ok(())
    }

    fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        let mut categories = self.state.categories.lock().unwrap();
        let before = categories.len();
        categories.retain(|c| c.id != id);
        if categories.len() == before {
            return Err(not_found());
        }
        drop(categories);
        self.record(format!("delete_category {id}"));
        Ok(())
    }

    fn list_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        self.list(&self.state.reservations)
    }

    fn get_reservation(&self, id: i64) -> Result<Reservation, ApiError> {
        self.reservation(id).ok_or_else(not_found)
    }

    fn update_reservation(&self, id: i64, update: &ReservationUpdate) -> Result<(), ApiError> {
        let mut reservations = self.state.reservations.lock().unwrap();
        let res = reservations.iter_mut().find(|r| r.id == id).ok_or_else(not_found)?;
        res.people_count = update.people_count;
        res.status = update.status.clone();
        drop(reservations);
        self.record(format!("update_reservation {id} {}", update.status));
        Ok(())
    }
}

// ---- fixtures ----

pub fn user(id: i64, first: &str, last: &str, status: &str, kind: &str, created: &str) -> User {
    serde_json::from_value(json!({
        "id": id,
        "firstName": first,
        "lastName": last,
        "email": format!("{}@mail.com", first.to_lowercase()),
        "type": kind,
        "verification_status": status,
        "is_2FA_activated": 0,
        "email_verified": 1,
        "created_at": created,
    }))
    .unwrap()
}

pub fn post(id: i64, title: &str, status: &str, owner_email: &str, created: &str) -> Post {
    serde_json::from_value(json!({
        "id": id,
        "title": title,
        "subTitle": format!("{title} subtitle"),
        "description": "A fine day out",
        "price": "49.90",
        "bought": 3,
        "status": status,
        "expire_date": "2025-12-31",
        "established_quantity": 10,
        "cancellation_time": 24,
        "created_at": created,
        "user": { "id": 900 + id, "firstName": "Owner", "lastName": "Person", "email": owner_email },
    }))
    .unwrap()
}

pub fn category(id: i64, title_en: &str, title_es: &str, created: &str) -> Category {
    serde_json::from_value(json!({
        "id": id,
        "title": title_en,
        "title_en": title_en,
        "title_es": title_es,
        "created_at": created,
    }))
    .unwrap()
}

pub fn reservation(id: i64, offer: &str, client_first: &str, status: &str, created: &str) -> Reservation {
    serde_json::from_value(json!({
        "id": id,
        "start_date": "2024-07-01",
        "end_date": "2024-07-03",
        "people_count": 2,
        "additional_people_count": 0,
        "babies_count": 0,
        "pets_count": 0,
        "user_id": 50 + id,
        "post_id": 70 + id,
        "status": status,
        "created_at": created,
        "post": { "id": 70 + id, "title": offer },
        "user": {
            "id": 50 + id,
            "firstName": client_first,
            "lastName": "Guest",
            "email": format!("{}@mail.com", client_first.to_lowercase()),
        },
    }))
    .unwrap()
}

// ---- requests / responses ----

pub fn app(fake: &FakeApi) -> App {
    App::new(Box::new(fake.clone()), 10)
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn htmx_get(uri: &str) -> Request {
    http::Request::builder()
        .method("GET")
        .uri(uri)
        .header("HX-Request", "true")
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &str) -> Request {
    http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

pub const BOUNDARY: &str = "----backoffice-test-boundary";

/// `multipart/form-data` POST with text fields and an optional
/// `(field, file name, content type, bytes)` file part.
pub fn post_multipart(
    uri: &str,
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &str, &[u8])>,
) -> Request {
    let mut body: Vec<u8> = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                .as_bytes(),
        );
    }
    if let Some((name, file_name, content_type, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(body))
        .unwrap()
}

pub fn htmx_post(uri: &str) -> Request {
    http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("HX-Request", "true")
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(mut resp: Response) -> String {
    let mut body = String::new();
    resp.body_mut()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}

pub fn header(resp: &Response, name: &str) -> String {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

/// Rendered `<tr>`s inside the list table body.
pub fn table_rows(html: &str) -> Vec<String> {
    let doc = scraper::Html::parse_document(html);
    let rows = scraper::Selector::parse("#list-table tbody tr").unwrap();
    doc.select(&rows)
        .map(|tr| tr.text().collect::<Vec<_>>().join(" "))
        .collect()
}
