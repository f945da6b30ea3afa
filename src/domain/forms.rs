// src/domain/forms.rs
//
// Edit/create forms: raw posted values in, typed API payloads out.
// Invalid input never becomes a ServerError; the page is re-rendered
// with the messages next to the fields.
use std::collections::BTreeMap;
use url::form_urlencoded;

use crate::domain::category::{Category, CategoryInput};
use crate::domain::dates::date_input_value;
use crate::domain::post::{Post, PostUpdate};
use crate::domain::reservation::{Reservation, ReservationUpdate};
use crate::domain::user::{User, UserUpdate};

pub type FormValues = BTreeMap<String, String>;

/// Largest image a category accepts.
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

/// A file part of a `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// Browsers send an empty, nameless part when no file was picked.
    pub fn is_empty(&self) -> bool {
        self.file_name.is_empty() && self.bytes.is_empty()
    }
}

/// Everything a POST carried: text fields plus any uploaded files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostedForm {
    pub values: FormValues,
    pub files: Vec<UploadedFile>,
}

impl PostedForm {
    pub fn from_values(values: FormValues) -> Self {
        Self {
            values,
            files: Vec::new(),
        }
    }

    pub fn file(&self, field: &str) -> Option<&UploadedFile> {
        self.files
            .iter()
            .find(|f| f.field == field && !f.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

/// Decode an `application/x-www-form-urlencoded` body. Later keys win.
pub fn parse_form(body: &str) -> FormValues {
    form_urlencoded::parse(body.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

struct Reader<'a> {
    values: &'a FormValues,
    errors: FormErrors,
}

impl<'a> Reader<'a> {
    fn new(values: &'a FormValues) -> Self {
        Self {
            values,
            errors: FormErrors::default(),
        }
    }

    fn optional(&self, field: &str) -> String {
        self.values
            .get(field)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }

    fn required(&mut self, field: &'static str, message: &str) -> String {
        let v = self.optional(field);
        if v.is_empty() {
            self.errors.push(field, message);
        }
        v
    }

    fn int_min(&mut self, field: &'static str, min: i64, message: &str) -> i64 {
        let raw = self.optional(field);
        match raw.parse::<i64>() {
            Ok(n) if n >= min => n,
            _ => {
                self.errors.push(field, message);
                0
            }
        }
    }

    fn number_min(&mut self, field: &'static str, min: f64, message: &str) -> f64 {
        let raw = self.optional(field);
        match raw.parse::<f64>() {
            Ok(n) if n.is_finite() && n >= min => n,
            _ => {
                self.errors.push(field, message);
                0.0
            }
        }
    }

    fn finish<T>(self, value: T) -> Result<T, FormErrors> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(self.errors)
        }
    }
}

fn values<const N: usize>(pairs: [(&str, String); N]) -> FormValues {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// Trim + lowercase, minimal sanity check.
pub fn normalize_email(email: &str) -> Option<String> {
    let e = email.trim().to_lowercase();
    if e.is_empty() || !e.contains('@') || e.starts_with('@') || e.ends_with('@') {
        return None;
    }
    Some(e)
}

// ---- users ----

pub fn user_values(u: &User) -> FormValues {
    values([
        ("firstName", u.first_name.clone()),
        ("lastName", u.last_name.clone()),
        ("email", u.email.clone()),
        ("phone", u.phone.clone().unwrap_or_default()),
    ])
}

pub fn parse_user(values: &FormValues) -> Result<UserUpdate, FormErrors> {
    let mut r = Reader::new(values);
    let first_name = r.required("firstName", "First name is required");
    let last_name = r.required("lastName", "Last name is required");
    let raw_email = r.optional("email");
    let email = normalize_email(&raw_email).unwrap_or_else(|| {
        r.errors.push("email", "A valid email is required");
        raw_email
    });
    let phone = Some(r.optional("phone")).filter(|p| !p.is_empty());

    r.finish(UserUpdate {
        first_name,
        last_name,
        email,
        phone,
    })
}

// ---- offers ----

pub fn post_values(p: &Post) -> FormValues {
    values([
        ("title", p.title.clone()),
        ("subTitle", p.sub_title.clone()),
        ("description", p.description.clone()),
        ("price", p.price.to_string()),
        (
            "expire_date",
            p.expire_date.as_deref().map(date_input_value).unwrap_or_default(),
        ),
        ("status", p.status.clone()),
        (
            "established_quantity",
            p.established_quantity.map(|n| n.to_string()).unwrap_or_default(),
        ),
        (
            "cancellation_time",
            p.cancellation_time.map(|n| n.to_string()).unwrap_or_default(),
        ),
    ])
}

pub fn parse_post(values: &FormValues) -> Result<PostUpdate, FormErrors> {
    let mut r = Reader::new(values);
    let update = PostUpdate {
        title: r.required("title", "Title is required"),
        sub_title: r.required("subTitle", "Subtitle is required"),
        description: r.required("description", "Description is required"),
        price: r.number_min("price", 0.0, "Price is required"),
        expire_date: r.required("expire_date", "Expiry date is required"),
        status: r.required("status", "Status is required"),
        established_quantity: r.int_min(
            "established_quantity",
            0,
            "Established quantity is required",
        ),
        cancellation_time: r.int_min("cancellation_time", 0, "Cancellation time is required"),
    };
    r.finish(update)
}

// ---- reservations ----

pub fn reservation_values(res: &Reservation) -> FormValues {
    values([
        ("start_date", date_input_value(&res.start_date)),
        ("end_date", date_input_value(&res.end_date)),
        ("people_count", res.people_count.to_string()),
        ("additional_people_count", res.additional_people_count.to_string()),
        ("babies_count", res.babies_count.to_string()),
        ("pets_count", res.pets_count.to_string()),
        ("user_id", res.user_id.to_string()),
        ("post_id", res.post_id.to_string()),
        ("status", res.status.clone()),
    ])
}

pub fn parse_reservation(id: i64, values: &FormValues) -> Result<ReservationUpdate, FormErrors> {
    let mut r = Reader::new(values);
    let update = ReservationUpdate {
        id,
        start_date: r.required("start_date", "Start date is required"),
        end_date: r.required("end_date", "End date is required"),
        people_count: r.int_min("people_count", 1, "At least one person is required"),
        additional_people_count: r.int_min("additional_people_count", 0, "Must be 0 or more"),
        babies_count: r.int_min("babies_count", 0, "Must be 0 or more"),
        pets_count: r.int_min("pets_count", 0, "Must be 0 or more"),
        user_id: r.int_min("user_id", 1, "User is required"),
        post_id: r.int_min("post_id", 1, "Offer is required"),
        status: r.required("status", "Status is required"),
    };
    r.finish(update)
}

// ---- categories ----

pub fn category_values(c: &Category) -> FormValues {
    values([
        ("title_en", c.title_en.clone()),
        ("title_es", c.title_es.clone()),
        ("description_en", c.description_en.clone().unwrap_or_default()),
        ("description_es", c.description_es.clone().unwrap_or_default()),
    ])
}

fn check_image(file: &UploadedFile, errors: &mut FormErrors) {
    if !file.content_type.starts_with("image/") {
        errors.push("image", "Only image files are allowed");
    } else if file.bytes.len() > MAX_IMAGE_BYTES {
        errors.push("image", "The image can't be larger than 2 MB");
    }
}

/// Creating only needs the English title; editing needs both. The image
/// is optional either way.
pub fn parse_category(form: &PostedForm, require_es: bool) -> Result<CategoryInput, FormErrors> {
    let mut r = Reader::new(&form.values);
    let title_en = r.required("title_en", "English title is required");
    let title_es = if require_es {
        r.required("title_es", "Spanish title is required")
    } else {
        r.optional("title_es")
    };
    let input = CategoryInput {
        title_en,
        title_es,
        description_en: r.optional("description_en"),
        description_es: r.optional("description_es"),
        image: form.file("image").cloned(),
    };
    if let Some(image) = &input.image {
        check_image(image, &mut r.errors);
    }
    r.finish(input)
}
