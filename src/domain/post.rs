// src/domain/post.rs
use serde::{Deserialize, Serialize};

use crate::domain::de;
use crate::domain::user::UserSummary;

pub const ACTIVE: &str = "active";
pub const INACTIVE: &str = "inactive";

pub const STATUSES: &[(&str, &str)] = &[
    ("draft", "Draft"),
    ("published", "Published"),
    (ACTIVE, "Active"),
    (INACTIVE, "Inactive"),
];

/// An offer listed on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "subTitle", default)]
    pub sub_title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub bought: i64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub expire_date: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_opt_i64")]
    pub category_id: Option<i64>,
    #[serde(default, deserialize_with = "de::lenient_opt_f64")]
    pub average_rating: Option<f64>,
    #[serde(rename = "totalReviews", default, deserialize_with = "de::lenient_opt_i64")]
    pub total_reviews: Option<i64>,
    #[serde(default, deserialize_with = "de::lenient_opt_i64")]
    pub established_quantity: Option<i64>,
    #[serde(default, deserialize_with = "de::lenient_opt_i64")]
    pub cancellation_time: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub user: Option<UserSummary>,
    /// Cover image path, relative to the public image host.
    #[serde(rename = "urlPost", default)]
    pub url_post: Option<String>,
    #[serde(default, deserialize_with = "de::json_string_list")]
    pub images: Vec<String>,
}

/// Resolve an image path from the API against `base`. Absolute URLs pass through.
pub fn image_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

impl Post {
    pub fn owner_email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }

    pub fn is_active(&self) -> bool {
        self.status == ACTIVE
    }

    pub fn cover_url(&self, base: &str) -> Option<String> {
        self.url_post
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(|p| image_url(base, p))
    }

    pub fn gallery_urls(&self, base: &str) -> Vec<String> {
        self.images.iter().map(|p| image_url(base, p)).collect()
    }

    pub fn toggled_status(&self) -> &'static str {
        if self.is_active() {
            INACTIVE
        } else {
            ACTIVE
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostUpdate {
    pub title: String,
    #[serde(rename = "subTitle")]
    pub sub_title: String,
    pub description: String,
    pub price: f64,
    pub expire_date: String,
    pub status: String,
    pub established_quantity: i64,
    pub cancellation_time: i64,
}
