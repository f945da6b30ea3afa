// src/domain/reservation.rs
use serde::{Deserialize, Serialize};

use crate::domain::de;
use crate::domain::user::UserSummary;

pub const STATUSES: &[(&str, &str)] = &[
    ("pending", "Pending"),
    ("approved", "Approved"),
    ("completed", "Completed"),
    ("canceled", "Canceled"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub people_count: i64,
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub additional_people_count: i64,
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub babies_count: i64,
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub pets_count: i64,
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub user_id: i64,
    #[serde(default, deserialize_with = "de::lenient_i64")]
    pub post_id: i64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub post: Option<ReservedPost>,
    #[serde(default)]
    pub user: Option<UserSummary>,
}

/// The offer a reservation points at, as embedded by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservedPost {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub expire_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Reservation {
    pub fn post_title(&self) -> Option<&str> {
        self.post.as_ref().map(|p| p.title.as_str())
    }

    pub fn client_name(&self) -> String {
        self.user
            .as_ref()
            .map(UserSummary::full_name)
            .unwrap_or_default()
    }
}

/// The single-reservation endpoint sometimes wraps the record.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ReservationPayload {
    Wrapped { reservation: Reservation },
    Bare(Reservation),
}

impl From<ReservationPayload> for Reservation {
    fn from(p: ReservationPayload) -> Self {
        match p {
            ReservationPayload::Wrapped { reservation } => reservation,
            ReservationPayload::Bare(r) => r,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReservationUpdate {
    pub id: i64,
    pub start_date: String,
    pub end_date: String,
    pub people_count: i64,
    pub additional_people_count: i64,
    pub babies_count: i64,
    pub pets_count: i64,
    pub user_id: i64,
    pub post_id: i64,
    pub status: String,
}
