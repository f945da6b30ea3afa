// src/domain/user.rs
use serde::{Deserialize, Serialize};

use crate::domain::de;

pub const VERIFIED: &str = "verified";
pub const UNVERIFIED: &str = "unverified";

pub const VERIFICATION_STATUSES: &[(&str, &str)] = &[(VERIFIED, "Verified"), (UNVERIFIED, "Unverified")];

pub const TYPES: &[(&str, &str)] = &[("admin", "Admin"), ("user", "User"), ("seller", "Seller")];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub dni: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(rename = "type", default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub verification_status: Option<String>,
    #[serde(default)]
    pub verified_at: Option<String>,
    #[serde(rename = "is_2FA_activated", default, deserialize_with = "de::lenient_bool")]
    pub two_factor: bool,
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub email_verified: bool,
    #[serde(default, deserialize_with = "de::lenient_opt_f64")]
    pub percentaje: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    pub fn is_verified(&self) -> bool {
        self.verification_status.as_deref() == Some(VERIFIED)
    }

    /// The status the verify/cancel button sends.
    pub fn toggled_verification(&self) -> &'static str {
        if self.is_verified() {
            UNVERIFIED
        } else {
            VERIFIED
        }
    }
}

/// The slim user projection embedded in posts and reservations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl UserSummary {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// Fields the edit form sends back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserUpdate {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
