//! Data access for the remote marketplace API.
//!
//! Screens and routes only see [`AdminApi`]; production uses [`HttpApi`],
//! tests swap in an in-memory fake.

pub mod client;
pub mod error;

pub use client::HttpApi;
pub use error::ApiError;

use crate::domain::{
    Category, CategoryInput, Post, PostUpdate, Reservation, ReservationUpdate, User, UserUpdate,
};

pub trait AdminApi: Send + Sync {
    fn list_users(&self) -> Result<Vec<User>, ApiError>;
    fn get_user(&self, id: i64) -> Result<User, ApiError>;
    fn update_user(&self, id: i64, update: &UserUpdate) -> Result<(), ApiError>;
    fn change_user_verification(&self, id: i64, status: &str) -> Result<(), ApiError>;

    fn list_posts(&self) -> Result<Vec<Post>, ApiError>;
    fn get_post(&self, id: i64) -> Result<Post, ApiError>;
    fn update_post(&self, id: i64, update: &PostUpdate) -> Result<(), ApiError>;
    fn change_post_status(&self, id: i64, status: &str) -> Result<(), ApiError>;

    fn list_categories(&self) -> Result<Vec<Category>, ApiError>;
    fn get_category(&self, id: i64) -> Result<Category, ApiError>;
    fn create_category(&self, input: &CategoryInput) -> Result<Category, ApiError>;
    fn update_category(&self, id: i64, input: &CategoryInput) -> Result<(), ApiError>;
    fn delete_category(&self, id: i64) -> Result<(), ApiError>;

    fn list_reservations(&self) -> Result<Vec<Reservation>, ApiError>;
    fn get_reservation(&self, id: i64) -> Result<Reservation, ApiError>;
    fn update_reservation(&self, id: i64, update: &ReservationUpdate) -> Result<(), ApiError>;
}
