// src/domain/category.rs
use serde::{Deserialize, Serialize};

use crate::domain::forms::UploadedFile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub title_en: String,
    #[serde(default)]
    pub title_es: String,
    #[serde(default)]
    pub description_en: Option<String>,
    #[serde(default)]
    pub description_es: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Category {
    /// Spanish title when there is one.
    pub fn display_title(&self) -> &str {
        if self.title_es.trim().is_empty() {
            &self.title
        } else {
            &self.title_es
        }
    }
}

/// Create/update body; sent to the API as multipart, the image as a file part.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryInput {
    pub title_en: String,
    pub title_es: String,
    pub description_en: String,
    pub description_es: String,
    pub image: Option<UploadedFile>,
}

impl CategoryInput {
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("title_en", self.title_en.as_str()),
            ("title_es", self.title_es.as_str()),
            ("description_en", self.description_en.as_str()),
            ("description_es", self.description_es.as_str()),
        ]
    }
}
