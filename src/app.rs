use crate::api::AdminApi;
use crate::config::DEFAULT_IMAGE_BASE_URL;

/// Everything a request handler needs. Shared read-only across workers.
pub struct App {
    pub api: Box<dyn AdminApi>,
    pub page_size: usize,
    /// Where offer images referenced by relative path are served from.
    pub image_base_url: String,
}

impl App {
    pub fn new(api: Box<dyn AdminApi>, page_size: usize) -> Self {
        Self {
            api,
            page_size: page_size.max(1),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
        }
    }

    pub fn with_image_base_url(mut self, url: impl Into<String>) -> Self {
        self.image_base_url = url.into();
        self
    }
}
