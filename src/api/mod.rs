// SPDX-License-Identifier: MPL-2.0
//! Access to the remote cat API.
//!
//! The gallery only talks to the service through the [`CatApi`] trait so that
//! the controller can be driven by an in-memory implementation in tests. The
//! production implementation is [`client::HttpCatApi`].

pub mod client;
#[cfg(test)]
pub mod mock;
pub mod types;

pub use client::{ClientSettings, HttpCatApi};
pub use types::{
    Breed, BreedId, BreedInfo, CatImage, CreatedFavourite, Favourite, FavouriteId,
    FavouriteImage, ImageId, NewFavourite,
};

use async_trait::async_trait;
use std::sync::Arc;

/// Result type for API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by API calls.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Connection, TLS or timeout failure.
    Network(String),
    /// The server answered with a non-success status code.
    Status(u16),
    /// The body could not be decoded into the expected shape.
    Decode(String),
    /// A URL could not be built from the configured base URL.
    InvalidUrl(String),
    /// The configured API key cannot be sent as a header value.
    InvalidApiKey,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Status(code) => write!(f, "HTTP status {code}"),
            ApiError::Decode(msg) => write!(f, "Malformed response: {msg}"),
            ApiError::InvalidUrl(msg) => write!(f, "Invalid URL: {msg}"),
            ApiError::InvalidApiKey => write!(f, "API key contains invalid characters"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Download progress of a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadProgress {
    /// Bytes received so far.
    pub loaded: u64,
    /// Announced body size, when the server sent a `Content-Length`.
    pub total: Option<u64>,
}

impl DownloadProgress {
    /// Completion in whole percent, or `None` when the total is unknown.
    #[must_use]
    pub fn percent(&self) -> Option<u8> {
        match self.total {
            Some(total) if total > 0 => {
                let pct = (self.loaded as f64 * 100.0 / total as f64).round();
                Some(pct.clamp(0.0, 100.0) as u8)
            }
            _ => None,
        }
    }
}

/// Callback receiving body download progress.
pub type ProgressFn<'a> = &'a mut (dyn FnMut(DownloadProgress) + Send);

/// Operations the gallery needs from the cat API.
#[async_trait]
pub trait CatApi: Send + Sync {
    /// `GET /breeds`
    async fn list_breeds(&self) -> ApiResult<Vec<Breed>>;

    /// `GET /images/search?breed_id=..&limit=..`, reporting body download
    /// progress to `progress`.
    async fn search_images(
        &self,
        breed: &BreedId,
        limit: u32,
        progress: ProgressFn<'_>,
    ) -> ApiResult<Vec<CatImage>>;

    /// `GET /favourites`
    async fn list_favourites(&self) -> ApiResult<Vec<Favourite>>;

    /// `POST /favourites`
    async fn add_favourite(&self, image: &ImageId) -> ApiResult<FavouriteId>;

    /// `DELETE /favourites/{id}`
    async fn remove_favourite(&self, favourite: &FavouriteId) -> ApiResult<()>;

    /// Downloads the raw bytes of an image URL.
    async fn fetch_image_bytes(&self, url: &str) -> ApiResult<Vec<u8>>;
}

/// Shared handle passed into async tasks.
pub type SharedCatApi = Arc<dyn CatApi>;
