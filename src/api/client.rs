// SPDX-License-Identifier: MPL-2.0
//! `reqwest` implementation of [`CatApi`].

use super::{
    ApiError, ApiResult, Breed, BreedId, CatApi, CatImage, CreatedFavourite, DownloadProgress,
    Favourite, FavouriteId, ImageId, NewFavourite, ProgressFn,
};
use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::header::HeaderValue;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-api-key";

/// Upper bound on the buffer reserved from an announced `Content-Length`.
/// Larger bodies grow the buffer as chunks arrive.
const MAX_PREALLOCATED_BODY: u64 = 64 * 1024;

/// Connection parameters for [`HttpCatApi`].
#[derive(Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl std::fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientSettings")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.api_key.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// HTTP client for the cat API.
#[derive(Clone)]
pub struct HttpCatApi {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<HeaderValue>,
}

impl std::fmt::Debug for HttpCatApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCatApi")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

impl HttpCatApi {
    pub fn new(settings: &ClientSettings) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("cat_gallery/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let api_key = match settings.api_key.as_deref() {
            Some(key) => {
                let mut value = HeaderValue::from_str(key)
                    .map_err(|_| ApiError::InvalidApiKey)?;
                value.set_sensitive(true);
                Some(value)
            }
            None => {
                tracing::warn!("no API key configured; favourites calls will be rejected");
                None
            }
        };

        reqwest::Url::parse(&settings.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", settings.base_url)))?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Joins `path` onto the base URL.
    pub fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn api_request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.http.request(method, self.build_url(path));
        match &self.api_key {
            Some(key) => request.header(API_KEY_HEADER, key.clone()),
            None => request,
        }
    }

    /// Sends a request, logging its start and completion, and rejects
    /// non-success statuses.
    async fn send(&self, request: RequestBuilder, label: &str) -> ApiResult<Response> {
        let started = Instant::now();
        tracing::debug!(request = label, "request started");

        let result = request.send().await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let response = match result {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(request = label, elapsed_ms, "request failed");
                return Err(err.into());
            }
        };

        let status = response.status();
        tracing::debug!(request = label, elapsed_ms, status = status.as_u16(), "request completed");

        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.send(self.api_request(Method::GET, path), path).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Reads a response body chunk by chunk, reporting progress along the way.
async fn read_body_with_progress(response: Response, progress: ProgressFn<'_>) -> ApiResult<Vec<u8>> {
    let total = response.content_length();
    let mut body = Vec::with_capacity(initial_body_capacity(total));
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        body.extend_from_slice(&chunk);
        progress(DownloadProgress {
            loaded: body.len() as u64,
            total,
        });
    }

    Ok(body)
}

fn initial_body_capacity(announced: Option<u64>) -> usize {
    announced.map_or(0, |length| {
        usize::try_from(length.min(MAX_PREALLOCATED_BODY)).unwrap_or_default()
    })
}

#[async_trait]
impl CatApi for HttpCatApi {
    async fn list_breeds(&self) -> ApiResult<Vec<Breed>> {
        self.get_json("/breeds").await
    }

    async fn search_images(
        &self,
        breed: &BreedId,
        limit: u32,
        progress: ProgressFn<'_>,
    ) -> ApiResult<Vec<CatImage>> {
        let request = self
            .api_request(Method::GET, "/images/search")
            .query(&[("breed_id", breed.as_str())])
            .query(&[("limit", limit)]);
        let response = self.send(request, "/images/search").await?;
        let body = read_body_with_progress(response, progress).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn list_favourites(&self) -> ApiResult<Vec<Favourite>> {
        self.get_json("/favourites").await
    }

    async fn add_favourite(&self, image: &ImageId) -> ApiResult<FavouriteId> {
        let request = self
            .api_request(Method::POST, "/favourites")
            .json(&NewFavourite {
                image_id: image.clone(),
            });
        let response = self.send(request, "/favourites").await?;
        let body = response.bytes().await?;
        let created: CreatedFavourite = serde_json::from_slice(&body)?;
        Ok(created.id)
    }

    async fn remove_favourite(&self, favourite: &FavouriteId) -> ApiResult<()> {
        let path = format!("/favourites/{favourite}");
        self.send(self.api_request(Method::DELETE, &path), &path)
            .await?;
        Ok(())
    }

    async fn fetch_image_bytes(&self, url: &str) -> ApiResult<Vec<u8>> {
        let parsed =
            reqwest::Url::parse(url).map_err(|e| ApiError::InvalidUrl(format!("{url}: {e}")))?;
        let response = self.send(self.http.get(parsed), url).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(base_url: &str) -> ClientSettings {
        ClientSettings {
            base_url: base_url.to_string(),
            api_key: Some("test-key".to_string()),
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn build_url_joins_without_double_slash() {
        let api = HttpCatApi::new(&settings("https://api.example.com/v1/")).unwrap();
        assert_eq!(api.build_url("/breeds"), "https://api.example.com/v1/breeds");
        assert_eq!(
            api.build_url("favourites/12"),
            "https://api.example.com/v1/favourites/12"
        );
    }

    #[test]
    fn announced_length_caps_initial_buffer() {
        assert_eq!(initial_body_capacity(None), 0);
        assert_eq!(initial_body_capacity(Some(512)), 512);
        assert_eq!(
            initial_body_capacity(Some(1_000_000_000_000_000)),
            MAX_PREALLOCATED_BODY as usize
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = HttpCatApi::new(&settings("not a url")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn debug_output_hides_api_key() {
        let api = HttpCatApi::new(&settings("https://api.example.com/v1")).unwrap();
        let debug = format!("{api:?}");
        assert!(!debug.contains("test-key"));
        assert!(debug.contains("has_api_key: true"));
    }

    #[tokio::test]
    async fn image_bytes_rejects_relative_url() {
        let api = HttpCatApi::new(&settings("https://api.example.com/v1")).unwrap();
        let err = api.fetch_image_bytes("images/cat.jpg").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }
}
