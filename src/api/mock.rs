// SPDX-License-Identifier: MPL-2.0
//! In-memory [`CatApi`] used by unit tests.

use super::{
    ApiError, ApiResult, Breed, BreedId, CatApi, CatImage, DownloadProgress, Favourite,
    FavouriteId, FavouriteImage, ImageId, ProgressFn,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// A call recorded by [`MockCatApi`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListBreeds,
    SearchImages { breed: BreedId, limit: u32 },
    ListFavourites,
    AddFavourite(ImageId),
    RemoveFavourite(FavouriteId),
    FetchImage(String),
}

#[derive(Default)]
struct Inner {
    breeds: Vec<Breed>,
    images: HashMap<BreedId, Vec<CatImage>>,
    favourites: Vec<Favourite>,
    next_favourite_id: u64,
    calls: Vec<Call>,
    failing: bool,
}

/// Records every call and answers from canned data.
#[derive(Default)]
pub struct MockCatApi {
    inner: Mutex<Inner>,
}

impl MockCatApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_breeds(self, breeds: Vec<Breed>) -> Self {
        self.inner.lock().unwrap().breeds = breeds;
        self
    }

    pub fn with_images(self, breed: &str, images: Vec<CatImage>) -> Self {
        self.inner
            .lock()
            .unwrap()
            .images
            .insert(BreedId::new(breed), images);
        self
    }

    pub fn with_favourites(self, favourites: Vec<Favourite>) -> Self {
        self.inner.lock().unwrap().favourites = favourites;
        self
    }

    /// Makes every subsequent call fail with a network error.
    pub fn failing(self) -> Self {
        self.inner.lock().unwrap().failing = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn favourites(&self) -> Vec<Favourite> {
        self.inner.lock().unwrap().favourites.clone()
    }

    fn record(&self, call: Call) -> ApiResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(call);
        if inner.failing {
            Err(ApiError::Network("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

pub fn breed(id: &str, name: &str) -> Breed {
    Breed {
        id: BreedId::new(id),
        name: name.to_string(),
        description: Some(format!("{name} description")),
        temperament: None,
        origin: None,
    }
}

pub fn image(id: &str, breed_name: Option<&str>) -> CatImage {
    CatImage {
        id: ImageId::new(id),
        url: format!("https://cdn.example.com/{id}.jpg"),
        breeds: breed_name.map(|name| {
            vec![super::BreedInfo {
                id: None,
                name: Some(name.to_string()),
                description: Some(format!("{name} description")),
                temperament: None,
                origin: None,
            }]
        }),
    }
}

pub fn favourite(id: &str, image_id: &str) -> Favourite {
    Favourite {
        id: FavouriteId::new(id),
        image_id: ImageId::new(image_id),
        image: FavouriteImage {
            id: Some(ImageId::new(image_id)),
            url: Some(format!("https://cdn.example.com/{image_id}.jpg")),
        },
    }
}

#[async_trait]
impl CatApi for MockCatApi {
    async fn list_breeds(&self) -> ApiResult<Vec<Breed>> {
        self.record(Call::ListBreeds)?;
        Ok(self.inner.lock().unwrap().breeds.clone())
    }

    async fn search_images(
        &self,
        breed: &BreedId,
        limit: u32,
        progress: ProgressFn<'_>,
    ) -> ApiResult<Vec<CatImage>> {
        self.record(Call::SearchImages {
            breed: breed.clone(),
            limit,
        })?;
        let images: Vec<CatImage> = self
            .inner
            .lock()
            .unwrap()
            .images
            .get(breed)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .take(limit as usize)
            .collect();
        progress(DownloadProgress {
            loaded: 50,
            total: Some(100),
        });
        progress(DownloadProgress {
            loaded: 100,
            total: Some(100),
        });
        Ok(images)
    }

    async fn list_favourites(&self) -> ApiResult<Vec<Favourite>> {
        self.record(Call::ListFavourites)?;
        Ok(self.inner.lock().unwrap().favourites.clone())
    }

    async fn add_favourite(&self, image: &ImageId) -> ApiResult<FavouriteId> {
        self.record(Call::AddFavourite(image.clone()))?;
        let mut inner = self.inner.lock().unwrap();
        inner.next_favourite_id += 1;
        let id = FavouriteId::new(format!("new-{}", inner.next_favourite_id));
        inner.favourites.push(Favourite {
            id: id.clone(),
            image_id: image.clone(),
            image: FavouriteImage::default(),
        });
        Ok(id)
    }

    async fn remove_favourite(&self, favourite: &FavouriteId) -> ApiResult<()> {
        self.record(Call::RemoveFavourite(favourite.clone()))?;
        let mut inner = self.inner.lock().unwrap();
        let before = inner.favourites.len();
        inner.favourites.retain(|f| &f.id != favourite);
        if inner.favourites.len() == before {
            return Err(ApiError::Status(404));
        }
        Ok(())
    }

    async fn fetch_image_bytes(&self, url: &str) -> ApiResult<Vec<u8>> {
        self.record(Call::FetchImage(url.to_string()))?;
        Ok(url.as_bytes().to_vec())
    }
}
