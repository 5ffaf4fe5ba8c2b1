// SPDX-License-Identifier: MPL-2.0
//! Wire types exchanged with the cat API.
//!
//! Records returned by the service are frequently incomplete (some breeds have
//! images without breed metadata, deleted images leave favourites with an empty
//! `image` object), so every field that is not an identifier is optional or
//! defaulted.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier of a breed (e.g. `abys`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreedId(String);

impl BreedId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BreedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of an image hosted by the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(String);

impl ImageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a favourite record.
///
/// The service emits numeric ids; they are kept as strings so the type does
/// not depend on the numeric width the server happens to use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FavouriteId(String);

impl FavouriteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FavouriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for FavouriteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => FavouriteId(n.to_string()),
            Raw::Text(s) => FavouriteId(s),
        })
    }
}

/// A breed as listed by `GET /breeds`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Breed {
    pub id: BreedId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub temperament: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
}

/// Shown by the breed selector.
impl fmt::Display for Breed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            f.write_str(self.id.as_str())
        } else {
            f.write_str(&self.name)
        }
    }
}

/// Breed metadata embedded in an image record. Nothing is guaranteed here.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct BreedInfo {
    #[serde(default)]
    pub id: Option<BreedId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub temperament: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
}

/// An image returned by `GET /images/search`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatImage {
    pub id: ImageId,
    pub url: String,
    #[serde(default)]
    pub breeds: Option<Vec<BreedInfo>>,
}

impl CatImage {
    /// First breed attached to the image, if the record carries any.
    #[must_use]
    pub fn primary_breed(&self) -> Option<&BreedInfo> {
        self.breeds.as_deref().and_then(<[BreedInfo]>::first)
    }
}

/// The image embedded in a favourite record.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FavouriteImage {
    #[serde(default)]
    pub id: Option<ImageId>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A favourite as listed by `GET /favourites`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Favourite {
    pub id: FavouriteId,
    pub image_id: ImageId,
    #[serde(default)]
    pub image: FavouriteImage,
}

/// Body of `POST /favourites`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewFavourite {
    pub image_id: ImageId,
}

/// Response of `POST /favourites`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedFavourite {
    pub id: FavouriteId,
    #[serde(default)]
    pub message: Option<String>,
}
