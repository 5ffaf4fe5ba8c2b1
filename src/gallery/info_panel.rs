// SPDX-License-Identifier: MPL-2.0
//! Breed information shown next to the carousel.

use crate::api::CatImage;

/// One info-panel entry, rendered for one image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InfoEntry {
    pub name: String,
    pub description: String,
    pub temperament: Option<String>,
    pub origin: Option<String>,
    /// The image carried no breed metadata at all.
    pub is_placeholder: bool,
}

impl InfoEntry {
    /// Builds the entry for `image`, defaulting every absent field.
    #[must_use]
    pub fn from_image(image: &CatImage) -> Self {
        match image.primary_breed() {
            Some(breed) => Self {
                name: breed.name.clone().unwrap_or_default(),
                description: breed.description.clone().unwrap_or_default(),
                temperament: breed.temperament.clone().filter(|t| !t.is_empty()),
                origin: breed.origin.clone().filter(|o| !o.is_empty()),
                is_placeholder: false,
            },
            None => Self {
                is_placeholder: true,
                ..Self::default()
            },
        }
    }
}
