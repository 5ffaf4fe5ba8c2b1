// SPDX-License-Identifier: MPL-2.0
//! Gallery controller.
//!
//! Owns everything the gallery screen shows (breed selector, carousel, info
//! panel, progress bar and pointer state) and the transitions between them.
//! Each operation is split in two halves: `begin_*` records that a request
//! was issued and hands back a [`RequestTicket`], `finish_*` applies the
//! response. The HTTP call itself happens in between, in an async task, so
//! the controller can be driven from tests without a window or a runtime.
//!
//! Responses carrying a ticket that is no longer current are dropped, which
//! keeps a slow response for a previously selected breed from overwriting
//! the view of the breed selected afterwards.

mod info_panel;
mod progress;
mod sequence;

pub use info_panel::InfoEntry;
pub use progress::ProgressIndicator;
pub use sequence::{RequestSequence, RequestTicket};

use crate::api::{
    ApiResult, Breed, BreedId, CatApi, CatImage, DownloadProgress, Favourite, FavouriteId,
    ImageId,
};
use crate::ui::carousel::Carousel;
use std::collections::HashSet;

/// What the carousel currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Empty,
    Breed(BreedId),
    Favourites,
}

/// Pixel download owed to a carousel item after a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLoad {
    pub ticket: RequestTicket,
    pub index: usize,
    pub url: String,
}

/// Parameters of an image search issued by [`GalleryController::begin_breed_images`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSearch {
    pub ticket: RequestTicket,
    pub breed: BreedId,
    pub limit: u32,
}

/// Result of a favourite toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added(FavouriteId),
    Removed(FavouriteId),
}

/// Reads the favourites, then deletes the one matching `image` or creates a
/// new one when none matches.
///
/// This is a read-then-write sequence; [`GalleryController::begin_toggle`]
/// keeps two toggles of the same image from overlapping.
pub async fn toggle_favourite(api: &dyn CatApi, image: &ImageId) -> ApiResult<ToggleOutcome> {
    let favourites = api.list_favourites().await?;

    match favourites.iter().find(|fav| &fav.image_id == image) {
        Some(existing) => {
            api.remove_favourite(&existing.id).await?;
            Ok(ToggleOutcome::Removed(existing.id.clone()))
        }
        None => {
            let id = api.add_favourite(image).await?;
            Ok(ToggleOutcome::Added(id))
        }
    }
}

#[derive(Debug)]
pub struct GalleryController {
    breeds: Vec<Breed>,
    selected: Option<BreedId>,
    carousel: Carousel,
    info_panel: Vec<InfoEntry>,
    progress: ProgressIndicator,
    sequence: RequestSequence,
    mode: ViewMode,
    pending_toggles: HashSet<ImageId>,
    image_limit: u32,
}

impl GalleryController {
    #[must_use]
    pub fn new(image_limit: u32) -> Self {
        Self {
            breeds: Vec::new(),
            selected: None,
            carousel: Carousel::new(),
            info_panel: Vec::new(),
            progress: ProgressIndicator::new(),
            sequence: RequestSequence::new(),
            mode: ViewMode::Empty,
            pending_toggles: HashSet::new(),
            image_limit,
        }
    }

    #[must_use]
    pub fn breeds(&self) -> &[Breed] {
        &self.breeds
    }

    /// The selector entry matching the current selection.
    #[must_use]
    pub fn selected_breed(&self) -> Option<&Breed> {
        let selected = self.selected.as_ref()?;
        self.breeds.iter().find(|breed| &breed.id == selected)
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    #[must_use]
    pub fn info_panel(&self) -> &[InfoEntry] {
        &self.info_panel
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressIndicator {
        &self.progress
    }

    #[must_use]
    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    #[must_use]
    pub fn image_limit(&self) -> u32 {
        self.image_limit
    }

    // ------------------------------------------------------------------
    // Breed list
    // ------------------------------------------------------------------

    pub fn begin_breed_list(&mut self) -> RequestTicket {
        self.progress.begin();
        self.sequence.issue()
    }

    /// Fills the selector and returns the breed whose images should load
    /// next (the first one), if any.
    ///
    /// The selector is filled even when a newer request has taken over the
    /// carousel; only the first-breed image load is skipped then.
    pub fn finish_breed_list(
        &mut self,
        ticket: RequestTicket,
        result: ApiResult<Vec<Breed>>,
    ) -> Option<BreedId> {
        let current = self.complete(ticket, "first breed images");

        let breeds = match result {
            Ok(breeds) => breeds,
            Err(err) => {
                tracing::error!(error = %err, "error fetching breeds");
                return None;
            }
        };

        tracing::info!(count = breeds.len(), "breed list loaded");
        self.breeds = breeds;
        let first = self.breeds.first().map(|breed| breed.id.clone());
        if first.is_none() {
            tracing::warn!("breed list is empty");
        }
        first.filter(|_| current)
    }

    // ------------------------------------------------------------------
    // Breed images
    // ------------------------------------------------------------------

    /// Selects `breed` and issues the image search for it.
    pub fn begin_breed_images(&mut self, breed: BreedId) -> ImageSearch {
        self.selected = Some(breed.clone());
        self.progress.begin();
        ImageSearch {
            ticket: self.sequence.issue(),
            breed,
            limit: self.image_limit,
        }
    }

    /// Applies download progress of the current image search.
    pub fn update_progress(&mut self, ticket: RequestTicket, progress: DownloadProgress) {
        if self.sequence.is_current(ticket) {
            self.progress.update(progress);
        }
    }

    /// Replaces the carousel and info panel with `result`.
    pub fn finish_breed_images(
        &mut self,
        search: &ImageSearch,
        result: ApiResult<Vec<CatImage>>,
    ) -> Vec<ImageLoad> {
        if !self.complete(search.ticket, "breed images") {
            return Vec::new();
        }

        let images = match result {
            Ok(images) => images,
            Err(err) => {
                tracing::error!(breed = %search.breed, error = %err, "error fetching breed images");
                return Vec::new();
            }
        };

        self.carousel.clear();
        self.info_panel.clear();
        self.mode = ViewMode::Breed(search.breed.clone());

        let mut loads = Vec::with_capacity(images.len());
        for image in &images {
            let index = self
                .carousel
                .add_image(image.url.clone(), image.id.clone(), None);
            let entry = InfoEntry::from_image(image);
            if entry.is_placeholder {
                tracing::warn!(image = %image.id, breed = %search.breed, "image has no breed metadata");
            }
            self.info_panel.push(entry);
            loads.push(ImageLoad {
                ticket: search.ticket,
                index,
                url: image.url.clone(),
            });
        }
        loads
    }

    // ------------------------------------------------------------------
    // Favourites view
    // ------------------------------------------------------------------

    pub fn begin_favourites(&mut self) -> RequestTicket {
        self.progress.begin();
        self.sequence.issue()
    }

    /// Replaces the carousel with the favourited images and empties the info
    /// panel.
    pub fn finish_favourites(
        &mut self,
        ticket: RequestTicket,
        result: ApiResult<Vec<Favourite>>,
    ) -> Vec<ImageLoad> {
        if !self.complete(ticket, "favourites") {
            return Vec::new();
        }

        let favourites = match result {
            Ok(favourites) => favourites,
            Err(err) => {
                tracing::error!(error = %err, "error fetching favourites");
                return Vec::new();
            }
        };

        self.carousel.clear();
        self.info_panel.clear();
        self.mode = ViewMode::Favourites;

        let mut loads = Vec::with_capacity(favourites.len());
        for favourite in favourites {
            let Some(url) = favourite.image.url else {
                tracing::warn!(favourite = %favourite.id, "favourite has no image URL, skipping");
                continue;
            };
            let index = self
                .carousel
                .add_image(url.clone(), favourite.image_id, Some(true));
            loads.push(ImageLoad { ticket, index, url });
        }
        loads
    }

    // ------------------------------------------------------------------
    // Favourite toggle
    // ------------------------------------------------------------------

    /// Registers a toggle for `image`. Returns false when a toggle for the
    /// same image is still running.
    pub fn begin_toggle(&mut self, image: &ImageId) -> bool {
        if !self.pending_toggles.insert(image.clone()) {
            tracing::debug!(image = %image, "favourite toggle already in flight, ignoring");
            return false;
        }
        self.progress.begin();
        true
    }

    pub fn finish_toggle(&mut self, image: &ImageId, result: ApiResult<ToggleOutcome>) {
        self.pending_toggles.remove(image);
        self.progress.finish();

        match result {
            Ok(ToggleOutcome::Added(id)) => {
                tracing::info!(image = %image, favourite = %id, "added image to favourites");
                self.carousel.set_favourite(image, true);
            }
            Ok(ToggleOutcome::Removed(id)) => {
                tracing::info!(image = %image, favourite = %id, "removed image from favourites");
                self.carousel.set_favourite(image, false);
            }
            Err(err) => {
                tracing::error!(image = %image, error = %err, "error toggling favourite");
            }
        }
    }

    // ------------------------------------------------------------------
    // Image pixels
    // ------------------------------------------------------------------

    /// Hands downloaded bytes to the carousel if the render they belong to
    /// is still on screen.
    pub fn finish_image_load(&mut self, load: &ImageLoad, result: ApiResult<Vec<u8>>) {
        if !self.sequence.is_current(load.ticket) {
            return;
        }
        match result {
            Ok(bytes) => {
                self.carousel.set_image(load.index, bytes);
            }
            Err(err) => {
                tracing::warn!(url = %load.url, error = %err, "failed to download image");
                self.carousel.set_failed(load.index);
            }
        }
    }

    /// Settles the progress bar for a finished request and reports whether
    /// its ticket is still current. Superseded requests only release the busy
    /// pointer.
    fn complete(&mut self, ticket: RequestTicket, what: &str) -> bool {
        let current = self.sequence.is_current(ticket);
        if current {
            self.progress.finish();
        } else {
            self.progress.release();
            tracing::debug!(ticket = ticket.value(), what, "discarding superseded response");
        }
        current
    }
}
