// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::{ApiResult, Breed, CatImage, DownloadProgress, Favourite, ImageId};
use crate::gallery::{ImageLoad, ImageSearch, RequestTicket, ToggleOutcome};
use crate::ui::carousel;

/// Top-level messages consumed by `App::update`.
///
/// Responses carry the ticket (or search/load record) they were issued with
/// so the controller can drop the ones that have been superseded.
#[derive(Debug, Clone)]
pub enum Message {
    BreedsLoaded {
        ticket: RequestTicket,
        result: ApiResult<Vec<Breed>>,
    },
    /// A breed was picked in the selector.
    BreedSelected(Breed),
    /// Body download progress of an image search.
    SearchProgress {
        ticket: RequestTicket,
        progress: DownloadProgress,
    },
    ImagesLoaded {
        search: ImageSearch,
        result: ApiResult<Vec<CatImage>>,
    },
    /// The "favourites" button was pressed.
    ShowFavourites,
    FavouritesLoaded {
        ticket: RequestTicket,
        result: ApiResult<Vec<Favourite>>,
    },
    Carousel(carousel::Message),
    ToggleCompleted {
        image: ImageId,
        result: ApiResult<ToggleOutcome>,
    },
    ImageBytesLoaded {
        load: ImageLoad,
        result: ApiResult<Vec<u8>>,
    },
}

/// Runtime flags passed from the launcher to the UI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CAT_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional API key. Takes precedence over the environment and the
    /// config file.
    pub api_key: Option<String>,
}
