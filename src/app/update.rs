// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler applies the synchronous half of an operation to the
//! [`GalleryController`] and returns the [`Task`] that performs the HTTP
//! call. Responses come back as [`Message`]s and are routed to the matching
//! `finish_*` method.

use super::Message;
use crate::api::{
    ApiError, ApiResult, Breed, BreedId, CatImage, DownloadProgress, Favourite, ImageId,
    SharedCatApi,
};
use crate::gallery::{self, GalleryController, ImageLoad, ImageSearch};
use crate::ui::carousel;
use iced::futures::channel::{mpsc, oneshot};
use iced::futures::{stream, Stream, StreamExt};
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut GalleryController,
    /// `None` when the HTTP client could not be built at startup.
    pub api: Option<&'a SharedCatApi>,
}

/// Requests the breed list.
pub fn load_breed_list(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(api) = ctx.api.cloned() else {
        tracing::error!("no API client, cannot load breeds");
        return Task::none();
    };

    let ticket = ctx.gallery.begin_breed_list();
    Task::perform(async move { api.list_breeds().await }, move |result| {
        Message::BreedsLoaded { ticket, result }
    })
}

pub fn handle_breeds_loaded(
    ctx: &mut UpdateContext<'_>,
    ticket: gallery::RequestTicket,
    result: ApiResult<Vec<Breed>>,
) -> Task<Message> {
    match ctx.gallery.finish_breed_list(ticket, result) {
        Some(first) => load_images_for_breed(ctx, first),
        None => Task::none(),
    }
}

/// Searches images of `breed`, streaming body progress before the result.
pub fn load_images_for_breed(ctx: &mut UpdateContext<'_>, breed: BreedId) -> Task<Message> {
    let Some(api) = ctx.api.cloned() else {
        tracing::error!(breed = %breed, "no API client, cannot load breed images");
        return Task::none();
    };

    let search = ctx.gallery.begin_breed_images(breed);
    tracing::debug!(breed = %search.breed, limit = search.limit, "searching breed images");
    Task::stream(search_stream(api, search))
}

/// Runs the search on the runtime and yields [`Message::SearchProgress`]
/// for each progress report, then a single [`Message::ImagesLoaded`].
fn search_stream(api: SharedCatApi, search: ImageSearch) -> impl Stream<Item = Message> {
    let (progress_tx, progress_rx) = mpsc::channel::<DownloadProgress>(100);
    let (result_tx, result_rx) = oneshot::channel();

    let request = search.clone();
    tokio::spawn(async move {
        let mut progress_tx = progress_tx;
        let mut report = |progress: DownloadProgress| {
            let _ = progress_tx.try_send(progress);
        };
        let result = api
            .search_images(&request.breed, request.limit, &mut report)
            .await;
        let _ = result_tx.send(result);
        // progress_tx is dropped here, closing the channel
    });

    #[allow(clippy::items_after_statements)]
    enum SearchPhase {
        ReceivingProgress {
            progress_rx: mpsc::Receiver<DownloadProgress>,
            result_rx: oneshot::Receiver<ApiResult<Vec<CatImage>>>,
        },
        Completed,
    }

    stream::unfold(
        SearchPhase::ReceivingProgress {
            progress_rx,
            result_rx,
        },
        move |phase| {
            let search = search.clone();
            async move {
                match phase {
                    SearchPhase::ReceivingProgress {
                        mut progress_rx,
                        result_rx,
                    } => match progress_rx.next().await {
                        Some(progress) => Some((
                            Message::SearchProgress {
                                ticket: search.ticket,
                                progress,
                            },
                            SearchPhase::ReceivingProgress {
                                progress_rx,
                                result_rx,
                            },
                        )),
                        None => {
                            // Progress channel closed, the result follows
                            let result = result_rx.await.unwrap_or_else(|_| {
                                Err(ApiError::Network(
                                    "search task cancelled".to_string(),
                                ))
                            });
                            Some((
                                Message::ImagesLoaded { search, result },
                                SearchPhase::Completed,
                            ))
                        }
                    },
                    SearchPhase::Completed => None, // Terminate the stream
                }
            }
        },
    )
}

pub fn handle_search_progress(
    ctx: &mut UpdateContext<'_>,
    ticket: gallery::RequestTicket,
    progress: DownloadProgress,
) -> Task<Message> {
    ctx.gallery.update_progress(ticket, progress);
    Task::none()
}

pub fn handle_images_loaded(
    ctx: &mut UpdateContext<'_>,
    search: &ImageSearch,
    result: ApiResult<Vec<CatImage>>,
) -> Task<Message> {
    let loads = ctx.gallery.finish_breed_images(search, result);
    fetch_images(ctx.api, loads)
}

/// Replaces the carousel with the favourites.
pub fn show_favourites(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(api) = ctx.api.cloned() else {
        tracing::error!("no API client, cannot load favourites");
        return Task::none();
    };

    let ticket = ctx.gallery.begin_favourites();
    Task::perform(async move { api.list_favourites().await }, move |result| {
        Message::FavouritesLoaded { ticket, result }
    })
}

pub fn handle_favourites_loaded(
    ctx: &mut UpdateContext<'_>,
    ticket: gallery::RequestTicket,
    result: ApiResult<Vec<Favourite>>,
) -> Task<Message> {
    let loads = ctx.gallery.finish_favourites(ticket, result);
    fetch_images(ctx.api, loads)
}

/// Handles carousel messages, starting a favourite toggle when asked to.
pub fn handle_carousel_message(
    ctx: &mut UpdateContext<'_>,
    message: carousel::Message,
) -> Task<Message> {
    match ctx.gallery.carousel_mut().update(message) {
        carousel::Event::None => Task::none(),
        carousel::Event::ToggleFavourite(image) => toggle_favourite(ctx, image),
    }
}

/// Adds `image` to the favourites, or removes it if already there.
pub fn toggle_favourite(ctx: &mut UpdateContext<'_>, image: ImageId) -> Task<Message> {
    let Some(api) = ctx.api.cloned() else {
        tracing::error!(image = %image, "no API client, cannot toggle favourite");
        return Task::none();
    };
    if !ctx.gallery.begin_toggle(&image) {
        return Task::none();
    }

    Task::perform(
        async move {
            let result = gallery::toggle_favourite(api.as_ref(), &image).await;
            (image, result)
        },
        |(image, result)| Message::ToggleCompleted { image, result },
    )
}

pub fn handle_toggle_completed(
    ctx: &mut UpdateContext<'_>,
    image: &ImageId,
    result: ApiResult<gallery::ToggleOutcome>,
) -> Task<Message> {
    ctx.gallery.finish_toggle(image, result);
    Task::none()
}

pub fn handle_image_bytes_loaded(
    ctx: &mut UpdateContext<'_>,
    load: &ImageLoad,
    result: ApiResult<Vec<u8>>,
) -> Task<Message> {
    ctx.gallery.finish_image_load(load, result);
    Task::none()
}

/// Downloads the pixels of every rendered carousel item concurrently.
fn fetch_images(api: Option<&SharedCatApi>, loads: Vec<ImageLoad>) -> Task<Message> {
    let Some(api) = api else {
        return Task::none();
    };

    Task::batch(loads.into_iter().map(|load| {
        let api = api.clone();
        Task::perform(
            async move {
                let result = api.fetch_image_bytes(&load.url).await;
                (load, result)
            },
            |(load, result)| Message::ImageBytesLoaded { load, result },
        )
    }))
}
