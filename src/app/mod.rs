// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct wires the gallery controller to localization, theme and
//! the HTTP client, and routes messages to the handlers in `update`.

mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::{ClientSettings, HttpCatApi, SharedCatApi};
use crate::config;
use crate::gallery::GalleryController;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: GalleryController,
    /// `None` when the client could not be built; every request is skipped.
    api: Option<SharedCatApi>,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("gallery", &self.gallery)
            .field("has_api", &self.api.is_some())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 760;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Loads settings, builds the HTTP client and requests the breed list.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        if let Some(key) = config_warning {
            tracing::warn!(warning = %i18n.tr(&key), "using default settings");
        }

        let settings = ClientSettings {
            base_url: config.api.base_url.clone(),
            api_key: config::resolve_api_key(flags.api_key, &config),
            timeout: config.api.timeout(),
        };
        let api = match HttpCatApi::new(&settings) {
            Ok(client) => Some(Arc::new(client) as SharedCatApi),
            Err(err) => {
                tracing::error!(error = %err, "failed to build API client");
                None
            }
        };

        let mut app = App {
            i18n,
            gallery: GalleryController::new(config.api.clamped_image_limit()),
            api,
            theme_mode: config.general.theme_mode.resolved(),
        };

        let task = update::load_breed_list(&mut app.context());
        (app, task)
    }

    fn context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            gallery: &mut self.gallery,
            api: self.api.as_ref(),
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.gallery.selected_breed() {
            Some(breed) => format!("{breed} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.context();

        match message {
            Message::BreedsLoaded { ticket, result } => {
                update::handle_breeds_loaded(&mut ctx, ticket, result)
            }
            Message::BreedSelected(breed) => update::load_images_for_breed(&mut ctx, breed.id),
            Message::SearchProgress { ticket, progress } => {
                update::handle_search_progress(&mut ctx, ticket, progress)
            }
            Message::ImagesLoaded { search, result } => {
                update::handle_images_loaded(&mut ctx, &search, result)
            }
            Message::ShowFavourites => update::show_favourites(&mut ctx),
            Message::FavouritesLoaded { ticket, result } => {
                update::handle_favourites_loaded(&mut ctx, ticket, result)
            }
            Message::Carousel(carousel_message) => {
                update::handle_carousel_message(&mut ctx, carousel_message)
            }
            Message::ToggleCompleted { image, result } => {
                update::handle_toggle_completed(&mut ctx, &image, result)
            }
            Message::ImageBytesLoaded { load, result } => {
                update::handle_image_bytes_loaded(&mut ctx, &load, result)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            colors: self.theme_mode.colors(),
        })
    }
}
