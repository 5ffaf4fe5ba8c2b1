// SPDX-License-Identifier: MPL-2.0
//! Image carousel.
//!
//! A presentation-only list of image cards. The carousel never decides what
//! to show: its owner clears it and feeds it URLs, then hands over pixel data
//! as downloads complete.

use crate::api::ImageId;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::image::Handle;
use iced::widget::{button, container, image, scrollable, text, Column, Row};
use iced::{alignment::Vertical, ContentFit, Element, Length};

/// Pixel state of a carousel item.
#[derive(Debug, Clone)]
pub enum ItemImage {
    Loading,
    Ready(Handle),
    Failed,
}

/// One rendered image.
#[derive(Debug, Clone)]
pub struct CarouselItem {
    url: String,
    image_id: Option<ImageId>,
    image: ItemImage,
    /// `None` until the favourite state of the image is known.
    favourite: Option<bool>,
}

impl CarouselItem {
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn image_id(&self) -> Option<&ImageId> {
        self.image_id.as_ref()
    }

    #[must_use]
    pub fn image(&self) -> &ItemImage {
        &self.image
    }

    #[must_use]
    pub fn favourite(&self) -> Option<bool> {
        self.favourite
    }
}

/// Messages emitted by the carousel widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    Select(usize),
    ToggleFavourite(ImageId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    ToggleFavourite(ImageId),
}

/// The carousel's rendered list and the index of the focused item.
#[derive(Debug, Default)]
pub struct Carousel {
    items: Vec<CarouselItem>,
    active: usize,
}

impl Carousel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
        self.active = 0;
    }

    /// Appends an item bound to `url` and returns its index.
    pub fn add_item(&mut self, url: impl Into<String>) -> usize {
        self.push(url.into(), None, None)
    }

    /// Appends an item that can be favourited.
    pub fn add_image(
        &mut self,
        url: impl Into<String>,
        image_id: ImageId,
        favourite: Option<bool>,
    ) -> usize {
        self.push(url.into(), Some(image_id), favourite)
    }

    fn push(&mut self, url: String, image_id: Option<ImageId>, favourite: Option<bool>) -> usize {
        self.items.push(CarouselItem {
            url,
            image_id,
            image: ItemImage::Loading,
            favourite,
        });
        self.items.len() - 1
    }

    /// Attaches decoded-on-demand image bytes to the item at `index`.
    ///
    /// Returns false when the index no longer exists.
    pub fn set_image(&mut self, index: usize, bytes: Vec<u8>) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.image = ItemImage::Ready(Handle::from_bytes(bytes));
                true
            }
            None => false,
        }
    }

    /// Marks the item at `index` as failed to load.
    pub fn set_failed(&mut self, index: usize) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.image = ItemImage::Failed;
                true
            }
            None => false,
        }
    }

    /// Records the favourite state for every item showing `image_id`.
    pub fn set_favourite(&mut self, image_id: &ImageId, favourite: bool) {
        for item in self
            .items
            .iter_mut()
            .filter(|item| item.image_id.as_ref() == Some(image_id))
        {
            item.favourite = Some(favourite);
        }
    }

    #[must_use]
    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn active_item(&self) -> Option<&CarouselItem> {
        self.items.get(self.active)
    }

    /// Moves focus to the next item, wrapping around.
    pub fn next(&mut self) {
        if !self.items.is_empty() {
            self.active = (self.active + 1) % self.items.len();
        }
    }

    /// Moves focus to the previous item, wrapping around.
    pub fn previous(&mut self) {
        if !self.items.is_empty() {
            self.active = (self.active + self.items.len() - 1) % self.items.len();
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Previous => {
                self.previous();
                Event::None
            }
            Message::Next => {
                self.next();
                Event::None
            }
            Message::Select(index) => {
                if index < self.items.len() {
                    self.active = index;
                }
                Event::None
            }
            Message::ToggleFavourite(image_id) => Event::ToggleFavourite(image_id),
        }
    }

    /// Renders the focused image with navigation, above a scrollable strip
    /// of every item.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let Some(active) = self.active_item() else {
            return container(text(i18n.tr("carousel-empty")).size(typography::BODY))
                .center_x(Length::Fill)
                .center_y(Length::Fixed(sizing::CAROUSEL_HEIGHT))
                .into();
        };

        let previous = button(text("‹").size(typography::TITLE)).on_press(Message::Previous);
        let next = button(text("›").size(typography::TITLE)).on_press(Message::Next);

        let mut focused = Column::new()
            .spacing(spacing::XS)
            .width(Length::Fill)
            .push(item_picture(active, i18n, sizing::CAROUSEL_HEIGHT));
        if let Some(favourite) = favourite_button(active, i18n) {
            focused = focused.push(favourite);
        }

        let stage = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(previous)
            .push(focused)
            .push(next);

        let strip = self
            .items
            .iter()
            .enumerate()
            .fold(Row::new().spacing(spacing::XS), |row, (index, item)| {
                let thumb = button(item_picture(item, i18n, sizing::THUMBNAIL))
                    .padding(spacing::XXS)
                    .on_press(Message::Select(index));
                let thumb = if index == self.active {
                    thumb.style(button::primary)
                } else {
                    thumb.style(button::secondary)
                };
                row.push(thumb)
            });

        let strip = scrollable(strip)
            .direction(scrollable::Direction::Horizontal(
                scrollable::Scrollbar::default(),
            ))
            .width(Length::Fill);

        Column::new()
            .spacing(spacing::SM)
            .push(stage)
            .push(strip)
            .into()
    }
}

fn item_picture<'a>(item: &'a CarouselItem, i18n: &'a I18n, height: f32) -> Element<'a, Message> {
    match &item.image {
        ItemImage::Ready(handle) => image(handle.clone())
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Contain)
            .into(),
        ItemImage::Loading => placeholder(i18n.tr("carousel-loading"), height),
        ItemImage::Failed => placeholder(i18n.tr("carousel-load-failed"), height),
    }
}

fn placeholder<'a>(label: String, height: f32) -> Element<'a, Message> {
    container(text(label).size(typography::CAPTION))
        .center_x(Length::Fixed(height))
        .center_y(Length::Fixed(height))
        .into()
}

fn favourite_button<'a>(item: &'a CarouselItem, i18n: &'a I18n) -> Option<Element<'a, Message>> {
    let image_id = item.image_id.clone()?;
    let label = if item.favourite == Some(true) {
        format!("♥ {}", i18n.tr("favourite-remove"))
    } else {
        format!("♡ {}", i18n.tr("favourite-add"))
    };
    Some(
        button(text(label).size(typography::BODY))
            .on_press(Message::ToggleFavourite(image_id))
            .into(),
    )
}
