// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery screen is a toolbar (breed selector, favourites button and
//! progress bar) above the carousel, with the info panel on the right.

use super::Message;
use crate::gallery::GalleryController;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::info_panel;
use crate::ui::theming::ColorScheme;
use iced::widget::{
    button, container, mouse_area, pick_list, progress_bar, text, Column, Container, Row,
};
use iced::{alignment::Vertical, mouse, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a GalleryController,
    pub colors: ColorScheme,
}

/// Renders the gallery screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let ViewContext {
        i18n,
        gallery,
        colors,
    } = ctx;

    let main = Column::new()
        .spacing(spacing::MD)
        .push(toolbar(i18n, gallery))
        .push(gallery.carousel().view(i18n).map(Message::Carousel));

    let panel = info_panel::view(info_panel::ViewContext {
        i18n,
        entries: gallery.info_panel(),
        active: gallery.carousel().active_index(),
        colors,
    });

    let content = Row::new()
        .spacing(spacing::LG)
        .push(container(main).width(Length::Fill))
        .push(
            container(panel).style(move |_theme| container::Style {
                background: Some(colors.surface_secondary.into()),
                ..container::Style::default()
            }),
        );

    let page = Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill);

    mouse_area(page)
        .interaction(pointer_interaction(gallery.progress().is_busy()))
        .into()
}

/// Pointer shown over the window: the progress cursor while a request runs.
fn pointer_interaction(busy: bool) -> mouse::Interaction {
    if busy {
        mouse::Interaction::Progress
    } else {
        mouse::Interaction::default()
    }
}

fn toolbar<'a>(i18n: &'a I18n, gallery: &'a GalleryController) -> Element<'a, Message> {
    let selector = pick_list(
        gallery.breeds(),
        gallery.selected_breed().cloned(),
        Message::BreedSelected,
    )
    .placeholder(i18n.tr("breed-select-placeholder"))
    .width(Length::Fixed(sizing::PICK_LIST_WIDTH));

    let favourites = button(text(i18n.tr("favourites-button")).size(typography::BODY))
        .on_press(Message::ShowFavourites);

    let percent = gallery.progress().percent();
    let progress = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            container(progress_bar(0.0..=100.0, f32::from(percent)))
                .width(Length::Fixed(sizing::PROGRESS_WIDTH))
                .height(Length::Fixed(sizing::PROGRESS_HEIGHT)),
        )
        .push(
            text(i18n.tr_with_args("progress-label", &[("percent", &percent.to_string())]))
                .size(typography::CAPTION),
        );

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(selector)
        .push(favourites)
        .push(progress)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_shows_progress_while_busy() {
        assert_eq!(pointer_interaction(true), mouse::Interaction::Progress);
        assert_eq!(pointer_interaction(false), mouse::Interaction::default());
    }

    #[test]
    fn pointer_follows_gallery_requests() {
        let mut gallery = GalleryController::new(5);
        let ticket = gallery.begin_favourites();
        assert_eq!(
            pointer_interaction(gallery.progress().is_busy()),
            mouse::Interaction::Progress
        );

        gallery.finish_favourites(ticket, Ok(Vec::new()));
        assert_eq!(
            pointer_interaction(gallery.progress().is_busy()),
            mouse::Interaction::default()
        );
    }
}
