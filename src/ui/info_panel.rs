// SPDX-License-Identifier: MPL-2.0
//! Breed information panel.
//!
//! Lists one entry per carousel item. The entry of the focused item is
//! highlighted with the brand color.

use crate::gallery::InfoEntry;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{container, scrollable, text, Column};
use iced::{Element, Length};

/// Context required to render the panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub entries: &'a [InfoEntry],
    /// Index of the focused carousel item.
    pub active: usize,
    pub colors: ColorScheme,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.i18n.tr("info-panel-title"))
        .size(typography::TITLE_SM)
        .color(ctx.colors.text_primary);

    let body: Element<'a, Message> = if ctx.entries.is_empty() {
        text(ctx.i18n.tr("info-panel-empty"))
            .size(typography::BODY)
            .color(ctx.colors.text_secondary)
            .into()
    } else {
        let column = ctx
            .entries
            .iter()
            .enumerate()
            .fold(Column::new().spacing(spacing::MD), |column, (index, entry)| {
                column.push(entry_view(entry, index == ctx.active, ctx.i18n, &ctx.colors))
            });
        scrollable(column).height(Length::Fill).into()
    };

    container(
        Column::new()
            .spacing(spacing::SM)
            .push(title)
            .push(body),
    )
    .padding(spacing::MD)
    .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
    .height(Length::Fill)
    .into()
}

fn entry_view<'a, Message: 'a>(
    entry: &InfoEntry,
    active: bool,
    i18n: &I18n,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let lines = entry_lines(entry, i18n);
    let name_color = if active {
        colors.brand_primary
    } else {
        colors.text_primary
    };

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(text(lines.name).size(typography::BODY).color(name_color))
        .push(
            text(lines.description)
                .size(typography::CAPTION)
                .color(colors.text_secondary),
        );
    for detail in lines.details {
        column = column.push(
            text(detail)
                .size(typography::CAPTION)
                .color(colors.text_secondary),
        );
    }
    column.into()
}

/// Display strings of one entry.
#[derive(Debug, PartialEq)]
struct EntryLines {
    name: String,
    description: String,
    details: Vec<String>,
}

fn entry_lines(entry: &InfoEntry, i18n: &I18n) -> EntryLines {
    let name = if entry.name.is_empty() {
        i18n.tr("info-unknown-breed")
    } else {
        entry.name.clone()
    };
    let description = if entry.description.is_empty() {
        i18n.tr("info-no-description")
    } else {
        entry.description.clone()
    };

    let mut details = Vec::new();
    if let Some(temperament) = &entry.temperament {
        details.push(i18n.tr_with_args("info-temperament", &[("value", temperament.as_str())]));
    }
    if let Some(origin) = &entry.origin {
        details.push(i18n.tr_with_args("info-origin", &[("value", origin.as_str())]));
    }

    EntryLines {
        name,
        description,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn placeholder_entry_uses_fallback_text() {
        let i18n = english();
        let entry = InfoEntry {
            is_placeholder: true,
            ..InfoEntry::default()
        };

        let lines = entry_lines(&entry, &i18n);
        assert_eq!(lines.name, i18n.tr("info-unknown-breed"));
        assert_eq!(lines.description, i18n.tr("info-no-description"));
        assert!(lines.details.is_empty());
    }

    #[test]
    fn optional_fields_become_detail_lines() {
        let i18n = english();
        let entry = InfoEntry {
            name: "Bengal".to_string(),
            description: "Spotted".to_string(),
            temperament: Some("Alert".to_string()),
            origin: Some("United States".to_string()),
            is_placeholder: false,
        };

        let lines = entry_lines(&entry, &i18n);
        assert_eq!(lines.name, "Bengal");
        assert_eq!(lines.details.len(), 2);
        assert!(lines.details[0].contains("Alert"));
        assert!(lines.details[1].contains("United States"));
    }
}
