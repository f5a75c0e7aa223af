// SPDX-License-Identifier: MPL-2.0
//! Labelled figure for a screen's summary row.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{text, Column, Container, Row, Text};
use iced::{Color, Element, Length, Theme};

/// Renders one stat card. `accent` tints the figure.
pub fn stat_card<'a, Message: 'a>(
    label: impl Into<String>,
    value: impl ToString,
    accent: Option<Color>,
) -> Element<'a, Message> {
    let value = Text::new(value.to_string())
        .size(typography::TITLE_MD)
        .style(move |theme: &Theme| text::Style {
            color: Some(accent.unwrap_or(theme.palette().text)),
        });
    let label = Text::new(label.into())
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().secondary.base.text),
        });

    Container::new(Column::new().spacing(spacing::XXS).push(value).push(label))
        .width(Length::Fixed(sizing::STAT_CARD_WIDTH))
        .padding(spacing::SM)
        .style(container_styles::card)
        .into()
}

/// Lays out stat cards in a row.
pub fn stat_row<'a, Message: 'a>(cards: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    Row::with_children(cards).spacing(spacing::SM).into()
}
