// SPDX-License-Identifier: MPL-2.0
//! Page scaffolding shared by the feature screens: header, action buttons,
//! the runner error block and the empty state.

use super::error_block::ErrorBlock;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, text, Button, Column, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length, Theme};

/// Title, optional subtitle and right-aligned actions.
pub fn header<'a, Message: 'a>(
    title: String,
    subtitle: Option<String>,
    actions: Vec<Element<'a, Message>>,
) -> Element<'a, Message> {
    let mut heading = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(title).size(typography::TITLE_LG));
    if let Some(subtitle) = subtitle {
        heading = heading.push(muted(subtitle));
    }

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(heading)
        .push(Space::new().width(Length::Fill))
        .push(Row::with_children(actions).spacing(spacing::XS))
        .into()
}

/// Button that is only pressable when `message` is `Some`.
///
/// Screens pass `None` while their runner is pending.
pub fn action<'a, Message: Clone + 'a>(
    label: String,
    message: Option<Message>,
    style: impl Fn(&Theme, button::Status) -> button::Style + 'a,
) -> Button<'a, Message> {
    button(Text::new(label).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .style(style)
        .on_press_maybe(message)
}

/// Error block for a runner's current error, dismissible with `clear`.
pub fn error<'a, Message: Clone + 'static>(
    message: Option<String>,
    i18n: &I18n,
    clear: Message,
) -> Option<Element<'a, Message>> {
    message.map(|message| {
        ErrorBlock::new(message)
            .title(i18n.tr("error-block-title"))
            .on_dismiss(i18n.tr("error-block-dismiss"), clear)
            .view()
    })
}

/// Centered placeholder shown when a list is empty.
pub fn empty_state<'a, Message: 'a>(title: String, hint: Option<String>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XXS)
        .padding(spacing::LG)
        .width(Length::Fill)
        .align_x(iced::Alignment::Center)
        .push(Text::new(title).size(typography::BODY_LG));
    if let Some(hint) = hint {
        column = column.push(muted(hint));
    }
    column.into()
}

/// Secondary text in the theme's muted color.
pub fn muted<'a>(content: String) -> Text<'a> {
    Text::new(content)
        .size(typography::BODY_SM)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().secondary.base.text),
        })
}

/// Section heading inside a panel.
pub fn section_title<'a>(content: String) -> Text<'a> {
    Text::new(content).size(typography::TITLE_SM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum TestMessage {
        Clear,
    }

    #[test]
    fn error_block_only_when_message_present() {
        let i18n = I18n::default();
        assert!(error(None, &i18n, TestMessage::Clear).is_none());
        assert!(error(Some("boom".into()), &i18n, TestMessage::Clear).is_some());
    }
}
