// SPDX-License-Identifier: MPL-2.0
//! Inline error block for a failed operation.
//!
//! Every feature screen renders its runner's `error` through this component,
//! so failures look the same whichever screen raised them.
//!
//! # Usage
//!
//! ```ignore
//! ErrorBlock::new(message)
//!     .title(i18n.tr("error-block-title"))
//!     .on_dismiss(i18n.tr("error-block-dismiss"), Message::ClearError)
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Configuration for the error block.
#[derive(Debug, Clone)]
pub struct ErrorBlock<Message> {
    message: String,
    title: Option<String>,
    dismiss: Option<(String, Message)>,
}

impl<Message: Clone + 'static> ErrorBlock<Message> {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            title: None,
            dismiss: None,
        }
    }

    /// Sets the heading shown above the message.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Adds a dismiss button emitting `message`.
    #[must_use]
    pub fn on_dismiss(mut self, label: impl Into<String>, message: Message) -> Self {
        self.dismiss = Some((label.into(), message));
        self
    }

    pub fn view(self) -> Element<'static, Message> {
        let mut body = Column::new().spacing(spacing::XXS).width(Length::Fill);

        if let Some(title) = self.title {
            body = body.push(
                Text::new(title)
                    .size(typography::BODY_LG)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::ERROR_500),
                    }),
            );
        }
        // Structured details arrive pretty-printed; keep their line breaks.
        body = body.push(Text::new(self.message).size(typography::BODY_SM));

        let mut row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(body);

        if let Some((label, message)) = self.dismiss {
            row = row.push(
                button(Text::new(label).size(typography::BODY_SM))
                    .on_press(message)
                    .style(button_styles::secondary),
            );
        }

        Container::new(row)
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(container_styles::error_block)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Clear,
    }

    #[test]
    fn builder_keeps_parts() {
        let block: ErrorBlock<TestMessage> = ErrorBlock::new("Email already registered")
            .title("Request failed")
            .on_dismiss("Dismiss", TestMessage::Clear);

        assert_eq!(block.message, "Email already registered");
        assert_eq!(block.title.as_deref(), Some("Request failed"));
        assert_eq!(block.dismiss, Some(("Dismiss".to_string(), TestMessage::Clear)));
    }

    #[test]
    fn view_renders_without_optional_parts() {
        let _element: Element<'static, TestMessage> = ErrorBlock::new("boom").view();
    }
}
