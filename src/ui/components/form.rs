// SPDX-License-Identifier: MPL-2.0
//! Labelled inputs shared by the create forms, plus the parsers that turn
//! their text into request fields.

use crate::ui::design_tokens::{sizing, spacing, typography};
use chrono::NaiveDate;
use iced::widget::{pick_list, text, text_input, Column, Text};
use iced::{Element, Length, Theme};
use std::borrow::Borrow;
use std::fmt::Display;
use std::str::FromStr;

/// Date format of every date field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn label<'a>(caption: &str) -> Text<'a> {
    Text::new(caption.to_string())
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().secondary.base.text),
        })
}

/// Text field with a caption above it.
pub fn field<'a, Message: Clone + 'a>(
    caption: &str,
    placeholder: &str,
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(label(caption))
        .push(
            text_input(placeholder, value)
                .on_input(on_input)
                .size(typography::BODY)
                .width(Length::Fixed(sizing::INPUT_WIDTH)),
        )
        .into()
}

/// Narrow numeric field.
pub fn number_field<'a, Message: Clone + 'a>(
    caption: &str,
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(label(caption))
        .push(
            text_input("0", value)
                .on_input(on_input)
                .size(typography::BODY)
                .width(Length::Fixed(sizing::NUMBER_INPUT_WIDTH)),
        )
        .into()
}

/// Pick list with a caption above it.
pub fn picker<'a, T, L, Message>(
    caption: &str,
    options: L,
    selected: Option<T>,
    on_select: impl Fn(T) -> Message + 'a,
) -> Element<'a, Message>
where
    T: Display + PartialEq + Clone + 'a,
    L: Borrow<[T]> + 'a,
    Message: Clone + 'a,
{
    Column::new()
        .spacing(spacing::XXS)
        .push(label(caption))
        .push(
            pick_list(options, selected, on_select)
                .text_size(typography::BODY)
                .width(Length::Fixed(sizing::INPUT_WIDTH)),
        )
        .into()
}

/// Pick-list entry standing for either every value or one of them.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOption<T> {
    pub value: Option<T>,
    label: String,
}

impl<T: Display + Clone> FilterOption<T> {
    /// The "all" entry followed by one entry per value.
    pub fn list(all_label: impl Into<String>, values: &[T]) -> Vec<Self> {
        std::iter::once(Self {
            value: None,
            label: all_label.into(),
        })
        .chain(values.iter().map(|value| Self {
            value: Some(value.clone()),
            label: value.to_string(),
        }))
        .collect()
    }
}

impl<T: PartialEq + Clone> FilterOption<T> {
    /// Entry of `options` matching `current`.
    pub fn find(options: &[Self], current: Option<&T>) -> Option<Self> {
        options
            .iter()
            .find(|option| option.value.as_ref() == current)
            .cloned()
    }
}

impl<T> Display for FilterOption<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

/// Parses a `YYYY-MM-DD` field.
#[must_use]
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}

/// Parses a numeric field, ignoring surrounding whitespace.
#[must_use]
pub fn parse_number<T: FromStr>(input: &str) -> Option<T> {
    input.trim().parse().ok()
}

/// Returns the trimmed text, or `None` if blank.
#[must_use]
pub fn non_blank(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_use_iso_format() {
        assert_eq!(parse_date(" 2026-03-01 "), NaiveDate::from_ymd_opt(2026, 3, 1));
        assert_eq!(parse_date("01/03/2026"), None);
    }

    #[test]
    fn filter_list_starts_with_all() {
        let options = FilterOption::list("All", &[1u8, 2]);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].to_string(), "All");
        assert_eq!(options[0].value, None);
        assert_eq!(FilterOption::find(&options, Some(&2)).and_then(|o| o.value), Some(2));
        assert_eq!(FilterOption::find(&options, None), Some(options[0].clone()));
    }

    #[test]
    fn numbers_and_blanks() {
        assert_eq!(parse_number::<u32>(" 12 "), Some(12));
        assert_eq!(parse_number::<i64>("x"), None);
        assert_eq!(non_blank("  a "), Some("a".to_string()));
        assert_eq!(non_blank("   "), None);
    }
}
