// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts switch tabs only when no widget captured the key, so
//! typing `m` into a search field never leaves the screen.

use super::config::NOTIFICATION_TICK_MS;
use super::{Message, Tab};
use crate::ui::notifications::NotificationMessage;
use iced::{event, keyboard, time, window, Event, Subscription};
use std::time::Duration;

/// Routes bare `m`/`c`/`p` presses to tab selection.
pub fn create_shortcut_subscription() -> Subscription<Message> {
    event::listen_with(shortcut)
}

fn shortcut(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Character(ref c),
            modifiers,
            ..
        }) if !modifiers.command() && !modifiers.alt() && !modifiers.control() => {
            Tab::from_shortcut(c.as_str()).map(Message::SelectTab)
        }
        _ => None,
    }
}

/// Periodic tick firing notification timers, active only while one is armed.
pub fn create_tick_subscription(has_pending_timers: bool) -> Subscription<Message> {
    if has_pending_timers {
        time::every(Duration::from_millis(NOTIFICATION_TICK_MS))
            .map(|now| Message::Notification(NotificationMessage::Tick(now)))
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::{key, Key, Location, Modifiers};

    fn press(c: &str, modifiers: Modifiers) -> Event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Character(c.into()),
            modified_key: Key::Character(c.into()),
            physical_key: key::Physical::Code(key::Code::KeyM),
            location: Location::Standard,
            modifiers,
            text: Some(c.into()),
            repeat: false,
        })
    }

    #[test]
    fn ignored_letter_selects_tab() {
        let message = shortcut(
            press("c", Modifiers::default()),
            event::Status::Ignored,
            window::Id::unique(),
        );
        assert!(matches!(message, Some(Message::SelectTab(Tab::Coaches))));
    }

    #[test]
    fn captured_or_modified_presses_are_ignored() {
        let id = window::Id::unique();
        assert!(shortcut(press("m", Modifiers::default()), event::Status::Captured, id).is_none());
        assert!(shortcut(press("p", Modifiers::CTRL), event::Status::Ignored, id).is_none());
    }
}
