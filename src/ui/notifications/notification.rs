// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::{Duration, Instant};

/// Identifier allocated by a [`NotificationCenter`](super::NotificationCenter).
///
/// Ids are strictly increasing within one center and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(super) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of a notification; drives the toast accent and the default lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    #[default]
    Success,
    Error,
    Warning,
    Info,
}

impl Kind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Info => palette::INFO_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Error => palette::ERROR_500,
        }
    }

    /// Glyph shown at the start of the toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Kind::Success => "✓",
            Kind::Info => "i",
            Kind::Warning => "!",
            Kind::Error => "×",
        }
    }
}

/// A message queued for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    message: String,
    kind: Kind,
    /// Requested lifetime; `<= 0` persists until removed.
    duration_ms: i64,
    visible: bool,
    created_at: Instant,
    /// Deadline of the auto-expiry timer, if any.
    expires_at: Option<Instant>,
    /// Set once the exit transition started.
    remove_at: Option<Instant>,
}

impl Notification {
    pub(super) fn new(
        id: NotificationId,
        message: String,
        kind: Kind,
        duration_ms: i64,
        now: Instant,
    ) -> Self {
        let expires_at = u64::try_from(duration_ms)
            .ok()
            .filter(|ms| *ms > 0)
            .map(|ms| now + Duration::from_millis(ms));

        Self {
            id,
            message,
            kind,
            duration_ms,
            visible: true,
            created_at: now,
            expires_at,
            remove_at: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn duration_ms(&self) -> i64 {
        self.duration_ms
    }

    /// False once the exit transition started; the entry is still stored
    /// until the transition ends.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether this notification stays until explicitly removed.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.expires_at.is_none()
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    pub(super) fn begin_exit(&mut self, remove_at: Instant) -> bool {
        if !self.visible {
            return false;
        }
        self.visible = false;
        self.remove_at = Some(remove_at);
        true
    }

    /// Whether either timer of this notification has elapsed at `now`.
    pub(super) fn is_due(&self, now: Instant) -> bool {
        let elapsed = |deadline: Option<Instant>| deadline.is_some_and(|at| now >= at);
        elapsed(self.expires_at) || elapsed(self.remove_at)
    }

    /// Earliest pending deadline, used to decide whether ticks are needed.
    pub(super) fn next_deadline(&self) -> Option<Instant> {
        match (self.expires_at, self.remove_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}
