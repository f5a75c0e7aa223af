// SPDX-License-Identifier: MPL-2.0
//! Process-wide notification queue.
//!
//! The [`NotificationCenter`] is created once by the application and cloned
//! into every feature view; all clones share one queue. Timers are stored as
//! deadlines and fired by [`NotificationCenter::expire_due`], which the
//! application calls from its tick subscription. Each notification carries
//! its own deadline, so expiry of one never touches another.

use super::notification::{Kind, Notification, NotificationId};
use crate::app::config::defaults::{DEFAULT_ERROR_DURATION_MS, DEFAULT_NOTIFICATION_DURATION_MS};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Delay between hiding a dismissed toast and removing it from the queue.
pub const EXIT_TRANSITION: Duration = Duration::from_millis(320);

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Close button pressed: start the two-phase removal.
    Dismiss(NotificationId),
    /// Periodic tick firing elapsed timers.
    Tick(Instant),
}

#[derive(Debug)]
struct Inner {
    next_id: AtomicU64,
    default_duration_ms: i64,
    error_duration_ms: i64,
    entries: Mutex<Vec<Notification>>,
}

/// Shared handle on the notification queue.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    inner: Arc<Inner>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationCenter {
    /// Creates a center with the built-in default durations.
    #[must_use]
    pub fn new() -> Self {
        Self::with_durations(DEFAULT_NOTIFICATION_DURATION_MS, DEFAULT_ERROR_DURATION_MS)
    }

    /// Creates a center whose convenience methods use the given durations.
    #[must_use]
    pub fn with_durations(default_duration_ms: i64, error_duration_ms: i64) -> Self {
        Self {
            inner: Arc::new(Inner {
                next_id: AtomicU64::new(1),
                default_duration_ms,
                error_duration_ms,
                entries: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Queues a notification and returns its id.
    ///
    /// A `duration_ms` of zero or less keeps the notification until it is
    /// removed explicitly.
    pub fn add(&self, message: impl Into<String>, kind: Kind, duration_ms: i64) -> NotificationId {
        self.add_at(message, kind, duration_ms, Instant::now())
    }

    /// [`add`](Self::add) with an explicit creation instant.
    pub fn add_at(
        &self,
        message: impl Into<String>,
        kind: Kind,
        duration_ms: i64,
        now: Instant,
    ) -> NotificationId {
        let id = NotificationId::from_raw(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let notification = Notification::new(id, message.into(), kind, duration_ms, now);
        tracing::debug!(%id, ?kind, duration_ms, message = notification.message(), "notification added");

        self.entries().push(notification);
        id
    }

    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.add(message, Kind::Success, self.inner.default_duration_ms)
    }

    pub fn info(&self, message: impl Into<String>) -> NotificationId {
        self.add(message, Kind::Info, self.inner.default_duration_ms)
    }

    pub fn warning(&self, message: impl Into<String>) -> NotificationId {
        self.add(message, Kind::Warning, self.inner.default_duration_ms)
    }

    /// Errors stay on screen longer than the other kinds.
    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.add(message, Kind::Error, self.inner.error_duration_ms)
    }

    /// Removes a notification immediately.
    ///
    /// Returns `false` if it was already gone.
    pub fn remove(&self, id: NotificationId) -> bool {
        let mut entries = self.entries();
        let Some(pos) = entries.iter().position(|n| n.id() == id) else {
            return false;
        };
        entries.remove(pos);
        tracing::debug!(%id, "notification removed");
        true
    }

    /// Hides a notification and schedules its removal after
    /// [`EXIT_TRANSITION`].
    ///
    /// Returns `false` if the notification is gone or already hidden.
    pub fn dismiss(&self, id: NotificationId, now: Instant) -> bool {
        self.entries()
            .iter_mut()
            .find(|n| n.id() == id)
            .is_some_and(|n| n.begin_exit(now + EXIT_TRANSITION))
    }

    /// Removes every notification whose expiry or exit transition elapsed.
    ///
    /// Returns the number of removed notifications.
    pub fn expire_due(&self, now: Instant) -> usize {
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|n| !n.is_due(now));
        let removed = before - entries.len();
        if removed > 0 {
            tracing::debug!(removed, "notifications expired");
        }
        removed
    }

    /// Applies a toast overlay message.
    pub fn handle_message(&self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id, Instant::now());
            }
            Message::Tick(now) => {
                self.expire_due(*now);
            }
        }
    }

    /// Current notifications in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Notification> {
        self.entries().clone()
    }

    /// Looks up a notification by id.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<Notification> {
        self.entries().iter().find(|n| n.id() == id).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Whether any stored notification still has a timer to fire.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.entries().iter().any(|n| n.next_deadline().is_some())
    }

    #[must_use]
    pub fn default_duration_ms(&self) -> i64 {
        self.inner.default_duration_ms
    }

    #[must_use]
    pub fn error_duration_ms(&self) -> i64 {
        self.inner.error_duration_ms
    }

    fn entries(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.inner
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn messages(center: &NotificationCenter) -> Vec<String> {
        center
            .snapshot()
            .iter()
            .map(|n| n.message().to_string())
            .collect()
    }

    #[test]
    fn new_center_is_empty() {
        let center = NotificationCenter::new();
        assert!(center.is_empty());
        assert!(!center.has_pending_timers());
    }

    #[test]
    fn ids_strictly_increase_and_are_not_reused() {
        let center = NotificationCenter::new();
        let a = center.add("a", Kind::Info, 0);
        let b = center.add("b", Kind::Info, 0);
        center.remove(b);
        let c = center.add("c", Kind::Info, 0);

        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn centers_have_independent_sequences() {
        let first = NotificationCenter::new();
        let second = NotificationCenter::new();
        assert_eq!(first.add("x", Kind::Info, 0), second.add("x", Kind::Info, 0));
    }

    #[test]
    fn timed_notification_expires_after_its_duration() {
        let center = NotificationCenter::new();
        let start = Instant::now();
        let id = center.add_at("x", Kind::Success, 100, start);

        assert_eq!(center.expire_due(start + ms(99)), 0);
        assert!(center.get(id).is_some());

        assert_eq!(center.expire_due(start + ms(100)), 1);
        assert!(center.get(id).is_none());
    }

    #[test]
    fn persistent_notification_stays_until_removed() {
        let center = NotificationCenter::new();
        let start = Instant::now();
        let id = center.add_at("x", Kind::Error, 0, start);

        center.expire_due(start + Duration::from_secs(3600));
        assert!(center.get(id).is_some());

        assert!(center.remove(id));
        assert!(center.is_empty());
    }

    #[test]
    fn insertion_order_is_kept() {
        let center = NotificationCenter::new();
        let first = center.add("first", Kind::Info, 0);
        center.add("second", Kind::Warning, 0);
        center.add("third", Kind::Error, 0);

        assert_eq!(messages(&center), ["first", "second", "third"]);

        center.remove(first);
        assert_eq!(messages(&center), ["second", "third"]);
    }

    #[test]
    fn expiry_is_independent_per_notification() {
        let center = NotificationCenter::new();
        let start = Instant::now();
        let short = center.add_at("short", Kind::Info, 100, start);
        let long = center.add_at("long", Kind::Info, 500, start);

        center.remove(long);
        center.expire_due(start + ms(100));
        assert!(center.get(short).is_none());

        let later = center.add_at("later", Kind::Info, 500, start);
        center.expire_due(start + ms(400));
        assert!(center.get(later).is_some());
    }

    #[test]
    fn remove_is_idempotent() {
        let center = NotificationCenter::new();
        let id = center.info("x");

        assert!(center.remove(id));
        assert!(!center.remove(id));
        assert_eq!(center.expire_due(Instant::now() + Duration::from_secs(60)), 0);
    }

    #[test]
    fn dismiss_hides_before_removing() {
        let center = NotificationCenter::new();
        let start = Instant::now();
        let id = center.add_at("bye", Kind::Success, 0, start);

        assert!(center.dismiss(id, start));
        let hidden = center.get(id).expect("still stored during exit");
        assert!(!hidden.is_visible());

        center.expire_due(start + EXIT_TRANSITION - ms(1));
        assert!(center.get(id).is_some());

        center.expire_due(start + EXIT_TRANSITION);
        assert!(center.get(id).is_none());
    }

    #[test]
    fn dismiss_twice_does_not_extend_exit() {
        let center = NotificationCenter::new();
        let start = Instant::now();
        let id = center.add_at("x", Kind::Info, 0, start);

        assert!(center.dismiss(id, start));
        assert!(!center.dismiss(id, start + ms(200)));

        center.expire_due(start + EXIT_TRANSITION);
        assert!(center.is_empty());
    }

    #[test]
    fn dismiss_of_unknown_id_is_noop() {
        let center = NotificationCenter::new();
        let id = center.info("x");
        center.remove(id);
        assert!(!center.dismiss(id, Instant::now()));
    }

    #[test]
    fn error_convenience_outlasts_the_others() {
        let center = NotificationCenter::new();
        let ok = center.success("ok");
        let err = center.error("err");

        let ok = center.get(ok).expect("stored");
        let err = center.get(err).expect("stored");
        assert_eq!(ok.duration_ms(), DEFAULT_NOTIFICATION_DURATION_MS);
        assert_eq!(err.duration_ms(), DEFAULT_ERROR_DURATION_MS);
        assert!(err.duration_ms() > ok.duration_ms());
        assert_eq!(err.kind(), Kind::Error);
    }

    #[test]
    fn configured_durations_drive_conveniences() {
        let center = NotificationCenter::with_durations(1000, 0);
        let warn = center.warning("w");
        let err = center.error("e");

        assert_eq!(center.get(warn).map(|n| n.duration_ms()), Some(1000));
        assert!(center.get(err).is_some_and(|n| n.is_persistent()));
    }

    #[test]
    fn clones_share_the_queue() {
        let center = NotificationCenter::new();
        let view_handle = center.clone();
        view_handle.success("from a view");

        assert_eq!(messages(&center), ["from a view"]);
    }

    #[test]
    fn handle_message_routes_tick_and_dismiss() {
        let center = NotificationCenter::new();
        let start = Instant::now();
        let timed = center.add_at("timed", Kind::Info, 50, start);
        let sticky = center.add_at("sticky", Kind::Info, 0, start);

        center.handle_message(&Message::Tick(start + ms(50)));
        assert!(center.get(timed).is_none());

        center.handle_message(&Message::Dismiss(sticky));
        assert!(center.get(sticky).is_some_and(|n| !n.is_visible()));
        assert!(center.has_pending_timers());
    }
}
