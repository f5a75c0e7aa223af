// SPDX-License-Identifier: MPL-2.0
//! Latest-callback mailbox and the refetch trigger it sits beside.
//!
//! A child view reports derived values (e.g. a list count) to its parent
//! through a [`CallbackRelay`]. The parent hands over a fresh closure on every
//! update cycle; the child decides when to fetch with a [`RefetchTrigger`]
//! whose key never contains the callback. Updating the relay therefore never
//! causes a refetch, and a fetch completing later still reaches the newest
//! callback because it invokes the relay, not a captured closure.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type Callback<A> = Arc<dyn Fn(A) + Send + Sync>;

/// Single-slot mailbox holding the most recently supplied callback.
///
/// Clones share the slot, so a clone moved into a fetch future observes
/// every later [`update`](Self::update).
pub struct CallbackRelay<A> {
    slot: Arc<Mutex<Option<Callback<A>>>>,
}

impl<A> CallbackRelay<A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }

    /// Overwrites the held callback.
    pub fn update<F>(&self, callback: F)
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        *self.lock() = Some(Arc::new(callback));
    }

    /// Calls the current callback, or does nothing if none was supplied yet.
    pub fn invoke(&self, arg: A) {
        // Release the lock before calling out so the callback may update the relay.
        let current = self.lock().clone();
        if let Some(callback) = current {
            callback(arg);
        }
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Callback<A>>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<A> Clone for CallbackRelay<A> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<A> Default for CallbackRelay<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for CallbackRelay<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackRelay")
            .field("is_set", &self.is_set())
            .finish()
    }
}

/// Decides when a view's data must be (re)fetched.
///
/// The key is the fetch's whole dependency set: the members list uses `()`
/// (fetch once), the coaches list uses its specialization filter.
#[derive(Debug, Clone, Default)]
pub struct RefetchTrigger<K> {
    last: Option<K>,
}

impl<K: PartialEq + Clone> RefetchTrigger<K> {
    #[must_use]
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Returns true the first time and whenever `key` differs from the key of
    /// the previous fetch, recording `key` as fetched.
    pub fn should_fetch(&mut self, key: &K) -> bool {
        if self.last.as_ref() == Some(key) {
            return false;
        }
        self.last = Some(key.clone());
        true
    }

    /// Forces the next [`should_fetch`](Self::should_fetch) to fire.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn invoke_without_callback_is_noop() {
        let relay: CallbackRelay<usize> = CallbackRelay::new();
        relay.invoke(3);
        assert!(!relay.is_set());
    }

    #[test]
    fn invoke_reaches_latest_callback_only() {
        let relay = CallbackRelay::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let sink = Arc::clone(&first);
        relay.update(move |n: usize| {
            sink.fetch_add(n, Ordering::SeqCst);
        });
        relay.invoke(1);
        assert_eq!(first.load(Ordering::SeqCst), 1);

        let sink = Arc::clone(&second);
        relay.update(move |n: usize| {
            sink.fetch_add(n, Ordering::SeqCst);
        });
        relay.invoke(5);

        assert_eq!(first.load(Ordering::SeqCst), 1, "stale callback not called again");
        assert_eq!(second.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn clone_taken_before_update_sees_new_callback() {
        let relay = CallbackRelay::new();
        let in_flight = relay.clone();
        let seen = Arc::new(AtomicUsize::new(0));

        let sink = Arc::clone(&seen);
        relay.update(move |n: usize| {
            sink.store(n, Ordering::SeqCst);
        });
        in_flight.invoke(9);

        assert_eq!(seen.load(Ordering::SeqCst), 9);
    }

    #[test]
    fn callback_may_replace_itself() {
        let relay: CallbackRelay<usize> = CallbackRelay::new();
        let inner = relay.clone();
        relay.update(move |_| inner.update(|_| {}));

        relay.invoke(1);
        assert!(relay.is_set());
    }

    #[test]
    fn updating_relay_does_not_retrigger_fetch() {
        let relay: CallbackRelay<usize> = CallbackRelay::new();
        let mut trigger = RefetchTrigger::new();
        let mut fetches = 0;

        for render in 0..5 {
            relay.update(move |_| {
                let _ = render;
            });
            if trigger.should_fetch(&()) {
                fetches += 1;
            }
        }

        assert_eq!(fetches, 1);
    }

    #[test]
    fn trigger_fires_on_key_change_and_invalidate() {
        let mut trigger = RefetchTrigger::new();

        assert!(trigger.should_fetch(&None::<u8>));
        assert!(!trigger.should_fetch(&None));
        assert!(trigger.should_fetch(&Some(1)));
        assert!(!trigger.should_fetch(&Some(1)));

        trigger.invalidate();
        assert!(trigger.should_fetch(&Some(1)));
    }
}
