// SPDX-License-Identifier: MPL-2.0
//! Sidebar count badges.
//!
//! The screens report their list sizes through their callback relays; the
//! closures handed to them write into these slots, which the sidebar reads on
//! the next render.

use super::Tab;
use std::sync::{Arc, Mutex, PoisonError};

type Slot = Arc<Mutex<Option<usize>>>;

#[derive(Debug, Clone, Default)]
pub struct TabCounts {
    members: Slot,
    coaches: Slot,
}

impl TabCounts {
    fn slot(&self, tab: Tab) -> Option<&Slot> {
        match tab {
            Tab::Members => Some(&self.members),
            Tab::Coaches => Some(&self.coaches),
            Tab::Plans => None,
        }
    }

    /// Last count reported for `tab`. Plans never carry a badge.
    #[must_use]
    pub fn get(&self, tab: Tab) -> Option<usize> {
        let slot = self.slot(tab)?;
        *slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Callback storing counts reported for `tab`.
    pub fn reporter(&self, tab: Tab) -> impl Fn(usize) + Send + Sync + 'static {
        let slot = self.slot(tab).cloned();
        move |count| {
            if let Some(slot) = &slot {
                *slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(count);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reporter_writes_into_its_tab_only() {
        let counts = TabCounts::default();
        assert_eq!(counts.get(Tab::Members), None);

        counts.reporter(Tab::Coaches)(4);
        counts.reporter(Tab::Plans)(9);

        assert_eq!(counts.get(Tab::Coaches), Some(4));
        assert_eq!(counts.get(Tab::Members), None);
        assert_eq!(counts.get(Tab::Plans), None);
    }

    #[test]
    fn clones_share_slots() {
        let counts = TabCounts::default();
        let report = counts.clone().reporter(Tab::Members);
        report(12);
        assert_eq!(counts.get(Tab::Members), Some(12));
    }
}
