//! Change notification for the preference store.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::i18n::Language;
use crate::prefs::theme::ThemeVariant;

/// A single preference change, delivered to subscribers after it took effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceChange {
    /// The active language changed.
    Language {
        /// Language before the change.
        previous: Language,
        /// Language now active.
        current: Language,
    },
    /// The active theme changed.
    Theme {
        /// Theme before the change.
        previous: ThemeVariant,
        /// Theme now active.
        current: ThemeVariant,
    },
}

/// Subscriber callback.
type Callback = dyn Fn(&PreferenceChange);

/// Registered callbacks keyed by subscription id.
#[derive(Default)]
struct Registry {
    /// Id handed to the next subscriber.
    next_id: u64,
    /// Live callbacks in subscription order.
    entries: Vec<(u64, Rc<Callback>)>,
}

impl Registry {
    /// Whether `id` is still subscribed.
    fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }
}

/// Shared subscriber list owned by one store.
#[derive(Clone, Default)]
pub(crate) struct Subscribers {
    /// Registry shared with every outstanding [`Subscription`] (weakly).
    inner: Rc<RefCell<Registry>>,
}

impl Subscribers {
    /// Register `callback` and hand back its guard.
    pub(crate) fn subscribe(&self, callback: Rc<Callback>) -> Subscription {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push((id, callback));
        Subscription {
            registry: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// What: Deliver `change` to every subscriber.
    ///
    /// Details:
    /// - Iterates over a snapshot so callbacks may drop subscriptions, their own included
    /// - A subscriber removed earlier in the same round is skipped
    pub(crate) fn notify(&self, change: &PreferenceChange) {
        let snapshot: Vec<(u64, Rc<Callback>)> = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|(id, cb)| (*id, Rc::clone(cb)))
            .collect();
        for (id, callback) in snapshot {
            if self.inner.borrow().contains(id) {
                callback(change);
            }
        }
    }

    /// Number of live subscriptions.
    pub(crate) fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.len())
            .finish()
    }
}

/// Guard for a registered callback; dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    /// Registry the callback lives in; gone once the store is dropped.
    registry: Weak<RefCell<Registry>>,
    /// Entry id inside the registry.
    id: u64,
}

impl Subscription {
    /// Unsubscribe now. Equivalent to dropping the guard.
    pub fn unsubscribe(self) {}

    /// Whether the callback is still registered with a live store.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().contains(self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .entries
                .retain(|(entry_id, _)| *entry_id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
