//! # Change Notification
//!
//! The explicit observer interface: the presentation layer subscribes and
//! unsubscribes instead of relying on ambient reactivity.
//!
//! Callbacks fire synchronously after a state transition (including its
//! snapshot save) commits, so a subscriber reading back through the store
//! always observes post-mutation state.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Events
// =============================================================================

/// What part of the store changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum StoreEvent {
    /// Cart lines or aggregates changed.
    CartChanged,

    /// Current user or authentication flag changed.
    AuthChanged,
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A registered change callback.
pub type Subscriber = Box<dyn Fn(StoreEvent) + Send + Sync>;

// =============================================================================
// Registry
// =============================================================================

/// Subscriber table with stable ids.
#[derive(Default)]
pub(crate) struct SubscriberRegistry {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

impl SubscriberRegistry {
    pub(crate) fn new() -> Self {
        SubscriberRegistry::default()
    }

    pub(crate) fn subscribe(&mut self, subscriber: Subscriber) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, subscriber));
        id
    }

    /// Removes a subscriber; `false` if the id was already gone.
    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub(crate) fn notify(&self, event: StoreEvent) {
        for (_, subscriber) in &self.subscribers {
            subscriber(event);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_subscribe_and_notify() {
        let mut registry = SubscriberRegistry::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&hits);
        registry.subscribe(Box::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        registry.notify(StoreEvent::CartChanged);
        registry.notify(StoreEvent::AuthChanged);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut registry = SubscriberRegistry::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&hits);
        let id = registry.subscribe(Box::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        registry.notify(StoreEvent::CartChanged);
        assert!(registry.unsubscribe(id));
        registry.notify(StoreEvent::CartChanged);

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        // Second unsubscribe of the same id is a no-op
        assert!(!registry.unsubscribe(id));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut registry = SubscriberRegistry::new();
        let a = registry.subscribe(Box::new(|_| {}));
        registry.unsubscribe(a);
        let b = registry.subscribe(Box::new(|_| {}));
        assert_ne!(a, b);
    }
}
