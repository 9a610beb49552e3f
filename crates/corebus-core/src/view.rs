//! Observer and mediator registry with snapshot fan-out dispatch.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use parking_lot::Mutex;
use tracing::{debug, trace};

use corebus_protocols::{CoreError, Mediator, Notification, Notifier, Observer, ObserverId};

/// A registered mediator plus the subscription state pinned at registration.
///
/// The interest list is captured once so removal detaches exactly the
/// observers that registration created, even if `interests()` is not stable.
struct MediatorEntry {
    mediator: Arc<dyn Mediator>,
    observer_id: ObserverId,
    interests: Vec<String>,
}

/// Per-core notification bus.
///
/// Holds the ordered subscriber lists and the mediator registry for one
/// core. Dispatch snapshots the matching subscriber list under the lock,
/// releases it, then invokes each callback in registration order. That
/// protocol makes the following guarantees:
///
/// - a callback may register or remove observers (including itself) without
///   corrupting the iteration or deadlocking re-entrant calls;
/// - an observer removed mid-dispatch still fires for the round it was
///   snapshotted in;
/// - an observer added mid-dispatch first fires on the next dispatch.
pub struct View {
    key: String,
    notifier: Weak<dyn Notifier>,
    observers: Mutex<HashMap<String, Vec<Observer>>>,
    mediators: DashMap<String, MediatorEntry>,
}

impl View {
    /// Create the bus for one core.
    pub fn new(key: impl Into<String>, notifier: Weak<dyn Notifier>) -> Self {
        Self {
            key: key.into(),
            notifier,
            observers: Mutex::new(HashMap::new()),
            mediators: DashMap::new(),
        }
    }

    /// The multiton key this view belongs to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Append a subscription to the list for `notification_name`.
    ///
    /// Duplicate identity tokens are permitted; removal takes the first
    /// match only.
    pub fn register_observer(&self, notification_name: &str, observer: Observer) {
        let mut observers = self.observers.lock();
        observers
            .entry(notification_name.to_string())
            .or_default()
            .push(observer);
    }

    /// Remove the first subscription for `notification_name` whose identity
    /// token matches `id`.
    pub fn remove_observer(&self, notification_name: &str, id: ObserverId) {
        let mut observers = self.observers.lock();
        if let Some(list) = observers.get_mut(notification_name) {
            if let Some(index) = list.iter().position(|observer| observer.id() == id) {
                list.remove(index);
            }
            if list.is_empty() {
                observers.remove(notification_name);
            }
        }
    }

    /// Dispatch a notification to every subscriber of its name.
    ///
    /// Callbacks run on the calling thread, outside the bus lock, in
    /// registration order.
    pub fn notify_observers(&self, note: &Notification) {
        let snapshot = {
            let observers = self.observers.lock();
            match observers.get(note.name()) {
                Some(list) if !list.is_empty() => list.clone(),
                _ => return,
            }
        };
        trace!(
            core = %self.key,
            name = note.name(),
            subscribers = snapshot.len(),
            "dispatching notification"
        );
        for observer in snapshot {
            observer.notify(note);
        }
    }

    /// Register a mediator and subscribe it to its declared interests.
    ///
    /// First registration wins: a mediator of the same name must be removed
    /// before the name can be reused. The `on_register` hook fires outside
    /// all locks, so it may re-enter the view.
    pub fn register_mediator(&self, mediator: Arc<dyn Mediator>) {
        let name = mediator.name().to_string();
        let observer_id = ObserverId::new();
        let interests = mediator.interests();

        match self.mediators.entry(name.clone()) {
            Entry::Occupied(_) => {
                debug!(core = %self.key, mediator = %name, "mediator already registered, ignoring");
                return;
            }
            Entry::Vacant(slot) => {
                slot.insert(MediatorEntry {
                    mediator: mediator.clone(),
                    observer_id,
                    interests: interests.clone(),
                });
            }
        }

        for interest in &interests {
            let target = mediator.clone();
            self.register_observer(
                interest,
                Observer::new(observer_id, move |note| target.handle_notification(note)),
            );
        }

        debug!(
            core = %self.key,
            mediator = %name,
            interests = interests.len(),
            "mediator registered"
        );
        mediator.on_register(self.notifier.clone());
    }

    /// Look up a mediator by name.
    pub fn retrieve_mediator(&self, name: &str) -> Result<Arc<dyn Mediator>, CoreError> {
        self.mediators
            .get(name)
            .map(|entry| entry.mediator.clone())
            .ok_or_else(|| CoreError::MediatorNotFound(name.to_string()))
    }

    /// Remove a mediator, detaching its interest subscriptions.
    ///
    /// Returns the removed handle, or `None` if no mediator of that name is
    /// registered. The `on_remove` hook fires outside all locks.
    pub fn remove_mediator(&self, name: &str) -> Option<Arc<dyn Mediator>> {
        let (_, entry) = self.mediators.remove(name)?;
        for interest in &entry.interests {
            self.remove_observer(interest, entry.observer_id);
        }
        debug!(core = %self.key, mediator = name, "mediator removed");
        entry.mediator.on_remove();
        Some(entry.mediator)
    }

    /// Whether a mediator of that name is registered.
    pub fn has_mediator(&self, name: &str) -> bool {
        self.mediators.contains_key(name)
    }

    /// Names of all registered mediators.
    pub fn mediator_names(&self) -> Vec<String> {
        self.mediators.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Number of live subscriptions for one notification name.
    pub(crate) fn observer_count(&self, notification_name: &str) -> usize {
        self.observers
            .lock()
            .get(notification_name)
            .map_or(0, Vec::len)
    }

    /// Drop all subscriptions and mediators without firing hooks.
    ///
    /// Core teardown only; mirrors removal semantics of the directory.
    pub(crate) fn clear(&self) {
        self.observers.lock().clear();
        self.mediators.clear();
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
