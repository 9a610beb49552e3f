//! Directory of named cores.

use std::sync::Arc;

use tracing::info;

use corebus_protocols::Notification;

use crate::facade::Facade;
use crate::registry::KeyedRegistry;

/// The registry of all active cores, one [`Facade`] per multiton key.
///
/// An explicit, constructed object rather than a process-wide global:
/// embedding applications own one directory (tests own as many as they
/// like) and hand it to whatever needs core lookup. Independent cores
/// never block each other; each core's registries carry their own locks.
pub struct CoreDirectory {
    cores: KeyedRegistry<Facade>,
}

impl CoreDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self {
            cores: KeyedRegistry::new(),
        }
    }

    /// Return the core for `key`, constructing it on first access.
    ///
    /// Repeated calls for the same key observe the identical core instance
    /// until the key is removed.
    pub fn get_or_create(&self, key: &str) -> Arc<Facade> {
        self.cores.get_or_create(key, || {
            info!(core = key, "creating core");
            Facade::new(key)
        })
    }

    /// Look up a core without creating it.
    pub fn find(&self, key: &str) -> Option<Arc<Facade>> {
        self.cores.find(key)
    }

    /// Whether a core is active for `key`.
    pub fn has_core(&self, key: &str) -> bool {
        self.cores.contains(key)
    }

    /// Keys of all active cores.
    pub fn core_names(&self) -> Vec<String> {
        self.cores.keys()
    }

    /// Number of active cores.
    pub fn len(&self) -> usize {
        self.cores.len()
    }

    /// Whether no cores are active.
    pub fn is_empty(&self) -> bool {
        self.cores.is_empty()
    }

    /// Remove and tear down the core for `key`.
    ///
    /// Teardown releases the model, then the controller, then the view.
    /// Removal is terminal for that core instance; a later
    /// [`get_or_create`](Self::get_or_create) constructs a fresh core.
    /// Returns whether a core was active for the key.
    pub fn remove_core(&self, key: &str) -> bool {
        match self.cores.remove(key) {
            Some(facade) => {
                facade.teardown();
                info!(core = key, "core removed");
                true
            }
            None => false,
        }
    }

    /// Dispatch one notification to every active core.
    ///
    /// Cores are snapshotted first, then notified one at a time on the
    /// calling thread. Within each core the usual ordering guarantees hold;
    /// no ordering is guaranteed across cores.
    pub fn broadcast_notification(&self, note: &Notification) {
        for facade in self.cores.values() {
            facade.notify_observers(note);
        }
    }
}

impl Default for CoreDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
