//! Generic thread-safe name-to-instance registry.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use corebus_protocols::CoreError;

/// Keyed registry with create-on-demand semantics.
///
/// Backed by a sharded map; lookups take an uncontended read on the hot
/// path and creation re-checks under the shard's write lock, so a factory
/// runs at most once per key.
///
/// The registry owns entries between insert and remove; callers receive
/// shared handles on lookup and get ownership back from [`remove`](Self::remove).
pub struct KeyedRegistry<T: ?Sized> {
    entries: DashMap<String, Arc<T>>,
}

impl<T: ?Sized> KeyedRegistry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Return the entry for `key`, constructing it with `create` if absent.
    ///
    /// Two racing callers observe the identical instance; the factory is
    /// invoked for at most one of them.
    pub fn get_or_create(&self, key: &str, create: impl FnOnce() -> Arc<T>) -> Arc<T> {
        if let Some(existing) = self.entries.get(key) {
            return existing.clone();
        }
        self.entries
            .entry(key.to_string())
            .or_insert_with(create)
            .clone()
    }

    /// Look up an entry without creating it.
    pub fn find(&self, key: &str) -> Option<Arc<T>> {
        self.entries.get(key).map(|entry| entry.clone())
    }

    /// Insert an entry under a fresh key.
    ///
    /// Registering the same key twice is a programmer error and fails with
    /// [`CoreError::KeyOccupied`] instead of silently overwriting.
    pub fn insert(&self, key: &str, value: Arc<T>) -> Result<(), CoreError> {
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(_) => Err(CoreError::KeyOccupied(key.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(())
            }
        }
    }

    /// Detach and return the entry for `key`.
    pub fn remove(&self, key: &str) -> Option<Arc<T>> {
        self.entries.remove(key).map(|(_, value)| value)
    }

    /// Whether an entry exists for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys currently registered.
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Snapshot of all entries.
    ///
    /// Use this instead of [`for_each`](Self::for_each) when the consumer
    /// may mutate the registry or call back into it.
    pub fn values(&self) -> Vec<Arc<T>> {
        self.entries.iter().map(|entry| entry.value().clone()).collect()
    }

    /// Run `f` for each (key, value) pair under the registry's locks.
    ///
    /// Read-only enumeration only: `f` must not mutate this registry.
    pub fn for_each(&self, mut f: impl FnMut(&str, &Arc<T>)) {
        for entry in self.entries.iter() {
            f(entry.key(), entry.value());
        }
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: ?Sized> Default for KeyedRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
