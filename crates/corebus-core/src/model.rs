//! Proxy registry with lifecycle hooks.

use std::sync::{Arc, Weak};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use corebus_protocols::{CoreError, Notifier, Proxy};

/// Per-core data store.
///
/// A keyed registry of proxy handles. Unlike mediators, proxies subscribe
/// to nothing; registration and removal only fire the proxy's lifecycle
/// hooks, outside the registry lock.
pub struct Model {
    key: String,
    notifier: Weak<dyn Notifier>,
    proxies: DashMap<String, Arc<dyn Proxy>>,
}

impl Model {
    /// Create the data store for one core.
    pub fn new(key: impl Into<String>, notifier: Weak<dyn Notifier>) -> Self {
        Self {
            key: key.into(),
            notifier,
            proxies: DashMap::new(),
        }
    }

    /// The multiton key this model belongs to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Register a proxy under its own name.
    ///
    /// First registration wins; a name collision is silently ignored and
    /// requires explicit removal before re-registration.
    pub fn register_proxy(&self, proxy: Arc<dyn Proxy>) {
        let name = proxy.name().to_string();
        match self.proxies.entry(name.clone()) {
            Entry::Occupied(_) => {
                debug!(core = %self.key, proxy = %name, "proxy already registered, ignoring");
                return;
            }
            Entry::Vacant(slot) => {
                slot.insert(proxy.clone());
            }
        }
        debug!(core = %self.key, proxy = %name, "proxy registered");
        proxy.on_register(self.notifier.clone());
    }

    /// Look up a proxy by name.
    pub fn retrieve_proxy(&self, name: &str) -> Result<Arc<dyn Proxy>, CoreError> {
        self.proxies
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| CoreError::ProxyNotFound(name.to_string()))
    }

    /// Remove a proxy, returning ownership of the handle to the caller.
    ///
    /// The `on_remove` hook fires outside the registry lock. Returns `None`
    /// if no proxy of that name is registered.
    pub fn remove_proxy(&self, name: &str) -> Option<Arc<dyn Proxy>> {
        let (_, proxy) = self.proxies.remove(name)?;
        debug!(core = %self.key, proxy = name, "proxy removed");
        proxy.on_remove();
        Some(proxy)
    }

    /// Whether a proxy of that name is registered.
    pub fn has_proxy(&self, name: &str) -> bool {
        self.proxies.contains_key(name)
    }

    /// Names of all registered proxies.
    pub fn proxy_names(&self) -> Vec<String> {
        self.proxies.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Drop all proxies without firing hooks. Core teardown only.
    pub(crate) fn clear(&self) {
        self.proxies.clear();
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
