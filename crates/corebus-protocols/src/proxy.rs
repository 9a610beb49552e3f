//! Proxy trait definition.

use std::sync::Weak;

use crate::notifier::Notifier;

/// A named data holder registered with a core's model.
///
/// Proxies do not subscribe to anything; they only get lifecycle hooks.
/// Data access is whatever API the concrete proxy type exposes - the model
/// hands back `Arc<dyn Proxy>` handles for the caller to downcast.
pub trait Proxy: Send + Sync {
    /// Unique name within one model.
    fn name(&self) -> &str;

    /// Called after registration completes, outside any registry lock.
    fn on_register(&self, notifier: Weak<dyn Notifier>) {
        let _ = notifier;
    }

    /// Called after removal, outside any registry lock.
    fn on_remove(&self) {}
}

impl std::fmt::Debug for dyn Proxy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Proxy").field("name", &self.name()).finish()
    }
}
