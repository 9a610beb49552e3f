//! Access trait for sending notifications back into a core.

use crate::notification::Notification;

/// Trait for posting notifications into the core that owns a subscriber.
///
/// Implemented by the facade. Handed to lifecycle hooks as a `Weak` handle
/// and to command execution as a borrow so that registered objects never
/// keep their own core alive.
pub trait Notifier: Send + Sync {
    /// Send a notification to this core's observers.
    fn send_notification(&self, note: Notification);

    /// The multiton key of the core behind this notifier.
    fn key(&self) -> &str;
}
