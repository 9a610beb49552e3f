//! Mediator trait definition.

use std::sync::Weak;

use crate::notification::Notification;
use crate::notifier::Notifier;

/// A named subscriber that declares interest in a set of notification names.
///
/// Registering a mediator with a core's view subscribes it to every name in
/// [`interests`](Mediator::interests); removing it detaches those
/// subscriptions again. The interest list is captured once at registration
/// time.
///
/// Implementations that mutate state from
/// [`handle_notification`](Mediator::handle_notification) use interior
/// mutability; dispatch happens on whichever thread sent the notification.
pub trait Mediator: Send + Sync {
    /// Unique name within one view.
    fn name(&self) -> &str;

    /// Notification names this mediator reacts to.
    fn interests(&self) -> Vec<String>;

    /// React to one notification.
    fn handle_notification(&self, note: &Notification);

    /// Called after registration completes, outside any registry lock.
    ///
    /// The notifier handle is weak: upgrading fails once the owning core has
    /// been removed.
    fn on_register(&self, notifier: Weak<dyn Notifier>) {
        let _ = notifier;
    }

    /// Called after removal, outside any registry lock.
    fn on_remove(&self) {}
}

impl std::fmt::Debug for dyn Mediator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mediator")
            .field("name", &self.name())
            .finish()
    }
}
