//! Command trait definition.

use crate::notification::Notification;
use crate::notifier::Notifier;

/// A unit of business logic bound to a notification name.
///
/// Executed synchronously on the thread that sent the triggering
/// notification. The notifier parameter lets a command chain further
/// notifications into its own core; re-entrant sends are safe because the
/// bus never holds a lock while invoking callbacks.
pub trait Command: Send + Sync {
    /// Execute against one notification.
    fn execute(&self, note: &Notification, notifier: &dyn Notifier);
}

impl std::fmt::Debug for dyn Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Command")
    }
}
