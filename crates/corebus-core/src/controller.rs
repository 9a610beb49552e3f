//! Command registry executing on notification dispatch.

use std::sync::{Arc, Weak};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::{debug, trace};

use corebus_protocols::{Command, CoreError, Notification, Notifier, Observer, ObserverId};

use crate::view::View;

/// Per-core command dispatcher.
///
/// Maps notification names to commands and lazily subscribes itself to the
/// view: the first registration for a name creates exactly one bus-level
/// subscription under the dispatcher's identity, and replacing the mapping
/// afterwards never adds another. Execution always uses the most recently
/// registered command.
///
/// The view handle is taken at construction, which is what makes
/// registering a command before the bus exists unrepresentable.
pub struct Controller {
    key: String,
    view: Arc<View>,
    notifier: Weak<dyn Notifier>,
    commands: DashMap<String, Arc<dyn Command>>,
    observer_id: ObserverId,
}

impl Controller {
    /// Create the dispatcher for one core.
    pub fn new(key: impl Into<String>, view: Arc<View>, notifier: Weak<dyn Notifier>) -> Arc<Self> {
        Arc::new(Self {
            key: key.into(),
            view,
            notifier,
            commands: DashMap::new(),
            observer_id: ObserverId::new(),
        })
    }

    /// The multiton key this controller belongs to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Bind a command to a notification name.
    ///
    /// Last registration wins for execution; the bus subscription is created
    /// only on the first registration for the name.
    pub fn register_command(self: &Arc<Self>, notification_name: &str, command: Arc<dyn Command>) {
        match self.commands.entry(notification_name.to_string()) {
            Entry::Occupied(mut slot) => {
                slot.insert(command);
                debug!(core = %self.key, name = notification_name, "command mapping replaced");
            }
            Entry::Vacant(slot) => {
                let controller = Arc::downgrade(self);
                self.view.register_observer(
                    notification_name,
                    Observer::new(self.observer_id, move |note| {
                        if let Some(controller) = controller.upgrade() {
                            controller.execute_command(note);
                        }
                    }),
                );
                slot.insert(command);
                debug!(core = %self.key, name = notification_name, "command registered");
            }
        }
    }

    /// Execute the command bound to the notification's name.
    ///
    /// Absence is a normal runtime state, not an error: the command may have
    /// been removed between subscription and firing.
    pub fn execute_command(&self, note: &Notification) {
        let command = match self.commands.get(note.name()) {
            Some(entry) => entry.value().clone(),
            None => return,
        };
        let Some(notifier) = self.notifier.upgrade() else {
            return;
        };
        trace!(core = %self.key, name = note.name(), "executing command");
        command.execute(note, notifier.as_ref());
    }

    /// Look up a command by notification name.
    pub fn retrieve_command(&self, notification_name: &str) -> Result<Arc<dyn Command>, CoreError> {
        self.commands
            .get(notification_name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| CoreError::CommandNotFound(notification_name.to_string()))
    }

    /// Unbind a command, detaching the single bus subscription for its name.
    ///
    /// Returns the removed command, or `None` if nothing was bound.
    pub fn remove_command(&self, notification_name: &str) -> Option<Arc<dyn Command>> {
        let (_, command) = self.commands.remove(notification_name)?;
        self.view.remove_observer(notification_name, self.observer_id);
        debug!(core = %self.key, name = notification_name, "command removed");
        Some(command)
    }

    /// Whether a command is bound for the name.
    pub fn has_command(&self, notification_name: &str) -> bool {
        self.commands.contains_key(notification_name)
    }

    /// Notification names with a bound command.
    pub fn notification_names(&self) -> Vec<String> {
        self.commands.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Unbind every command and detach its subscription.
    pub(crate) fn clear(&self) {
        for name in self.notification_names() {
            let _ = self.remove_command(&name);
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
