//! Facade composing one core's model, view and controller.

use std::sync::{Arc, Weak};

use tracing::debug;

use corebus_protocols::{
    Command, CoreError, Mediator, Notification, Notifier, Proxy,
};

use crate::controller::Controller;
use crate::model::Model;
use crate::view::View;

/// One named core: the {model, view, controller} triple for a multiton key.
///
/// Construction builds all three parts eagerly in dependency order (the
/// controller holds the view it subscribes to; model and view are
/// independent) and wires each part back to the facade through a weak
/// notifier handle, so a removed core can be dropped even while subscriber
/// objects still hold their hooks' notifiers.
///
/// Facades are obtained from a [`CoreDirectory`](crate::CoreDirectory),
/// which guarantees at most one core per key.
pub struct Facade {
    key: String,
    model: Arc<Model>,
    view: Arc<View>,
    controller: Arc<Controller>,
}

impl Facade {
    pub(crate) fn new(key: &str) -> Arc<Self> {
        Arc::new_cyclic(|me: &Weak<Facade>| {
            let notifier: Weak<dyn Notifier> = me.clone();
            let model = Arc::new(Model::new(key, notifier.clone()));
            let view = Arc::new(View::new(key, notifier.clone()));
            let controller = Controller::new(key, view.clone(), notifier);
            debug!(core = key, "core constructed");
            Self {
                key: key.to_string(),
                model,
                view,
                controller,
            }
        })
    }

    /// The multiton key addressing this core.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// This core's data store.
    pub fn model(&self) -> &Arc<Model> {
        &self.model
    }

    /// This core's notification bus.
    pub fn view(&self) -> &Arc<View> {
        &self.view
    }

    /// This core's command dispatcher.
    pub fn controller(&self) -> &Arc<Controller> {
        &self.controller
    }

    /// Register a proxy with the model. No-op on name collision.
    pub fn register_proxy(&self, proxy: Arc<dyn Proxy>) {
        self.model.register_proxy(proxy);
    }

    /// Look up a proxy by name.
    pub fn retrieve_proxy(&self, name: &str) -> Result<Arc<dyn Proxy>, CoreError> {
        self.model.retrieve_proxy(name)
    }

    /// Remove a proxy, returning the handle if one was registered.
    pub fn remove_proxy(&self, name: &str) -> Option<Arc<dyn Proxy>> {
        self.model.remove_proxy(name)
    }

    /// Whether a proxy of that name is registered.
    pub fn has_proxy(&self, name: &str) -> bool {
        self.model.has_proxy(name)
    }

    /// Names of all registered proxies.
    pub fn proxy_names(&self) -> Vec<String> {
        self.model.proxy_names()
    }

    /// Register a mediator with the view. No-op on name collision.
    pub fn register_mediator(&self, mediator: Arc<dyn Mediator>) {
        self.view.register_mediator(mediator);
    }

    /// Look up a mediator by name.
    pub fn retrieve_mediator(&self, name: &str) -> Result<Arc<dyn Mediator>, CoreError> {
        self.view.retrieve_mediator(name)
    }

    /// Remove a mediator, returning the handle if one was registered.
    pub fn remove_mediator(&self, name: &str) -> Option<Arc<dyn Mediator>> {
        self.view.remove_mediator(name)
    }

    /// Whether a mediator of that name is registered.
    pub fn has_mediator(&self, name: &str) -> bool {
        self.view.has_mediator(name)
    }

    /// Names of all registered mediators.
    pub fn mediator_names(&self) -> Vec<String> {
        self.view.mediator_names()
    }

    /// Bind a command to a notification name.
    pub fn register_command(&self, notification_name: &str, command: Arc<dyn Command>) {
        self.controller.register_command(notification_name, command);
    }

    /// Look up a command by notification name.
    pub fn retrieve_command(&self, notification_name: &str) -> Result<Arc<dyn Command>, CoreError> {
        self.controller.retrieve_command(notification_name)
    }

    /// Unbind a command, returning the handle if one was bound.
    pub fn remove_command(&self, notification_name: &str) -> Option<Arc<dyn Command>> {
        self.controller.remove_command(notification_name)
    }

    /// Whether a command is bound for the name.
    pub fn has_command(&self, notification_name: &str) -> bool {
        self.controller.has_command(notification_name)
    }

    /// Notification names with a bound command.
    pub fn notification_names(&self) -> Vec<String> {
        self.controller.notification_names()
    }

    /// Send a notification to this core's observers. Fire-and-forget.
    pub fn send_notification(&self, note: Notification) {
        self.view.notify_observers(&note);
    }

    /// Dispatch a borrowed notification to this core's observers.
    pub fn notify_observers(&self, note: &Notification) {
        self.view.notify_observers(note);
    }

    /// Tear down model, controller, then view.
    ///
    /// The view goes last because commands and mediators hold subscriptions
    /// into it.
    pub(crate) fn teardown(&self) {
        self.model.clear();
        self.controller.clear();
        self.view.clear();
    }
}

impl Notifier for Facade {
    fn send_notification(&self, note: Notification) {
        Facade::send_notification(self, note);
    }

    fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(test)]
#[path = "facade_tests.rs"]
mod tests;
