//! Observer subscriptions and their identity tokens.

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::notification::Notification;

/// Opaque identity token for a subscription.
///
/// Removal from an observer list matches on this token, not on callback
/// content, so two subscriptions wrapping identical state stay individually
/// removable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(Uuid);

impl ObserverId {
    /// Generate a fresh token.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A subscription: a notification callback paired with its identity token.
#[derive(Clone)]
pub struct Observer {
    id: ObserverId,
    notify: Arc<dyn Fn(&Notification) + Send + Sync>,
}

impl Observer {
    /// Wrap a callback under the given identity.
    pub fn new(id: ObserverId, notify: impl Fn(&Notification) + Send + Sync + 'static) -> Self {
        Self {
            id,
            notify: Arc::new(notify),
        }
    }

    /// The identity token this subscription was registered under.
    pub fn id(&self) -> ObserverId {
        self.id
    }

    /// Invoke the callback.
    pub fn notify(&self, note: &Notification) {
        (self.notify)(note);
    }
}

impl fmt::Debug for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer").field("id", &self.id).finish()
    }
}
