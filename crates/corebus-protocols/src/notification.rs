//! The notification value exchanged through the bus.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Opaque notification payload.
///
/// The body stays untyped until a handler downcasts it with
/// [`Notification::body_as`]. Handlers that need to mutate the payload wrap
/// it in a lock before sending (e.g. `Arc<Mutex<i64>>`).
pub type Body = Arc<dyn Any + Send + Sync>;

/// Immutable message value dispatched to observers.
///
/// Only the name is required; body and kind are optional. A notification is
/// passed by reference during a single dispatch and the bus never takes
/// ownership of the body.
#[derive(Clone)]
pub struct Notification {
    name: String,
    body: Option<Body>,
    kind: Option<String>,
}

impl Notification {
    /// Create a notification carrying only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: None,
            kind: None,
        }
    }

    /// Attach a payload.
    pub fn with_body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach a kind discriminator.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// The notification name observers subscribe to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw payload, if any.
    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Downcast the payload to a concrete type.
    ///
    /// Returns `None` when no body is attached or the body is of a
    /// different type.
    pub fn body_as<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.body.clone()?.downcast::<T>().ok()
    }

    /// The kind discriminator, if any.
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("name", &self.name)
            .field("body", &self.body.as_ref().map(|_| "<opaque>"))
            .field("kind", &self.kind)
            .finish()
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Notification[{}]", self.name)?;
        if self.body.is_some() {
            write!(f, " body=<opaque>")?;
        }
        if let Some(kind) = &self.kind {
            write!(f, " kind={kind}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "notification_tests.rs"]
mod tests;
