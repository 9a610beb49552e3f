//! # Corebus Protocols
//!
//! Protocol definitions (traits and message types) for the corebus
//! notification framework. Contains only interface definitions - the
//! registries and dispatch live in `corebus-core`.
//!
//! ## Core Traits
//!
//! - [`Mediator`] - A named subscriber declaring interest in notifications
//! - [`Proxy`] - A named data holder with register/remove lifecycle hooks
//! - [`Command`] - A unit of business logic bound to a notification name
//! - [`Notifier`] - Access trait for sending notifications back into a core
//!
//! ## Message Types
//!
//! - [`Notification`] - The (name, body, kind) value passed through the bus
//! - [`Observer`] - A subscription callback paired with an [`ObserverId`]

pub mod command;
pub mod error;
pub mod mediator;
pub mod notification;
pub mod notifier;
pub mod observer;
pub mod proxy;

pub use command::Command;
pub use error::CoreError;
pub use mediator::Mediator;
pub use notification::{Body, Notification};
pub use notifier::Notifier;
pub use observer::{Observer, ObserverId};
pub use proxy::Proxy;
