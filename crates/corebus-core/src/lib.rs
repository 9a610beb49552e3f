//! # Corebus Core
//!
//! Multiton core registries and the synchronous notification bus.
//!
//! ## Components
//!
//! - [`CoreDirectory`] - Directory of named cores, one facade per key
//! - [`Facade`] - Entry point composing one core's model, view and controller
//! - [`View`] - Observer/mediator registry with snapshot fan-out dispatch
//! - [`Controller`] - Command registry executing on notification dispatch
//! - [`Model`] - Proxy registry with lifecycle hooks
//! - [`KeyedRegistry`] - Generic thread-safe name-to-instance map
//!
//! Dispatch is fully synchronous: sending a notification invokes every
//! subscribed callback on the calling thread before returning. Subscriber
//! lists are snapshotted under lock and invoked outside it, so callbacks may
//! freely re-enter the registries.

pub mod controller;
pub mod directory;
pub mod facade;
pub mod model;
pub mod registry;
pub mod view;

pub use controller::Controller;
pub use directory::CoreDirectory;
pub use facade::Facade;
pub use model::Model;
pub use registry::KeyedRegistry;
pub use view::View;
