//! Error types for the corebus protocol layer.

use thiserror::Error;

/// Errors surfaced by the core registries.
///
/// `*NotFound` variants are recoverable conditions on explicit retrieval
/// calls. `KeyOccupied` signals a multiton precondition violation: the same
/// key was inserted twice, which is an initialization-order defect in the
/// embedding application.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Proxy not found: {0}")]
    ProxyNotFound(String),

    #[error("Mediator not found: {0}")]
    MediatorNotFound(String),

    #[error("Command not found: {0}")]
    CommandNotFound(String),

    #[error("Registry key already occupied: {0}")]
    KeyOccupied(String),
}
