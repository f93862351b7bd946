//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Station name is not one of the enumerated stations
    #[error("Unknown station: {0}")]
    UnknownStation(String),
}
