//! Domain layer for the subway arrivals board
//!
//! Contains the arrival feed entities, the static station and route tables,
//! and the pure presentation views derived from a station snapshot.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;
pub mod views;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
pub use views::{DirectionView, LineView};
