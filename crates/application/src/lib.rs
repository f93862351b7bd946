//! Application layer - Use cases and orchestration
//!
//! Hosts the arrivals board service and the port it uses to reach the
//! arrivals feed. Adapters in the infrastructure layer implement the port.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
