//! Infrastructure layer - Adapters for external systems
//!
//! Implements the arrivals port on top of the HTTP client, loads the
//! application configuration and sets up logging.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::ArrivalsAdapter;
pub use config::AppConfig;
pub use telemetry::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};
