//! Subway arrivals API integration
//!
//! Fetches station snapshots from the arrivals API at
//! `{base_url}/api/stations/{slug}/trains`, authenticating with a static
//! `X-API-Key` header.
//!
//! # Architecture
//!
//! The crate follows the client-trait pattern used by the other integration
//! crates. [`ArrivalsClient`] defines the interface, implemented over HTTP by
//! [`HttpArrivalsClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::Station;
//! use integration_arrivals::{ArrivalsClient, ArrivalsConfig, HttpArrivalsClient};
//!
//! let config = ArrivalsConfig::default();
//! let client = HttpArrivalsClient::new(&config)?;
//!
//! let snapshot = client.station_trains(Station::UnionSquare).await?;
//! println!("{} lines at {}", snapshot.lines.len(), snapshot.station);
//! ```

mod client;
mod config;
mod error;

pub use client::{ArrivalsClient, HttpArrivalsClient};
pub use config::ArrivalsConfig;
pub use error::ArrivalsError;
