//! Arrivals feed port
//!
//! Defines how the board obtains station snapshots.

use async_trait::async_trait;
use domain::{Station, StationSnapshot};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for fetching the current arrivals of a station
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ArrivalsPort: Send + Sync {
    /// Fetch a fresh snapshot for the given station
    ///
    /// Transport failures, error statuses and malformed payloads are all
    /// reported as [`ApplicationError::ExternalService`].
    async fn fetch_station(&self, station: Station) -> Result<StationSnapshot, ApplicationError>;
}
