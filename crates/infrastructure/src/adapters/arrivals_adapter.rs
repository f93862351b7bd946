//! Arrivals adapter - Implements ArrivalsPort using integration_arrivals

use application::error::ApplicationError;
use application::ports::ArrivalsPort;
use async_trait::async_trait;
use domain::{Station, StationSnapshot};
use integration_arrivals::{ArrivalsClient, ArrivalsConfig, ArrivalsError, HttpArrivalsClient};
use tracing::{debug, instrument, warn};

/// Adapter for the subway arrivals API
pub struct ArrivalsAdapter {
    client: HttpArrivalsClient,
}

impl std::fmt::Debug for ArrivalsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrivalsAdapter")
            .field("client", &"HttpArrivalsClient")
            .finish()
    }
}

impl ArrivalsAdapter {
    /// Wrap an existing client
    #[must_use]
    pub const fn new(client: HttpArrivalsClient) -> Self {
        Self { client }
    }

    /// Build the client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn from_config(config: &ArrivalsConfig) -> Result<Self, ApplicationError> {
        HttpArrivalsClient::new(config)
            .map(Self::new)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))
    }

    fn map_error(station: Station, e: &ArrivalsError) -> ApplicationError {
        warn!(
            %station,
            error = %e,
            transient = e.is_transient(),
            "Arrivals request failed"
        );
        ApplicationError::ExternalService(format!("Arrivals fetch failed: {e}"))
    }
}

#[async_trait]
impl ArrivalsPort for ArrivalsAdapter {
    #[instrument(skip(self))]
    async fn fetch_station(&self, station: Station) -> Result<StationSnapshot, ApplicationError> {
        let snapshot = self
            .client
            .station_trains(station)
            .await
            .map_err(|e| Self::map_error(station, &e))?;

        debug!(
            %station,
            lines = snapshot.lines.len(),
            trains = snapshot.all_trains.len(),
            "Arrivals fetched"
        );
        Ok(snapshot)
    }
}
