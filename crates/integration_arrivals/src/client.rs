//! HTTP client for the subway arrivals API

use std::time::Duration;

use async_trait::async_trait;
use domain::{Station, StationSnapshot};
use reqwest::Client;
use reqwest::header::ACCEPT;
use secrecy::ExposeSecret;
use tracing::{debug, instrument, warn};

use crate::config::ArrivalsConfig;
use crate::error::ArrivalsError;

/// Header carrying the static API key
const API_KEY_HEADER: &str = "X-API-Key";

/// Trait for arrivals API clients
#[async_trait]
pub trait ArrivalsClient: Send + Sync {
    /// Fetch the current snapshot of upcoming trains for a station
    async fn station_trains(&self, station: Station) -> Result<StationSnapshot, ArrivalsError>;
}

/// Arrivals client talking to the HTTP API
#[derive(Debug)]
pub struct HttpArrivalsClient {
    client: Client,
    config: ArrivalsConfig,
}

impl HttpArrivalsClient {
    /// Create a new arrivals client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &ArrivalsConfig) -> Result<Self, ArrivalsError> {
        config
            .validate()
            .map_err(ArrivalsError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("SubwayBoard/1.0")
            .build()
            .map_err(|e| ArrivalsError::ConfigurationError(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// URL of the trains endpoint for a station slug
    fn trains_url(&self, slug: &str) -> String {
        format!(
            "{}/api/stations/{slug}/trains",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Parse a raw response body into a station snapshot
    fn parse_snapshot(body: &str) -> Result<StationSnapshot, ArrivalsError> {
        serde_json::from_str(body).map_err(|e| ArrivalsError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl ArrivalsClient for HttpArrivalsClient {
    #[instrument(skip(self), fields(station = %station))]
    async fn station_trains(&self, station: Station) -> Result<StationSnapshot, ArrivalsError> {
        let url = self.trains_url(&station.slug());

        debug!(?url, "Fetching station trains");

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, self.config.api_key.expose_secret())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ArrivalsError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    ArrivalsError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Arrivals API returned an error status");
            return Err(ArrivalsError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ArrivalsError::ParseError(e.to_string()))?;

        let snapshot = Self::parse_snapshot(&body)?;

        debug!(
            lines = snapshot.lines.len(),
            trains = snapshot.all_trains.len(),
            "Station trains received"
        );
        Ok(snapshot)
    }
}
