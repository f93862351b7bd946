//! Application configuration
//!
//! The board reads exactly two values from the environment:
//!
//! | Variable               | Default                             |
//! |------------------------|-------------------------------------|
//! | `SUBWAY_BOARD_API_URL` | `https://mta-api-bn7y.onrender.com` |
//! | `SUBWAY_BOARD_API_KEY` | empty                               |

use std::fmt;

use integration_arrivals::ArrivalsConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Prefix of every environment variable read by [`AppConfig::load`]
pub const ENV_PREFIX: &str = "SUBWAY_BOARD";

const DEFAULT_API_URL: &str = "https://mta-api-bn7y.onrender.com";

/// Main application configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the arrivals API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// API key sent with every request (sensitive, empty when unset)
    #[serde(default = "default_api_key", skip_serializing)]
    pub api_key: SecretString,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_api_key() -> SecretString {
    SecretString::from(String::new())
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: default_api_key(),
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_url", &self.api_url)
            .field(
                "api_key",
                &if self.api_key.expose_secret().is_empty() {
                    ""
                } else {
                    "[REDACTED]"
                },
            )
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit variable map instead of the
    /// process environment
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be deserialized.
    pub fn load_from(vars: Option<config::Map<String, String>>) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("api_url", DEFAULT_API_URL)?
            // SUBWAY_BOARD_API_URL -> api_url
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .source(vars),
            )
            .build()?
            .try_deserialize()
    }

    /// Settings for the arrivals HTTP client
    #[must_use]
    pub fn arrivals_config(&self) -> ArrivalsConfig {
        ArrivalsConfig {
            base_url: self.api_url.clone(),
            api_key: self.api_key.clone(),
            ..ArrivalsConfig::default()
        }
    }
}
