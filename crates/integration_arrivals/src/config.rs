//! Arrivals API client configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Configuration for the subway arrivals API
#[derive(Clone, Serialize, Deserialize)]
pub struct ArrivalsConfig {
    /// Base URL of the arrivals API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value sent in the `X-API-Key` header (sensitive, empty when unset)
    #[serde(default = "default_api_key", skip_serializing)]
    pub api_key: SecretString,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://mta-api-bn7y.onrender.com".to_string()
}

fn default_api_key() -> SecretString {
    SecretString::from(String::new())
}

const fn default_timeout_secs() -> u64 {
    10
}

impl std::fmt::Debug for ArrivalsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrivalsConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &if self.has_api_key() {
                    "[REDACTED]"
                } else {
                    ""
                },
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for ArrivalsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: default_api_key(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ArrivalsConfig {
    /// Create a configuration suitable for testing against a mock server
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            api_key: SecretString::from("test-key"),
            timeout_secs: 5,
        }
    }

    /// Whether a non-empty API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().is_empty()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("base_url must start with http:// or https://".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
