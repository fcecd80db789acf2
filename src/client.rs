use std::time::Duration;

use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::constants::{GEO_JSON_ACCEPT, NWS_API_BASE, REQUEST_TIMEOUT_SECS, USER_AGENT};

/// Failure modes of a single fetch attempt. A failed attempt is terminal for
/// that invocation; no retry is performed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connect failure, timeout, or other transport error
    #[error("network error: {0}")]
    Network(String),

    /// Response arrived with a non-success status
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    /// Response body was not the expected JSON shape
    #[error("parse error: {0}")]
    Parse(String),
}

/// NWS client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NwsConfig {
    /// API base URL (default: <https://api.weather.gov>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    NWS_API_BASE.to_string()
}

const fn default_timeout() -> u64 {
    REQUEST_TIMEOUT_SECS
}

impl Default for NwsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// HTTP client for the National Weather Service API
#[derive(Debug)]
pub struct NwsClient {
    http: Client,
    config: NwsConfig,
}

impl NwsClient {
    /// Creates a client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be initialized.
    pub fn new(config: NwsConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// Creates a client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(NwsConfig::default())
    }

    /// Configured API base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Issues a single GET request and deserializes the JSON response
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!(url = %url, "Fetching NWS resource");

        let response = self
            .http
            .get(url)
            .header(header::ACCEPT, GEO_JSON_ACCEPT)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }
}
