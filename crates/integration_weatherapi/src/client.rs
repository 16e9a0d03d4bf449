//! WeatherAPI HTTP client
//!
//! Issues a single `forecast.json` request per fetch; retries and
//! fallback are caller concerns.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::ForecastResponse;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherApiError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// No API key is configured
    #[error("No WeatherAPI key configured")]
    MissingApiKey,
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherApiConfig {
    /// WeatherAPI base URL (default: <https://api.weatherapi.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key; absent means the client is unconfigured
    #[serde(default)]
    pub api_key: Option<String>,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Number of forecast days (1-14, default: 7)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
}

fn default_base_url() -> String {
    "https://api.weatherapi.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

const fn default_forecast_days() -> u8 {
    7
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
            forecast_days: default_forecast_days(),
        }
    }
}

/// Provider error body, e.g. `{"error":{"code":1002,"message":"..."}}`
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// WeatherAPI HTTP client
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    client: Client,
    config: WeatherApiConfig,
}

impl WeatherApiClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherApiConfig) -> Result<Self, WeatherApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherApiError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration (no API key)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherApiError> {
        Self::new(WeatherApiConfig::default())
    }

    /// Whether an API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.config
            .api_key
            .as_ref()
            .is_some_and(|key| !key.is_empty())
    }

    /// Clamp the requested day count to the provider's supported range
    fn clamp_days(days: u8) -> u8 {
        days.clamp(1, 14)
    }

    /// Fetch the forecast for a location
    ///
    /// Issues one GET to `{base}/forecast.json` with air quality and
    /// alerts disabled.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` without a configured key,
    /// `ServiceUnavailable` on 5xx responses, `RequestFailed` on other
    /// non-success responses or transport errors, and `ParseError` when
    /// the body cannot be decoded.
    #[instrument(skip(self), fields(location = %location, days = %days))]
    pub async fn fetch_forecast(
        &self,
        location: &str,
        days: u8,
    ) -> Result<ForecastResponse, WeatherApiError> {
        let Some(api_key) = self.config.api_key.as_ref().filter(|k| !k.is_empty()) else {
            return Err(WeatherApiError::MissingApiKey);
        };

        let url = format!("{}/forecast.json", self.config.base_url);
        let days = Self::clamp_days(days);

        debug!(url = %url, "Fetching weather forecast");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", api_key.as_str()),
                ("q", location),
                ("days", &days.to_string()),
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .send()
            .await
            .map_err(|e| WeatherApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(WeatherApiError::ServiceUnavailable(format!(
                "HTTP {status}"
            )));
        }
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .map_or_else(|_| format!("HTTP {status}"), |body| body.error.message);
            return Err(WeatherApiError::RequestFailed(message));
        }

        response
            .json()
            .await
            .map_err(|e| WeatherApiError::ParseError(e.to_string()))
    }
}
