//! Forecast provider port
//!
//! Defines the interface for fetching raw forecast data from an external
//! weather provider. The types mirror the provider response closely; the
//! forecast service owns normalization and scoring.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Current conditions as reported by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCurrent {
    /// Temperature in Celsius
    pub temp_c: f64,
    /// Condition description text
    pub condition_text: String,
    /// Wind speed in km/h
    pub wind_kph: f64,
    /// Relative humidity percentage
    pub humidity: i64,
    /// Apparent temperature in Celsius
    pub feels_like_c: f64,
    /// UV index
    pub uv: f64,
}

/// One hour of forecast detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawHour {
    /// Local time string, e.g. `"2026-08-28 14:00"`
    pub time: String,
    /// Temperature in Celsius
    pub temp_c: f64,
    /// Condition description text
    pub condition_text: String,
    /// Chance of rain percentage
    pub rain_chance: i64,
}

/// One forecast day as reported by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawForecastDay {
    /// Date string, `yyyy-MM-dd`
    pub date: String,
    /// Condition description text
    pub condition_text: String,
    /// Maximum temperature in Celsius
    pub max_temp_c: f64,
    /// Minimum temperature in Celsius
    pub min_temp_c: f64,
    /// Maximum wind speed in km/h
    pub max_wind_kph: f64,
    /// Average humidity percentage
    pub avg_humidity: i64,
    /// Daily chance of rain percentage
    pub rain_chance: i64,
    /// UV index
    pub uv: f64,
    /// Hourly breakdown
    pub hours: Vec<RawHour>,
}

/// Complete raw forecast response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawForecast {
    /// Current conditions block
    pub current: RawCurrent,
    /// Per-day forecast entries, chronological
    pub days: Vec<RawForecastDay>,
}

/// Port for weather forecast retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Whether a provider credential is configured
    ///
    /// When this returns false the forecast service serves the built-in
    /// demo dataset and never calls [`fetch_raw`](Self::fetch_raw).
    fn is_configured(&self) -> bool;

    /// Fetch the raw forecast for a location
    ///
    /// Issues a single request; no retry or fallback happens at this
    /// level.
    ///
    /// # Arguments
    /// * `location` - Free-form location query (e.g. `"auto:ip"` or a place name)
    /// * `days` - Number of forecast days requested (typically 7)
    async fn fetch_raw(
        &self,
        location: &str,
        days: u8,
    ) -> Result<RawForecast, ApplicationError>;
}
