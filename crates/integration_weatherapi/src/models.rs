//! Weather data models
//!
//! Serde mirrors of the WeatherAPI `forecast.json` response, limited to
//! the fields the forecast pipeline consumes.

use serde::{Deserialize, Serialize};

/// Weather condition block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Human-readable condition text, e.g. `"Partly cloudy"`
    pub text: String,
    /// Condition icon URL path
    #[serde(default)]
    pub icon: String,
    /// Provider condition code
    #[serde(default)]
    pub code: i32,
}

/// Current conditions block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Current {
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: Condition,
    pub wind_kph: f64,
    pub wind_mph: f64,
    pub humidity: i64,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    pub uv: f64,
}

/// Daily aggregate values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayDetail {
    pub maxtemp_c: f64,
    pub maxtemp_f: f64,
    pub mintemp_c: f64,
    pub mintemp_f: f64,
    pub condition: Condition,
    pub maxwind_kph: f64,
    pub maxwind_mph: f64,
    pub avghumidity: i64,
    pub daily_chance_of_rain: i64,
    pub uv: f64,
}

/// One hour of forecast detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourDetail {
    /// Local time, e.g. `"2026-08-28 14:00"`
    pub time: String,
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: Condition,
    pub chance_of_rain: i64,
}

/// One forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Forecast date, `yyyy-MM-dd`
    pub date: String,
    pub day: DayDetail,
    #[serde(default)]
    pub hour: Vec<HourDetail>,
}

/// Forecast container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastBlock {
    #[serde(rename = "forecastday")]
    pub forecast_days: Vec<ForecastDay>,
}

/// Complete `forecast.json` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub current: Current,
    pub forecast: ForecastBlock,
}
