//! WeatherAPI.com forecast integration
//!
//! Client for the WeatherAPI forecast endpoint
//! (<https://www.weatherapi.com/docs/>). Requires an API key; without one
//! the client reports itself as unconfigured so callers can fall back to
//! demo data.

pub mod client;
mod models;

pub use client::{WeatherApiClient, WeatherApiConfig, WeatherApiError};
pub use models::{
    Condition, Current, DayDetail, ForecastBlock, ForecastDay, ForecastResponse, HourDetail,
};
