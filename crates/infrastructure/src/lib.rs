//! Infrastructure layer for RunDay
//!
//! Concrete adapters for application ports and configuration loading.

pub mod adapters;
pub mod config;

pub use adapters::WeatherApiAdapter;
pub use config::AppConfig;
