//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod weatherapi_adapter;

pub use weatherapi_adapter::WeatherApiAdapter;
