//! Application ports
//!
//! Trait interfaces the application layer depends on, implemented by
//! infrastructure adapters.

mod forecast_provider;

#[cfg(test)]
pub use forecast_provider::MockForecastProvider;
pub use forecast_provider::{
    ForecastProvider, RawCurrent, RawForecast, RawForecastDay, RawHour,
};
