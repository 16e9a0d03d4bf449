//! Application services

mod demo;
mod forecast_service;

pub use demo::demo_forecast;
pub use forecast_service::ForecastService;
