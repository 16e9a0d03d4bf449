//! Application layer - Use cases and orchestration
//!
//! Contains the forecast provider port and the forecast service that
//! turns raw provider data (or the built-in demo dataset) into a scored
//! [`domain::RunForecast`].

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
