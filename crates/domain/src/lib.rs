//! Domain layer for RunDay
//!
//! Contains the forecast entities, the running-suitability scorer, and
//! value objects. This layer has no I/O and no external service
//! dependencies; everything here is pure and deterministic.

pub mod forecast;
pub mod scoring;
pub mod value_objects;

pub use forecast::{CurrentConditions, DaySummary, RunForecast};
pub use scoring::{WeatherFactors, suitability_score};
pub use value_objects::{InvalidScore, ScoreGrade, SuitabilityScore};
