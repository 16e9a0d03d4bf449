//! Forecast service
//!
//! Orchestrates a single forecast request: serves the demo dataset when
//! no provider credential is configured, otherwise issues one provider
//! call and normalizes the raw response into a scored [`RunForecast`].

use std::sync::Arc;

use chrono::NaiveDate;
use domain::{
    CurrentConditions, DaySummary, RunForecast, WeatherFactors, suitability_score,
};
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{ForecastProvider, RawCurrent, RawForecast, RawForecastDay};
use crate::services::demo::demo_forecast;

/// Service producing scored running forecasts
#[derive(Clone)]
pub struct ForecastService {
    provider: Arc<dyn ForecastProvider>,
}

impl std::fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastService")
            .field("provider_configured", &self.provider.is_configured())
            .finish()
    }
}

impl ForecastService {
    /// Create a new forecast service with the given provider
    #[must_use]
    pub fn new(provider: Arc<dyn ForecastProvider>) -> Self {
        Self { provider }
    }

    /// Fetch and score a forecast for a location
    ///
    /// Without a configured provider credential this returns the
    /// deterministic demo forecast and performs no I/O. With a credential
    /// it issues exactly one provider request; provider failures
    /// propagate as [`ApplicationError`] without falling back to demo
    /// data. Each call produces a fresh, immutable result.
    #[instrument(skip(self), fields(location = %location, days = %horizon_days))]
    pub async fn get_forecast(
        &self,
        location: &str,
        horizon_days: u8,
    ) -> Result<RunForecast, ApplicationError> {
        if !self.provider.is_configured() {
            debug!("no provider credential configured, serving demo forecast");
            return Ok(demo_forecast(horizon_days));
        }

        let raw = self.provider.fetch_raw(location, horizon_days).await?;
        Ok(normalize(raw))
    }
}

/// Map a raw provider response into a scored forecast
fn normalize(raw: RawForecast) -> RunForecast {
    let days = raw.days.into_iter().map(normalize_day).collect();

    RunForecast {
        current: normalize_current(raw.current),
        days,
        demo: false,
    }
}

fn normalize_current(current: RawCurrent) -> CurrentConditions {
    CurrentConditions {
        temperature_c: current.temp_c,
        condition: current.condition_text,
        feels_like_c: current.feels_like_c,
        wind_kph: current.wind_kph,
        humidity_pct: clamp_pct(current.humidity),
        uv_index: current.uv,
    }
}

fn normalize_day(day: RawForecastDay) -> DaySummary {
    // A provider should never invert min/max, but a swap keeps the
    // invariant without failing the whole fetch.
    let (min_temp_c, max_temp_c) = if day.min_temp_c <= day.max_temp_c {
        (day.min_temp_c, day.max_temp_c)
    } else {
        (day.max_temp_c, day.min_temp_c)
    };

    // Full-precision values go into the scorer; display rounding is a
    // caller concern.
    let factors = WeatherFactors::for_day(
        max_temp_c,
        min_temp_c,
        day.max_wind_kph,
        day.rain_chance,
        day.avg_humidity,
        day.uv,
    );

    DaySummary {
        day_label: day_label(&day.date),
        date: day.date,
        condition: day.condition_text,
        max_temp_c,
        min_temp_c,
        rain_chance_pct: clamp_pct(day.rain_chance),
        max_wind_kph: day.max_wind_kph,
        avg_humidity_pct: clamp_pct(day.avg_humidity),
        uv_index: day.uv,
        score: suitability_score(&factors),
    }
}

/// Weekday name for a provider date string, `"Unknown"` when unparseable
fn day_label(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_or_else(
        |err| {
            warn!(date = %date, error = %err, "unparseable forecast date");
            "Unknown".to_string()
        },
        |parsed| parsed.format("%A").to_string(),
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn clamp_pct(value: i64) -> u8 {
    if value < 0 {
        0
    } else if value > 100 {
        100
    } else {
        value as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockForecastProvider, RawHour};

    fn raw_day(date: &str) -> RawForecastDay {
        RawForecastDay {
            date: date.to_string(),
            condition_text: "Partly Cloudy".to_string(),
            max_temp_c: 23.4,
            min_temp_c: 12.6,
            max_wind_kph: 11.2,
            avg_humidity: 48,
            rain_chance: 15,
            uv: 5.0,
            hours: vec![RawHour {
                time: format!("{date} 08:00"),
                temp_c: 14.0,
                condition_text: "Clear".to_string(),
                rain_chance: 5,
            }],
        }
    }

    fn raw_forecast(dates: &[&str]) -> RawForecast {
        RawForecast {
            current: RawCurrent {
                temp_c: 18.6,
                condition_text: "Sunny".to_string(),
                wind_kph: 9.0,
                humidity: 52,
                feels_like_c: 19.1,
                uv: 4.0,
            },
            days: dates.iter().map(|d| raw_day(d)).collect(),
        }
    }

    fn service(provider: MockForecastProvider) -> ForecastService {
        ForecastService::new(Arc::new(provider))
    }

    #[tokio::test]
    async fn missing_credential_serves_demo_without_provider_call() {
        let mut provider = MockForecastProvider::new();
        provider.expect_is_configured().return_const(false);
        // The test fails if the provider is ever invoked.
        provider.expect_fetch_raw().times(0);

        let result = service(provider)
            .get_forecast("auto:ip", 7)
            .await
            .unwrap();

        assert!(result.demo);
        assert_eq!(result.days.len(), 7);
    }

    #[tokio::test]
    async fn demo_forecast_is_deterministic() {
        let mut provider = MockForecastProvider::new();
        provider.expect_is_configured().return_const(false);

        let svc = service(provider);
        let first = svc.get_forecast("auto:ip", 7).await.unwrap();
        let second = svc.get_forecast("auto:ip", 7).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn live_forecast_is_normalized_and_scored() {
        let mut provider = MockForecastProvider::new();
        provider.expect_is_configured().return_const(true);
        provider
            .expect_fetch_raw()
            .withf(|location, days| location == "London" && *days == 2)
            .returning(|_, _| Ok(raw_forecast(&["2026-08-28", "2026-08-29"])));

        let result = service(provider).get_forecast("London", 2).await.unwrap();

        assert!(!result.demo);
        assert_eq!(result.days.len(), 2);
        assert_eq!(result.days[0].day_label, "Friday");
        assert_eq!(result.days[1].day_label, "Saturday");
        assert_eq!(result.current.condition, "Sunny");

        // Midpoint temp 18.0, wind 11.2, rain 15, humidity 48, UV 5:
        // 100*0.30 + 85*0.25 + 90*0.20 + 100*0.15 + 90*0.10 = 93.25 -> 93
        assert_eq!(result.days[0].score.value(), 93);
    }

    #[tokio::test]
    async fn malformed_date_defaults_label_without_failing() {
        let mut provider = MockForecastProvider::new();
        provider.expect_is_configured().return_const(true);
        provider
            .expect_fetch_raw()
            .returning(|_, _| Ok(raw_forecast(&["not-a-date"])));

        let result = service(provider).get_forecast("London", 1).await.unwrap();

        assert_eq!(result.days[0].day_label, "Unknown");
        assert_eq!(result.days[0].date, "not-a-date");
        // Remaining fields are still populated and scored.
        assert_eq!(result.days[0].condition, "Partly Cloudy");
        assert!(result.days[0].score.value() > 0);
    }

    #[tokio::test]
    async fn provider_failure_propagates_without_demo_fallback() {
        let mut provider = MockForecastProvider::new();
        provider.expect_is_configured().return_const(true);
        provider.expect_fetch_raw().returning(|_, _| {
            Err(ApplicationError::ProviderUnavailable(
                "HTTP 500 Internal Server Error".to_string(),
            ))
        });

        let err = service(provider)
            .get_forecast("London", 7)
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::ProviderUnavailable(_)));
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn inverted_min_max_is_swapped() {
        let mut provider = MockForecastProvider::new();
        provider.expect_is_configured().return_const(true);
        provider.expect_fetch_raw().returning(|_, _| {
            let mut raw = raw_forecast(&["2026-08-28"]);
            raw.days[0].min_temp_c = 25.0;
            raw.days[0].max_temp_c = 15.0;
            Ok(raw)
        });

        let result = service(provider).get_forecast("London", 1).await.unwrap();

        assert!(result.days[0].min_temp_c <= result.days[0].max_temp_c);
        assert!((result.days[0].max_temp_c - 25.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn out_of_range_percentages_are_clamped() {
        let mut provider = MockForecastProvider::new();
        provider.expect_is_configured().return_const(true);
        provider.expect_fetch_raw().returning(|_, _| {
            let mut raw = raw_forecast(&["2026-08-28"]);
            raw.days[0].rain_chance = 130;
            raw.days[0].avg_humidity = -4;
            Ok(raw)
        });

        let result = service(provider).get_forecast("London", 1).await.unwrap();

        assert_eq!(result.days[0].rain_chance_pct, 100);
        assert_eq!(result.days[0].avg_humidity_pct, 0);
    }

    #[test]
    fn day_label_formats_weekday() {
        assert_eq!(day_label("2026-08-28"), "Friday");
        assert_eq!(day_label("2026-08-30"), "Sunday");
        assert_eq!(day_label("28/08/2026"), "Unknown");
        assert_eq!(day_label(""), "Unknown");
    }
}
