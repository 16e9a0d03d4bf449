//! Built-in demo forecast
//!
//! Deterministic synthetic dataset served when no provider credential is
//! configured. It performs no I/O and never fails, so the system stays
//! runnable and testable without a live weather provider. Horizons beyond
//! the fixed tables cycle via modulo indexing rather than random data.

use chrono::{Days, Local};
use domain::{CurrentConditions, DaySummary, RunForecast, WeatherFactors, suitability_score};

const DAY_NAMES: [&str; 7] = [
    "Today",
    "Tomorrow",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];
const CONDITIONS: [&str; 7] = [
    "Sunny",
    "Partly Cloudy",
    "Cloudy",
    "Light Rain",
    "Sunny",
    "Clear",
    "Partly Cloudy",
];
const HIGH_TEMPS: [f64; 7] = [22.0, 18.0, 15.0, 12.0, 25.0, 21.0, 19.0];
const LOW_TEMPS: [f64; 7] = [12.0, 8.0, 5.0, 7.0, 15.0, 11.0, 9.0];
const RAIN_CHANCES: [u8; 7] = [10, 20, 30, 70, 0, 5, 15];
const WIND_SPEEDS: [f64; 7] = [8.0, 12.0, 15.0, 20.0, 6.0, 10.0, 14.0];

const DEMO_HUMIDITY: u8 = 55;
const DEMO_UV: f64 = 4.0;

/// Build the synthetic demo forecast for the given horizon
///
/// Dates start at the current local date. All weather values come from
/// fixed tables, so repeated calls on the same day produce identical
/// forecasts.
#[must_use]
pub fn demo_forecast(horizon_days: u8) -> RunForecast {
    let today = Local::now().date_naive();

    let days = (0..horizon_days)
        .map(|offset| {
            let i = usize::from(offset);
            let date = today
                .checked_add_days(Days::new(u64::from(offset)))
                .unwrap_or(today);
            let day_label = DAY_NAMES
                .get(i)
                .map_or_else(|| format!("Day {}", i + 1), ToString::to_string);

            let high = HIGH_TEMPS[i % HIGH_TEMPS.len()];
            let low = LOW_TEMPS[i % LOW_TEMPS.len()];
            let rain = RAIN_CHANCES[i % RAIN_CHANCES.len()];
            let wind = WIND_SPEEDS[i % WIND_SPEEDS.len()];

            // Demo days are scored on the daily high, matching the
            // published sample dataset.
            let factors = WeatherFactors::for_current(
                high,
                wind,
                i64::from(rain),
                i64::from(DEMO_HUMIDITY),
                DEMO_UV,
            );

            DaySummary {
                date: date.format("%Y-%m-%d").to_string(),
                day_label,
                condition: CONDITIONS[i % CONDITIONS.len()].to_string(),
                max_temp_c: high,
                min_temp_c: low,
                rain_chance_pct: rain,
                max_wind_kph: wind,
                avg_humidity_pct: DEMO_HUMIDITY,
                uv_index: DEMO_UV,
                score: suitability_score(&factors),
            }
        })
        .collect();

    RunForecast {
        current: CurrentConditions {
            temperature_c: 20.0,
            condition: "Partly Cloudy".to_string(),
            feels_like_c: 22.0,
            wind_kph: 10.0,
            humidity_pct: 55,
            uv_index: 4.0,
        },
        days,
        demo: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_day_horizon() {
        let forecast = demo_forecast(7);
        assert!(forecast.demo);
        assert_eq!(forecast.days.len(), 7);
        assert_eq!(forecast.days[0].day_label, "Today");
        assert_eq!(forecast.days[1].day_label, "Tomorrow");
        assert_eq!(forecast.days[6].day_label, "Sunday");
    }

    #[test]
    fn deterministic_across_calls() {
        assert_eq!(demo_forecast(7), demo_forecast(7));
    }

    #[test]
    fn horizon_beyond_tables_cycles() {
        let forecast = demo_forecast(10);
        assert_eq!(forecast.days.len(), 10);
        // Day 8 wraps to the first table entries and gets a numeric label.
        assert_eq!(forecast.days[7].day_label, "Day 8");
        assert_eq!(forecast.days[7].condition, "Sunny");
        assert!((forecast.days[7].max_temp_c - 22.0).abs() < f64::EPSILON);
        assert_eq!(forecast.days[7].rain_chance_pct, 10);
    }

    #[test]
    fn dates_are_consecutive() {
        let forecast = demo_forecast(3);
        let dates: Vec<_> = forecast.days.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates.len(), 3);
        // Strictly increasing yyyy-MM-dd strings sort chronologically.
        assert!(dates[0] < dates[1] && dates[1] < dates[2]);
    }

    #[test]
    fn current_snapshot_matches_sample() {
        let forecast = demo_forecast(7);
        assert_eq!(forecast.current.temperature_label(), "20°C");
        assert_eq!(forecast.current.condition, "Partly Cloudy");
        assert_eq!(forecast.current.feels_like_label(), "Feels like 22°C");
        assert_eq!(forecast.current.wind_label(), "10 km/h");
        assert_eq!(forecast.current.humidity_label(), "55%");
        assert_eq!(forecast.current.uv_label(), "UV 4");
    }

    #[test]
    fn demo_days_are_scored() {
        let forecast = demo_forecast(7);
        // First entry: high 22, wind 8, rain 10, humidity 55, UV 4 ->
        // 100*0.30 + 100*0.25 + 100*0.20 + 100*0.15 + 90*0.10 = 99
        assert_eq!(forecast.days[0].score.value(), 99);
        // Rainy midweek entry is noticeably worse.
        assert!(forecast.days[3].score < forecast.days[0].score);
    }

    #[test]
    fn empty_horizon() {
        let forecast = demo_forecast(0);
        assert!(forecast.days.is_empty());
    }
}
