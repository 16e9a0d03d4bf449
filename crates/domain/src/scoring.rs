//! Running-suitability scorer
//!
//! Pure weighted-band scoring of five weather factors. Each factor is
//! rated 0-100 by a step function, the ratings are combined by fixed
//! weights (temperature 30, rain 25, wind 20, humidity 15, UV 10), and
//! the weighted average is truncated and clamped to 0-100.
//!
//! The function is total: any numeric input, including negative rain
//! chance or humidity, falls into the worst band instead of failing.

use serde::{Deserialize, Serialize};

use crate::value_objects::SuitabilityScore;

const TEMPERATURE_WEIGHT: f64 = 30.0;
const RAIN_WEIGHT: f64 = 25.0;
const WIND_WEIGHT: f64 = 20.0;
const HUMIDITY_WEIGHT: f64 = 15.0;
const UV_WEIGHT: f64 = 10.0;

/// Weather inputs for a single scoring pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherFactors {
    /// Temperature in Celsius (midpoint for a day, instantaneous for now)
    pub temperature_c: f64,
    /// Wind speed in km/h
    pub wind_kph: f64,
    /// Chance of rain in percent
    pub rain_chance_pct: i64,
    /// Relative humidity in percent
    pub humidity_pct: i64,
    /// UV index
    pub uv_index: f64,
}

impl WeatherFactors {
    /// Factors for a forecast day, using the min/max temperature midpoint
    #[must_use]
    pub fn for_day(
        max_temp_c: f64,
        min_temp_c: f64,
        max_wind_kph: f64,
        rain_chance_pct: i64,
        avg_humidity_pct: i64,
        uv_index: f64,
    ) -> Self {
        Self {
            temperature_c: f64::midpoint(max_temp_c, min_temp_c),
            wind_kph: max_wind_kph,
            rain_chance_pct,
            humidity_pct: avg_humidity_pct,
            uv_index,
        }
    }

    /// Factors for current conditions, using the instantaneous temperature
    #[must_use]
    pub const fn for_current(
        temperature_c: f64,
        wind_kph: f64,
        rain_chance_pct: i64,
        humidity_pct: i64,
        uv_index: f64,
    ) -> Self {
        Self {
            temperature_c,
            wind_kph,
            rain_chance_pct,
            humidity_pct,
            uv_index,
        }
    }
}

/// Compute the running-suitability score for the given weather factors
///
/// Deterministic and side-effect free; identical inputs always yield the
/// identical score.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn suitability_score(factors: &WeatherFactors) -> SuitabilityScore {
    let weighted = temperature_score(factors.temperature_c) * TEMPERATURE_WEIGHT / 100.0
        + rain_score(factors.rain_chance_pct) * RAIN_WEIGHT / 100.0
        + wind_score(factors.wind_kph) * WIND_WEIGHT / 100.0
        + humidity_score(factors.humidity_pct) * HUMIDITY_WEIGHT / 100.0
        + uv_score(factors.uv_index) * UV_WEIGHT / 100.0;

    // Fractional weighted sums are truncated, not rounded: 14.5 -> 14.
    SuitabilityScore::clamped(weighted as i64)
}

/// Temperature bands, ideal 15-22°C
fn temperature_score(temp_c: f64) -> f64 {
    if (15.0..=22.0).contains(&temp_c) {
        100.0
    } else if (10.0..=14.9).contains(&temp_c) || (22.1..=25.0).contains(&temp_c) {
        80.0
    } else if (5.0..=9.9).contains(&temp_c) || (25.1..=28.0).contains(&temp_c) {
        60.0
    } else if (0.0..=4.9).contains(&temp_c) || (28.1..=32.0).contains(&temp_c) {
        30.0
    } else {
        10.0
    }
}

fn rain_score(chance_pct: i64) -> f64 {
    match chance_pct {
        i64::MIN..=10 => 100.0,
        11..=20 => 85.0,
        21..=30 => 70.0,
        31..=50 => 50.0,
        51..=70 => 30.0,
        _ => 10.0,
    }
}

/// Wind bands, ideal below 15 km/h
fn wind_score(wind_kph: f64) -> f64 {
    if wind_kph <= 10.0 {
        100.0
    } else if wind_kph <= 15.0 {
        90.0
    } else if wind_kph <= 20.0 {
        75.0
    } else if wind_kph <= 25.0 {
        60.0
    } else if wind_kph <= 35.0 {
        40.0
    } else {
        20.0
    }
}

/// Humidity bands, ideal 40-60%
fn humidity_score(humidity_pct: i64) -> f64 {
    match humidity_pct {
        40..=60 => 100.0,
        30..=39 | 61..=70 => 80.0,
        20..=29 | 71..=80 => 60.0,
        10..=19 | 81..=90 => 40.0,
        _ => 20.0,
    }
}

fn uv_score(uv_index: f64) -> f64 {
    if uv_index <= 3.0 {
        100.0
    } else if uv_index <= 5.0 {
        90.0
    } else if uv_index <= 7.0 {
        75.0
    } else if uv_index <= 9.0 {
        60.0
    } else if uv_index <= 11.0 {
        40.0
    } else {
        20.0
    }
}
