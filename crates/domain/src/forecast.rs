//! Forecast entities
//!
//! Normalized weather representation returned per fetch: current
//! conditions plus an ordered run of scored day summaries. Values are
//! constructed fresh on every fetch and never mutated in place.

use serde::{Deserialize, Serialize};

use crate::value_objects::SuitabilityScore;

/// Current weather snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temperature_c: f64,
    /// Weather condition description
    pub condition: String,
    /// Apparent (feels like) temperature in Celsius
    pub feels_like_c: f64,
    /// Wind speed in km/h
    pub wind_kph: f64,
    /// Relative humidity percentage (0-100)
    pub humidity_pct: u8,
    /// UV index
    pub uv_index: f64,
}

impl CurrentConditions {
    /// Display string for the temperature, e.g. `"20°C"`
    #[must_use]
    pub fn temperature_label(&self) -> String {
        format!("{}°C", round(self.temperature_c))
    }

    /// Display string for the apparent temperature, e.g. `"Feels like 22°C"`
    #[must_use]
    pub fn feels_like_label(&self) -> String {
        format!("Feels like {}°C", round(self.feels_like_c))
    }

    /// Display string for the wind speed, e.g. `"10 km/h"`
    #[must_use]
    pub fn wind_label(&self) -> String {
        format!("{} km/h", round(self.wind_kph))
    }

    /// Display string for the humidity, e.g. `"55%"`
    #[must_use]
    pub fn humidity_label(&self) -> String {
        format!("{}%", self.humidity_pct)
    }

    /// Display string for the UV index, e.g. `"UV 4"`
    #[must_use]
    pub fn uv_label(&self) -> String {
        format!("UV {}", round(self.uv_index))
    }
}

/// One day's normalized weather facts plus its suitability score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    /// Calendar date as provided by the source (`yyyy-MM-dd`)
    pub date: String,
    /// Display name for the day: weekday name, or `"Unknown"` when the
    /// date could not be parsed
    pub day_label: String,
    /// Weather condition description
    pub condition: String,
    /// Maximum temperature in Celsius
    pub max_temp_c: f64,
    /// Minimum temperature in Celsius
    pub min_temp_c: f64,
    /// Chance of rain percentage (0-100)
    pub rain_chance_pct: u8,
    /// Maximum wind speed in km/h
    pub max_wind_kph: f64,
    /// Average humidity percentage (0-100)
    pub avg_humidity_pct: u8,
    /// UV index
    pub uv_index: f64,
    /// Computed running-suitability score
    pub score: SuitabilityScore,
}

impl DaySummary {
    /// Display string for the daily high, e.g. `"22°C"`
    #[must_use]
    pub fn high_label(&self) -> String {
        format!("{}°C", round(self.max_temp_c))
    }

    /// Display string for the daily low, e.g. `"12°C"`
    #[must_use]
    pub fn low_label(&self) -> String {
        format!("{}°C", round(self.min_temp_c))
    }

    /// Display string for the rain chance, e.g. `"10%"`
    #[must_use]
    pub fn rain_label(&self) -> String {
        format!("{}%", self.rain_chance_pct)
    }

    /// Display string for the wind speed, e.g. `"8 km/h"`
    #[must_use]
    pub fn wind_label(&self) -> String {
        format!("{} km/h", round(self.max_wind_kph))
    }
}

/// Complete normalized forecast with per-day suitability scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunForecast {
    /// Current weather conditions
    pub current: CurrentConditions,
    /// Daily summaries, chronological, one per requested horizon day
    pub days: Vec<DaySummary>,
    /// True when this forecast is the built-in synthetic dataset
    pub demo: bool,
}

impl RunForecast {
    /// Get today's summary
    #[must_use]
    pub fn today(&self) -> Option<&DaySummary> {
        self.days.first()
    }

    /// Get tomorrow's summary
    #[must_use]
    pub fn tomorrow(&self) -> Option<&DaySummary> {
        self.days.get(1)
    }

    /// Get the next N days of summaries
    #[must_use]
    pub fn next_days(&self, n: usize) -> &[DaySummary] {
        let end = n.min(self.days.len());
        &self.days[..end]
    }

    /// The day with the highest suitability score
    ///
    /// Ties resolve to the earliest day.
    #[must_use]
    pub fn best_day(&self) -> Option<&DaySummary> {
        self.days
            .iter()
            .reduce(|best, day| if day.score > best.score { day } else { best })
    }
}

#[allow(clippy::cast_possible_truncation)]
fn round(value: f64) -> i64 {
    value.round() as i64
}
