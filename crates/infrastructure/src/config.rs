//! Application configuration
//!
//! Layered loading: built-in defaults, then an optional `config.*` file,
//! then `RUNDAY_*` environment variables.

use integration_weatherapi::WeatherApiConfig;
use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Location query passed to the weather provider
    ///
    /// Free-form: `"auto:ip"`, a place name, or `"lat,lon"`.
    #[serde(default = "default_location")]
    pub location: String,

    /// Number of forecast days to request
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u8,

    /// Weather provider settings
    #[serde(default)]
    pub weather: WeatherApiConfig,
}

fn default_location() -> String {
    "auto:ip".to_string()
}

const fn default_horizon_days() -> u8 {
    7
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            horizon_days: default_horizon_days(),
            weather: WeatherApiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("location", default_location())?
            .set_default("horizon_days", i64::from(default_horizon_days()))?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., RUNDAY_WEATHER_API_KEY)
            .add_source(
                config::Environment::with_prefix("RUNDAY")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
