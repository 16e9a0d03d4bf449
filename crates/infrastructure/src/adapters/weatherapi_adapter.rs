//! WeatherAPI adapter - Implements ForecastProvider using integration_weatherapi

use application::error::ApplicationError;
use application::ports::{ForecastProvider, RawCurrent, RawForecast, RawForecastDay, RawHour};
use async_trait::async_trait;
use integration_weatherapi::{
    Current, ForecastDay, ForecastResponse, HourDetail, WeatherApiClient, WeatherApiConfig,
    WeatherApiError,
};
use tracing::instrument;

/// Adapter for weather forecasts using WeatherAPI.com
#[derive(Debug, Clone)]
pub struct WeatherApiAdapter {
    client: WeatherApiClient,
}

impl WeatherApiAdapter {
    /// Create a new adapter with default configuration (no API key)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        let client = WeatherApiClient::with_defaults()
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherApiConfig) -> Result<Self, ApplicationError> {
        let client = WeatherApiClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherApiError) -> ApplicationError {
        match err {
            WeatherApiError::ConnectionFailed(e)
            | WeatherApiError::RequestFailed(e)
            | WeatherApiError::ServiceUnavailable(e) => ApplicationError::ProviderUnavailable(e),
            WeatherApiError::ParseError(e) => ApplicationError::Internal(e),
            WeatherApiError::MissingApiKey => {
                ApplicationError::Configuration("No WeatherAPI key configured".into())
            },
        }
    }

    fn map_current(current: Current) -> RawCurrent {
        RawCurrent {
            temp_c: current.temp_c,
            condition_text: current.condition.text,
            wind_kph: current.wind_kph,
            humidity: current.humidity,
            feels_like_c: current.feelslike_c,
            uv: current.uv,
        }
    }

    fn map_hour(hour: HourDetail) -> RawHour {
        RawHour {
            time: hour.time,
            temp_c: hour.temp_c,
            condition_text: hour.condition.text,
            rain_chance: hour.chance_of_rain,
        }
    }

    fn map_day(day: ForecastDay) -> RawForecastDay {
        RawForecastDay {
            date: day.date,
            condition_text: day.day.condition.text,
            max_temp_c: day.day.maxtemp_c,
            min_temp_c: day.day.mintemp_c,
            max_wind_kph: day.day.maxwind_kph,
            avg_humidity: day.day.avghumidity,
            rain_chance: day.day.daily_chance_of_rain,
            uv: day.day.uv,
            hours: day.hour.into_iter().map(Self::map_hour).collect(),
        }
    }

    fn map_response(response: ForecastResponse) -> RawForecast {
        RawForecast {
            current: Self::map_current(response.current),
            days: response
                .forecast
                .forecast_days
                .into_iter()
                .map(Self::map_day)
                .collect(),
        }
    }
}

#[async_trait]
impl ForecastProvider for WeatherApiAdapter {
    fn is_configured(&self) -> bool {
        self.client.has_api_key()
    }

    #[instrument(skip(self), fields(location = %location, days = %days))]
    async fn fetch_raw(
        &self,
        location: &str,
        days: u8,
    ) -> Result<RawForecast, ApplicationError> {
        let response = self
            .client
            .fetch_forecast(location, days)
            .await
            .map_err(Self::map_error)?;

        Ok(Self::map_response(response))
    }
}
