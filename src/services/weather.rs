use std::time::Duration;

use reqwest::Client;
use tracing::{debug, error};

use crate::core::{cities, forecast::ForecastResponse};
use crate::error::{PlannerError, Result};

const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1";
const DAILY_FIELDS: &str = "weathercode,temperature_2m_max,temperature_2m_min,precipitation_sum";
const FORECAST_DAYS: u32 = 14;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Open-Meteo forecast endpoint
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the 14-day forecast for a registry city.
    ///
    /// An unregistered city is rejected before any request is made. Upstream
    /// failures of any kind map to [`PlannerError::FetchFailed`]; the status
    /// or transport detail goes to the log, not to the caller.
    pub async fn forecast(&self, city_name: &str) -> Result<ForecastResponse> {
        let city = cities::find(city_name).ok_or(PlannerError::CityNotFound)?;

        debug!(city = city.name, "requesting forecast");

        let url = format!("{}/forecast", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .query(&[
                ("latitude", city.latitude.to_string()),
                ("longitude", city.longitude.to_string()),
                ("timezone", city.timezone.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("forecast_days", FORECAST_DAYS.to_string()),
                ("current_weather", "true".to_string()),
                ("temperature_unit", "celsius".to_string()),
            ])
            .send()
            .await
            .map_err(|err| {
                error!("Weather request failed: {err}");
                PlannerError::FetchFailed
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Failed to fetch weather data: {status}");
            return Err(PlannerError::FetchFailed);
        }

        response.json::<ForecastResponse>().await.map_err(|err| {
            error!("Failed to decode weather response: {err}");
            PlannerError::FetchFailed
        })
    }
}
