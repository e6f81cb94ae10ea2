use super::Tool;
use crate::core::codes;
use crate::schemas::validator;
use crate::services::weather::WeatherClient;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

/// Parameters for the tools that take only a city
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CityParams {
    /// Registry city name (e.g. "Lagos")
    pub city: String,
}

/// Parameters for the by-date lookup
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CityDateParams {
    pub city: String,
    /// Date within the forecast horizon, formatted YYYY-MM-DD
    pub date: String,
}

fn city_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "city": {
                "type": "string",
                "description": "City name, one of Enugu, Lagos, Abuja, Port Harcourt"
            }
        },
        "required": ["city"]
    })
}

/// Tool returning current conditions for a registry city
#[derive(Debug, Clone)]
pub struct CurrentWeatherTool {
    client: WeatherClient,
}

impl CurrentWeatherTool {
    pub fn new(client: WeatherClient) -> Self {
        Self { client }
    }
}

impl Tool for CurrentWeatherTool {
    fn name(&self) -> &'static str {
        "get_current_weather"
    }

    fn description(&self) -> &'static str {
        "Get the current weather for a specified city"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        city_schema()
    }

    fn execute(
        &self,
        parameters: serde_json::Value,
    ) -> Pin<
        Box<
            dyn std::future::Future<Output = Result<serde_json::Value, crate::PlannerError>>
                + Send
                + '_,
        >,
    > {
        let client = self.client.clone();

        Box::pin(async move {
            let params: CityParams = validator::deserialize_params(parameters)?;
            let forecast = client.forecast(&params.city).await?;

            let current = forecast
                .current_weather
                .ok_or(crate::PlannerError::MissingCurrentWeather)?;

            Ok(serde_json::json!({
                "temperature": current.temperature,
                "windspeed": current.windspeed,
                "winddirection": current.winddirection,
                "weathercode": codes::description(current.weathercode)
            }))
        })
    }
}

/// Tool returning the 14-day forecast as parallel date and description lists
#[derive(Debug, Clone)]
pub struct WeeklyForecastTool {
    client: WeatherClient,
}

impl WeeklyForecastTool {
    pub fn new(client: WeatherClient) -> Self {
        Self { client }
    }
}

impl Tool for WeeklyForecastTool {
    fn name(&self) -> &'static str {
        "get_weekly_forecast"
    }

    fn description(&self) -> &'static str {
        "Get the weekly weather forecast for a specified city"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        city_schema()
    }

    fn execute(
        &self,
        parameters: serde_json::Value,
    ) -> Pin<
        Box<
            dyn std::future::Future<Output = Result<serde_json::Value, crate::PlannerError>>
                + Send
                + '_,
        >,
    > {
        let client = self.client.clone();

        Box::pin(async move {
            let params: CityParams = validator::deserialize_params(parameters)?;
            let forecast = client.forecast(&params.city).await?;

            let daily = forecast
                .daily
                .ok_or(crate::PlannerError::MissingDailyForecast)?;

            let weathercodes: Vec<&str> = daily
                .weathercode
                .iter()
                .map(|&code| codes::description(code))
                .collect();

            Ok(serde_json::json!({
                "dates": daily.time,
                "weathercodes": weathercodes
            }))
        })
    }
}

/// Tool returning one forecast day looked up by exact date
#[derive(Debug, Clone)]
pub struct WeatherByDateTool {
    client: WeatherClient,
}

impl WeatherByDateTool {
    pub fn new(client: WeatherClient) -> Self {
        Self { client }
    }
}

impl Tool for WeatherByDateTool {
    fn name(&self) -> &'static str {
        "get_weather_by_date"
    }

    fn description(&self) -> &'static str {
        "Get the weather for a specific date in a specified city"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "City name, one of Enugu, Lagos, Abuja, Port Harcourt"
                },
                "date": {
                    "type": "string",
                    "description": "Date within the forecast horizon, formatted YYYY-MM-DD"
                }
            },
            "required": ["city", "date"]
        })
    }

    fn execute(
        &self,
        parameters: serde_json::Value,
    ) -> Pin<
        Box<
            dyn std::future::Future<Output = Result<serde_json::Value, crate::PlannerError>>
                + Send
                + '_,
        >,
    > {
        let client = self.client.clone();

        Box::pin(async move {
            let params: CityDateParams = validator::deserialize_params(parameters)?;
            let forecast = client.forecast(&params.city).await?;

            let daily = forecast
                .daily
                .ok_or(crate::PlannerError::MissingDailyForecast)?;

            let day = daily
                .day(&params.date)
                .ok_or(crate::PlannerError::DateNotFound)?;

            Ok(serde_json::json!({
                "date": params.date,
                "weathercode": codes::description(day.weathercode),
                "max_temp": day.max_temp,
                "min_temp": day.min_temp,
                "precipitation": day.precipitation
            }))
        })
    }
}
