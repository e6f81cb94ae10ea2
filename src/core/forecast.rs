use serde::Deserialize;

/// Current conditions block of an Open-Meteo forecast response
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
    pub winddirection: f64,
    pub weathercode: i64,
}

/// Daily aggregate block of an Open-Meteo forecast response.
/// The arrays are index-aligned by the upstream contract; readers must not
/// assume equal lengths.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyForecast {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub weathercode: Vec<i64>,
    #[serde(default)]
    pub temperature_2m_max: Vec<f64>,
    #[serde(default)]
    pub temperature_2m_min: Vec<f64>,
    #[serde(default)]
    pub precipitation_sum: Vec<f64>,
}

/// One day of the forecast, read across the parallel arrays
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayConditions {
    pub weathercode: i64,
    pub max_temp: f64,
    pub min_temp: f64,
    pub precipitation: f64,
}

impl DailyForecast {
    /// Find a day by its exact date string as emitted upstream (YYYY-MM-DD).
    /// Returns `None` when the date is absent or an array is too short at
    /// the matched index.
    pub fn day(&self, date: &str) -> Option<DayConditions> {
        let index = self.time.iter().position(|d| d == date)?;
        Some(DayConditions {
            weathercode: *self.weathercode.get(index)?,
            max_temp: *self.temperature_2m_max.get(index)?,
            min_temp: *self.temperature_2m_min.get(index)?,
            precipitation: *self.precipitation_sum.get(index)?,
        })
    }
}

/// Forecast payload decoded from the Open-Meteo forecast endpoint.
/// Fields this service does not read are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub current_weather: Option<CurrentWeather>,
    #[serde(default)]
    pub daily: Option<DailyForecast>,
}
