pub mod cities;
pub mod codes;
pub mod forecast;

pub use cities::City;
pub use forecast::{CurrentWeather, DailyForecast, DayConditions, ForecastResponse};
