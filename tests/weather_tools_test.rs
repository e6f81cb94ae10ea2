use events_planner_rs::tools::{CurrentWeatherTool, WeatherByDateTool, WeeklyForecastTool};
use events_planner_rs::{PlannerError, Tool, WeatherClient};
use mockito::Matcher;
use serde_json::json;

fn forecast_body() -> serde_json::Value {
    json!({
        "latitude": 6.5,
        "longitude": 3.375,
        "timezone": "Africa/Lagos",
        "current_weather": {
            "temperature": 27.5,
            "windspeed": 10.0,
            "winddirection": 180.0,
            "weathercode": 3,
            "time": "2026-08-21T12:00"
        },
        "daily": {
            "time": ["2026-08-21", "2026-08-22", "2026-08-23"],
            "weathercode": [0, 95, 42],
            "temperature_2m_max": [31.0, 28.4, 27.9],
            "temperature_2m_min": [23.2, 21.5, 21.1],
            "precipitation_sum": [0.0, 4.2, 12.8]
        }
    })
}

#[tokio::test]
async fn current_weather_sends_documented_query_and_maps_conditions() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/forecast")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("latitude".into(), "6.5244".into()),
            Matcher::UrlEncoded("longitude".into(), "3.3792".into()),
            Matcher::UrlEncoded("timezone".into(), "Africa/Lagos".into()),
            Matcher::UrlEncoded(
                "daily".into(),
                "weathercode,temperature_2m_max,temperature_2m_min,precipitation_sum".into(),
            ),
            Matcher::UrlEncoded("forecast_days".into(), "14".into()),
            Matcher::UrlEncoded("current_weather".into(), "true".into()),
            Matcher::UrlEncoded("temperature_unit".into(), "celsius".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(forecast_body().to_string())
        .create_async()
        .await;

    let tool = CurrentWeatherTool::new(WeatherClient::new().with_base_url(server.url()));
    let result = tool.execute(json!({ "city": "Lagos" })).await.unwrap();

    assert_eq!(
        result,
        json!({
            "temperature": 27.5,
            "windspeed": 10.0,
            "winddirection": 180.0,
            "weathercode": "Overcast"
        })
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn unknown_city_is_rejected_without_calling_upstream() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/forecast")
        .expect(0)
        .create_async()
        .await;

    let tool = CurrentWeatherTool::new(WeatherClient::new().with_base_url(server.url()));
    let err = tool.execute(json!({ "city": "Paris" })).await.unwrap_err();

    assert!(matches!(err, PlannerError::CityNotFound));
    assert_eq!(err.to_error_payload(), json!({ "error": "City not found" }));
    mock.assert_async().await;
}

#[tokio::test]
async fn upstream_error_maps_to_fetch_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/forecast")
        .with_status(500)
        .create_async()
        .await;

    let tool = CurrentWeatherTool::new(WeatherClient::new().with_base_url(server.url()));
    let err = tool.execute(json!({ "city": "Enugu" })).await.unwrap_err();

    assert!(matches!(err, PlannerError::FetchFailed));
    assert_eq!(
        err.to_error_payload(),
        json!({ "error": "Failed to fetch weather data" })
    );
}

#[tokio::test]
async fn missing_current_weather_section_is_reported() {
    let mut body = forecast_body();
    body.as_object_mut().unwrap().remove("current_weather");

    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/forecast")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let tool = CurrentWeatherTool::new(WeatherClient::new().with_base_url(server.url()));
    let err = tool.execute(json!({ "city": "Abuja" })).await.unwrap_err();

    assert!(matches!(err, PlannerError::MissingCurrentWeather));
    assert_eq!(
        err.to_error_payload(),
        json!({ "error": "No current weather data available" })
    );
}

#[tokio::test]
async fn weekly_forecast_lists_dates_and_descriptions_in_step() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/forecast")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(forecast_body().to_string())
        .create_async()
        .await;

    let tool = WeeklyForecastTool::new(WeatherClient::new().with_base_url(server.url()));
    let result = tool.execute(json!({ "city": "Lagos" })).await.unwrap();

    assert_eq!(
        result,
        json!({
            "dates": ["2026-08-21", "2026-08-22", "2026-08-23"],
            "weathercodes": ["Clear sky", "Thunderstorm slight or moderate", "Unknown"]
        })
    );
    assert_eq!(
        result["dates"].as_array().unwrap().len(),
        result["weathercodes"].as_array().unwrap().len()
    );
}

#[tokio::test]
async fn weekly_forecast_without_daily_section_is_reported() {
    let mut body = forecast_body();
    body.as_object_mut().unwrap().remove("daily");

    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/forecast")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let tool = WeeklyForecastTool::new(WeatherClient::new().with_base_url(server.url()));
    let err = tool.execute(json!({ "city": "Enugu" })).await.unwrap_err();

    assert!(matches!(err, PlannerError::MissingDailyForecast));
    assert_eq!(
        err.to_error_payload(),
        json!({ "error": "No daily forecast data available" })
    );
}

#[tokio::test]
async fn weather_by_date_returns_the_matched_day() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/forecast")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(forecast_body().to_string())
        .create_async()
        .await;

    let tool = WeatherByDateTool::new(WeatherClient::new().with_base_url(server.url()));
    let result = tool
        .execute(json!({ "city": "Port Harcourt", "date": "2026-08-22" }))
        .await
        .unwrap();

    assert_eq!(
        result,
        json!({
            "date": "2026-08-22",
            "weathercode": "Thunderstorm slight or moderate",
            "max_temp": 28.4,
            "min_temp": 21.5,
            "precipitation": 4.2
        })
    );
}

#[tokio::test]
async fn weather_by_date_misses_on_absent_date() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/forecast")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(forecast_body().to_string())
        .create_async()
        .await;

    let tool = WeatherByDateTool::new(WeatherClient::new().with_base_url(server.url()));
    let err = tool
        .execute(json!({ "city": "Lagos", "date": "2026-12-25" }))
        .await
        .unwrap_err();

    assert!(matches!(err, PlannerError::DateNotFound));
    assert_eq!(
        err.to_error_payload(),
        json!({ "error": "Date not found in forecast" })
    );
}
