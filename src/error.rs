use thiserror::Error;

/// Main error type for the planner tools
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("City not found")]
    CityNotFound,

    #[error("Failed to fetch weather data")]
    FetchFailed,

    #[error("No current weather data available")]
    MissingCurrentWeather,

    #[error("No daily forecast data available")]
    MissingDailyForecast,

    #[error("Date not found in forecast")]
    DateNotFound,

    #[error("No emails provided")]
    NoRecipients,

    #[error("Email send failed: {0}")]
    SendFailed(String),

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    /// Get the error code for log lines and structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::Config(_) => "CONFIG_ERROR",
            PlannerError::CityNotFound => "CITY_NOT_FOUND",
            PlannerError::FetchFailed => "FETCH_FAILED",
            PlannerError::MissingCurrentWeather => "NO_CURRENT_WEATHER",
            PlannerError::MissingDailyForecast => "NO_DAILY_FORECAST",
            PlannerError::DateNotFound => "DATE_NOT_FOUND",
            PlannerError::NoRecipients => "NO_RECIPIENTS",
            PlannerError::SendFailed(_) => "SEND_FAILED",
            PlannerError::InvalidParams(_) => "INVALID_PARAMS",
            PlannerError::ToolNotFound(_) => "TOOL_NOT_FOUND",
            PlannerError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Convert to the payload returned to callers in place of tool output.
    /// The message strings are part of the tool contract and stay stable.
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({ "error": self.to_string() })
    }
}
