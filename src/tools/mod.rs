//! Tools module containing tool abstractions and the planner tools

pub mod function_factory;
pub mod invite;
pub mod tool;
pub mod weather;

pub use function_factory::FunctionFactory;
pub use invite::InvitePeopleTool;
pub use tool::{Tool, ToolRegistry};
pub use weather::{CurrentWeatherTool, WeatherByDateTool, WeeklyForecastTool};
