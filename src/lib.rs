//! events-planner-rs: event-planning tools served over a stdio JSON-RPC interface
//!
//! This crate exposes four callable tools to an agent caller: current weather,
//! weekly forecast, and weather-by-date for a fixed set of cities (backed by
//! the Open-Meteo forecast API), plus an event-invitation tool backed by the
//! Resend email API. Tools return a JSON object on success and an
//! `{"error": "..."}` object on failure, so callers always receive a
//! well-formed payload.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use events_planner_rs::tools::CurrentWeatherTool;
//! use events_planner_rs::{FunctionFactory, PlannerServer, WeatherClient};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let mut factory = FunctionFactory::new();
//!     factory.register_tool(CurrentWeatherTool::new(WeatherClient::new()));
//!
//!     PlannerServer::new(factory).run().await
//! }
//! ```

pub mod core;
pub mod error;
pub mod schemas;
pub mod server;
pub mod services;
pub mod tools;

pub use error::{PlannerError, Result};
pub use server::PlannerServer;
pub use services::mailer::{Email, Mailer, MailerConfig, ResendMailer};
pub use services::weather::WeatherClient;
pub use tools::{FunctionFactory, Tool};
