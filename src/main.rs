use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use events_planner_rs::tools::{
    CurrentWeatherTool, InvitePeopleTool, WeatherByDateTool, WeeklyForecastTool,
};
use events_planner_rs::{FunctionFactory, MailerConfig, PlannerServer, ResendMailer, WeatherClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries the protocol stream, so logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mailer = Arc::new(ResendMailer::new(MailerConfig::from_env()?));
    let weather = WeatherClient::new();

    let mut factory = FunctionFactory::new();
    factory.register_tool(CurrentWeatherTool::new(weather.clone()));
    factory.register_tool(WeeklyForecastTool::new(weather.clone()));
    factory.register_tool(WeatherByDateTool::new(weather));
    factory.register_tool(InvitePeopleTool::new(mailer));

    let server = PlannerServer::new(factory);
    let server = match std::env::var("EVENTS_PLANNER_SERVER_NAME") {
        Ok(name) => server.with_name(name),
        Err(_) => server,
    };

    server.run().await?;
    Ok(())
}
