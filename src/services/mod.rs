//! External collaborators: the Open-Meteo client and the Resend mailer

pub mod mailer;
pub mod weather;

pub use mailer::{Email, Mailer, MailerConfig, ResendMailer};
pub use weather::WeatherClient;
