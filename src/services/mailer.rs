use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PlannerError, Result};

const DEFAULT_BASE_URL: &str = "https://api.resend.com";
const SENDER: &str = "Emeka from Dome Academy <emeka@domeinitiative.com>";
const REPLY_TO: &str = "info@domeinitiative.com";

/// A single outgoing email in the shape the Resend API expects
#[derive(Debug, Clone, Serialize)]
pub struct Email {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub reply_to: String,
}

impl Email {
    /// Build the invitation email for one recipient. Sender and reply-to
    /// are fixed addresses owned by the event team.
    pub fn invitation(recipient: &str, event_name: &str, html_body: &str) -> Self {
        Self {
            from: SENDER.to_string(),
            to: vec![recipient.to_string()],
            subject: format!("Invitation to {event_name}"),
            html: html_body.to_string(),
            reply_to: REPLY_TO.to_string(),
        }
    }
}

/// Transport that can deliver a single email
#[async_trait]
pub trait Mailer: Send + Sync + std::fmt::Debug {
    /// Deliver one email, returning the provider's message id
    async fn send(&self, email: &Email) -> Result<String>;
}

/// Resend API configuration, resolved once at startup
#[derive(Debug, Clone)]
pub struct MailerConfig {
    pub api_key: String,
}

impl MailerConfig {
    /// Build the configuration from the `RESEND_API_KEY` environment variable
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("RESEND_API_KEY")
            .map_err(|_| PlannerError::Config("Missing RESEND_API_KEY env var".to_string()))?;
        if api_key.trim().is_empty() {
            return Err(PlannerError::Config("RESEND_API_KEY is empty".to_string()));
        }
        Ok(Self { api_key })
    }
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Mailer backed by the Resend transactional email API
#[derive(Debug, Clone)]
pub struct ResendMailer {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ResendMailer {
    pub fn new(config: MailerConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the mailer at a different endpoint (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &Email) -> Result<String> {
        let url = format!("{}/emails", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await
            .map_err(|err| PlannerError::SendFailed(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let sent: SendResponse = response
                .json()
                .await
                .map_err(|err| PlannerError::SendFailed(err.to_string()))?;
            debug!(id = %sent.id, "email accepted");
            return Ok(sent.id);
        }

        let message = response
            .json::<ApiErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| format!("HTTP {status}"));
        Err(PlannerError::SendFailed(message))
    }
}
