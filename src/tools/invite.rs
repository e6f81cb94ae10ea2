use std::pin::Pin;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::Tool;
use crate::schemas::validator;
use crate::services::mailer::{Email, Mailer};

/// Parameters for sending event invitations
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct InviteParams {
    /// Recipient email addresses
    pub emails: Vec<String>,
    /// Name of the event, used in the subject line
    pub event_name: String,
    /// HTML body of the invitation
    pub html_body: String,
}

/// Tool that emails an event invitation to each recipient
#[derive(Debug, Clone)]
pub struct InvitePeopleTool {
    mailer: Arc<dyn Mailer>,
}

impl InvitePeopleTool {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }
}

impl Tool for InvitePeopleTool {
    fn name(&self) -> &'static str {
        "invite_people"
    }

    fn description(&self) -> &'static str {
        "Invite people to an event by email"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "emails": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Recipient email addresses"
                },
                "event_name": {
                    "type": "string",
                    "description": "Name of the event"
                },
                "html_body": {
                    "type": "string",
                    "description": "HTML body of the invitation"
                }
            },
            "required": ["emails", "event_name", "html_body"]
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
        let mailer = Arc::clone(&self.mailer);

        Box::pin(async move {
            let params: InviteParams = validator::deserialize_params(parameters)?;

            if params.emails.is_empty() {
                return Err(crate::PlannerError::NoRecipients);
            }

            for recipient in &params.emails {
                info!(recipient = %recipient, event = %params.event_name, "sending invitation");
                let email = Email::invitation(recipient, &params.event_name, &params.html_body);
                // A failed send is logged and skipped; the reply reports the
                // attempted count either way.
                if let Err(err) = mailer.send(&email).await {
                    error!("Failed to send invitation to {recipient}: {err}");
                }
            }

            Ok(serde_json::json!({
                "message": format!(
                    "Invitations sent for {} to {} people.",
                    params.event_name,
                    params.emails.len()
                ),
                "emails": params.emails
            }))
        })
    }
}
