//! Reminder endpoint client

use super::{ProviderFuture, ReminderSender};
use crate::error::ReminderError;
use crate::types::ReminderRequest;
use reqwest::Client;
use serde::Deserialize;

/// Posts reminder batches to `<base>/api/sendEmail`.
#[derive(Clone)]
pub struct HttpReminderSender {
    client: Client,
    endpoint: String,
}

#[derive(Deserialize)]
struct RejectionBody {
    message: Option<String>,
}

impl HttpReminderSender {
    /// Create a sender for the site hosted at `base_url`
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}/api/sendEmail", base_url.trim_end_matches('/')),
        }
    }

    async fn post(&self, request: ReminderRequest) -> Result<(), ReminderError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| ReminderError::Request(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response
            .text()
            .await
            .map_err(|e| ReminderError::Malformed {
                status: status.as_u16(),
                reason: e.to_string(),
            })?;
        let rejection = serde_json::from_str::<RejectionBody>(&body).map_err(|e| {
            ReminderError::Malformed {
                status: status.as_u16(),
                reason: e.to_string(),
            }
        })?;

        Err(ReminderError::Rejected {
            status: status.as_u16(),
            message: rejection.message.unwrap_or_default(),
        })
    }
}

impl ReminderSender for HttpReminderSender {
    fn send_reminders(&self, request: ReminderRequest) -> ProviderFuture<'_, (), ReminderError> {
        Box::pin(self.post(request))
    }
}
