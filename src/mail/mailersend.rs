//! MailerSend API client
//!
//! Sends one email per call through `POST /v1/email`. No retries: a failed
//! send is reported to the caller as-is.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use tracing::info;

use super::email::OutboundEmail;
use super::sender::EmailSender;
use crate::core::config::AppConfig;
use crate::errors::ContactError;

static HTTP_CLIENT: Lazy<Client> = Lazy::new(Client::new);

pub struct MailerSendClient {
    api_key: Option<String>,
    base_url: String,
}

impl MailerSendClient {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.mailersend_api_key.clone(),
            config.mailersend_api_url.clone(),
        )
    }

    fn email_endpoint(&self) -> String {
        format!("{}/v1/email", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl EmailSender for MailerSendClient {
    async fn send(&self, email: &OutboundEmail) -> Result<(), ContactError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ContactError::Config("MAILERSEND_API_KEY is not set".to_string()))?;

        info!(
            to = ?email.recipients(),
            subject = %email.subject,
            "Sending email via MailerSend"
        );

        let response = HTTP_CLIENT
            .post(self.email_endpoint())
            .bearer_auth(api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ContactError::Api {
                status: status.as_u16(),
                body,
            });
        }

        info!(status = status.as_u16(), "MailerSend accepted email");
        Ok(())
    }
}
