use reqwest::Client;

use crate::constants::{DEFAULT_NOTIFY_FROM, DEFAULT_RESEND_API_URL};
use crate::modules::notification::{
    error::FunctionError,
    model::{NotificationPayload, OutgoingEmail, ProviderResponse},
    template::{render_html, render_subject},
};

/// Delivers the operator notification for one submitted message and returns the
/// provider's message id.
#[async_trait::async_trait]
pub trait Mailer {
    async fn send_notification(&self, payload: &NotificationPayload) -> Result<String, FunctionError>;
}

#[derive(Debug, Clone)]
pub struct ResendConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub from: String,
    pub to: Option<String>,
}

impl Default for ResendConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_RESEND_API_URL.to_string(),
            from: DEFAULT_NOTIFY_FROM.to_string(),
            to: None,
        }
    }
}

#[derive(Clone)]
pub struct ResendMailer {
    http_client: Client,
    config: ResendConfig,
}

impl ResendMailer {
    pub fn new(config: ResendConfig) -> Self {
        if config.api_key.is_none() {
            log::warn!("RESEND_API_KEY is not set, notification emails will fail");
        }
        Self { http_client: Client::new(), config }
    }

    pub fn build_email(&self, payload: &NotificationPayload) -> Result<OutgoingEmail, FunctionError> {
        let to = self.config.to.clone().ok_or(FunctionError::MissingRecipient)?;
        Ok(OutgoingEmail {
            from: self.config.from.clone(),
            to,
            subject: render_subject(payload),
            html: render_html(payload),
        })
    }
}

#[async_trait::async_trait]
impl Mailer for ResendMailer {
    async fn send_notification(&self, payload: &NotificationPayload) -> Result<String, FunctionError> {
        let api_key = self.config.api_key.as_deref().ok_or(FunctionError::MissingApiKey)?;
        let email = self.build_email(payload)?;

        let response = self
            .http_client
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&email)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(FunctionError::Provider(body));
        }

        let parsed: ProviderResponse = serde_json::from_str(&body)
            .map_err(|_| FunctionError::Provider(format!("unexpected response: {body}")))?;

        log::info!("Notification email sent ({}) to {}", parsed.id, email.to);
        Ok(parsed.id)
    }
}
