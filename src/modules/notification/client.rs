use reqwest::Client;

use crate::{
    api::error,
    constants::{ClientConfig, NOTIFICATION_FUNCTION_PATH},
    modules::notification::model::{FunctionErrorBody, NotificationPayload, SendEmailResponse},
};

/// Caller side of the notification function.
#[async_trait::async_trait]
pub trait Notifier {
    /// Returns the provider message id on success.
    async fn notify(&self, payload: &NotificationPayload) -> Result<String, error::SystemError>;
}

#[derive(Clone)]
pub struct FunctionNotifier {
    http_client: Client,
    config: ClientConfig,
}

impl FunctionNotifier {
    pub fn new(config: ClientConfig) -> Self {
        Self { http_client: Client::new(), config }
    }
}

#[async_trait::async_trait]
impl Notifier for FunctionNotifier {
    async fn notify(&self, payload: &NotificationPayload) -> Result<String, error::SystemError> {
        let response = self
            .http_client
            .post(self.config.url(NOTIFICATION_FUNCTION_PATH))
            .bearer_auth(&self.config.anon_key)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let body = serde_json::from_str::<FunctionErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            return Err(error::SystemError::Upstream { status: status.as_u16(), body });
        }

        let sent: SendEmailResponse = serde_json::from_str(&body)?;
        Ok(sent.message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        middlewares::AccessPolicy,
        modules::notification::{
            mailer::{ResendConfig, ResendMailer},
            route,
        },
        test::{spawn_server, FakeMailer},
    };
    use actix_web::web;

    fn payload() -> NotificationPayload {
        NotificationPayload {
            parent_name: Some("Jane Doe".into()),
            parent_email: Some("jane@example.com".into()),
            child_age: Some(7),
            message: Some("Loves dinosaurs".into()),
        }
    }

    #[actix_web::test]
    async fn test_notify_posts_payload_to_function() {
        let mailer = web::Data::new(FakeMailer::default());
        let data = mailer.clone();
        let base = spawn_server(move |cfg| {
            cfg.app_data(web::Data::new(AccessPolicy::new("anon")))
                .app_data(data.clone())
                .configure(route::configure::<FakeMailer>);
        });

        let notifier = FunctionNotifier::new(ClientConfig::new(base, "anon"));
        let id = notifier.notify(&payload()).await.unwrap();

        assert_eq!(id, "fake-1");
        assert_eq!(mailer.sent(), vec![payload()]);
    }

    #[actix_web::test]
    async fn test_function_failure_is_reported() {
        let mailer = web::Data::new(ResendMailer::new(ResendConfig::default()));
        let data = mailer.clone();
        let base = spawn_server(move |cfg| {
            cfg.app_data(web::Data::new(AccessPolicy::new("anon")))
                .app_data(data.clone())
                .configure(route::configure::<ResendMailer>);
        });

        let notifier = FunctionNotifier::new(ClientConfig::new(base, "anon"));
        let err = notifier.notify(&payload()).await.unwrap_err();
        match err {
            error::SystemError::Upstream { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "RESEND_API_KEY is not configured");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
