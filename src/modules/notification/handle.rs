use actix_web::{web, HttpResponse};

use crate::modules::notification::{
    error::FunctionError,
    mailer::Mailer,
    model::{NotificationPayload, SendEmailResponse},
};

async fn deliver<M: Mailer>(mailer: &M, body: &[u8]) -> Result<String, FunctionError> {
    let payload: NotificationPayload = serde_json::from_slice(body)?;
    mailer.send_notification(&payload).await
}

/// Emails the operator about a new message. Answers `200 {success, messageId}` or
/// `500 {error}`.
pub async fn send_message_email<M>(
    mailer: web::Data<M>,
    body: web::Bytes,
) -> Result<HttpResponse, FunctionError>
where
    M: Mailer + Send + Sync + 'static,
{
    match deliver(mailer.get_ref(), &body).await {
        Ok(message_id) => {
            Ok(HttpResponse::Ok().json(SendEmailResponse { success: true, message_id }))
        }
        Err(e) => {
            log::error!("Error sending email: {}", e);
            Err(e)
        }
    }
}

/// Cross-origin preflight. The CORS headers come from the scope's default headers.
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}
