use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::modules::notification::model::FunctionErrorBody;

/// Failures of the notification function. All of them answer 500 with `{error}`.
#[derive(thiserror::Error, Debug)]
pub enum FunctionError {
    #[error("Invalid request body: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    #[error("RESEND_API_KEY is not configured")]
    MissingApiKey,
    #[error("NOTIFY_TO is not configured")]
    MissingRecipient,
    #[error("Resend API error: {0}")]
    Provider(String),
    #[error("Failed to send email: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ResponseError for FunctionError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(FunctionErrorBody { error: self.to_string() })
    }
}
