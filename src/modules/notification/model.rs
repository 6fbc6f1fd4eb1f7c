use serde::{Deserialize, Serialize};

use crate::modules::message::model::InsertMessage;

/// What the form sends to the notification function. Every field is optional on the way in:
/// a missing field renders as empty text rather than rejecting the call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationPayload {
    pub parent_name: Option<String>,
    pub parent_email: Option<String>,
    pub child_age: Option<i32>,
    pub message: Option<String>,
}

impl From<&InsertMessage> for NotificationPayload {
    fn from(message: &InsertMessage) -> Self {
        NotificationPayload {
            parent_name: Some(message.parent_name.clone()),
            parent_email: Some(message.parent_email.clone()),
            child_age: Some(message.child_age),
            message: Some(message.message.clone()),
        }
    }
}

/// Request body of the email provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Deserialize)]
pub struct ProviderResponse {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailResponse {
    pub success: bool,
    pub message_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FunctionErrorBody {
    pub error: String,
}
