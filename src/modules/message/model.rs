use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::modules::message::schema::{MessageEntity, MessageStatus};
use crate::utils::double_option;

/// Body accepted by the store's insert endpoint. Only the NOT NULL columns are checked here;
/// email shape and age range belong to the submission form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMessageModel {
    #[validate(length(min = 1, message = "Parent name cannot be empty"))]
    pub parent_name: String,
    #[validate(length(min = 1, message = "Parent email cannot be empty"))]
    pub parent_email: String,
    pub child_age: i32,
    #[validate(length(min = 1, message = "Message cannot be empty"))]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertMessage {
    pub parent_name: String,
    pub parent_email: String,
    pub child_age: i32,
    pub message: String,
}

impl From<CreateMessageModel> for InsertMessage {
    fn from(model: CreateMessageModel) -> Self {
        InsertMessage {
            parent_name: model.parent_name,
            parent_email: model.parent_email,
            child_age: model.child_age,
            message: model.message,
        }
    }
}

impl From<&InsertMessage> for CreateMessageModel {
    fn from(message: &InsertMessage) -> Self {
        CreateMessageModel {
            parent_name: message.parent_name.clone(),
            parent_email: message.parent_email.clone(),
            child_age: message.child_age,
            message: message.message.clone(),
        }
    }
}

/// Partial update. `None` leaves a column alone; `Some(None)` writes NULL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MessageStatus>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub reply: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub replied_at: Option<Option<DateTime<Utc>>>,
}

impl UpdateMessage {
    pub fn status(status: MessageStatus) -> Self {
        UpdateMessage { status: Some(status), ..Default::default() }
    }

    /// What the reply action writes: the text, `replied` and the reply time.
    pub fn reply(text: impl Into<String>, at: DateTime<Utc>) -> Self {
        UpdateMessage {
            status: Some(MessageStatus::Replied),
            reply: Some(Some(text.into())),
            replied_at: Some(Some(at)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.reply.is_none() && self.replied_at.is_none()
    }

    /// `replied_at` is only ever moved forward by a reply.
    pub fn clears_replied_at(&self) -> bool {
        matches!(self.replied_at, Some(None))
    }

    pub fn apply_to(&self, message: &mut MessageEntity) {
        if let Some(status) = self.status {
            message.status = status;
        }
        if let Some(reply) = &self.reply {
            message.reply = reply.clone();
        }
        if let Some(replied_at) = self.replied_at {
            message.replied_at = replied_at;
        }
    }
}
