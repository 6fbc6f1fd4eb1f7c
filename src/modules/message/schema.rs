use serde::{Deserialize, Serialize};
use sqlx::prelude::{FromRow, Type};
use uuid::Uuid;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Type, Serialize, Deserialize)]
#[sqlx(type_name = "message_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    New,
    Replied,
    Archived,
}

impl MessageStatus {
    pub const ALL: [MessageStatus; 3] =
        [MessageStatus::New, MessageStatus::Replied, MessageStatus::Archived];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::New => "new",
            MessageStatus::Replied => "replied",
            MessageStatus::Archived => "archived",
        }
    }
}

impl std::fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct MessageEntity {
    pub id: Uuid,
    pub parent_name: String,
    pub parent_email: String,
    pub child_age: i32,
    pub message: String,
    pub status: MessageStatus,
    pub reply: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub replied_at: Option<chrono::DateTime<chrono::Utc>>,
}
