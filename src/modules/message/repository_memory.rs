use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    api::error,
    modules::message::{
        model::{InsertMessage, UpdateMessage},
        repository::MessageRepository,
        schema::{MessageEntity, MessageStatus},
    },
};

/// Process-local store. Rows live as long as the value does.
#[derive(Default)]
pub struct InMemoryMessageRepository {
    rows: RwLock<Vec<MessageEntity>>,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn find_by_id(&self, id: &Uuid) -> Option<MessageEntity> {
        self.rows.read().await.iter().find(|m| m.id == *id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn create(&self, message: &InsertMessage) -> Result<MessageEntity, error::SystemError> {
        let entity = MessageEntity {
            id: Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext)),
            parent_name: message.parent_name.clone(),
            parent_email: message.parent_email.clone(),
            child_age: message.child_age,
            message: message.message.clone(),
            status: MessageStatus::New,
            reply: None,
            created_at: chrono::Utc::now(),
            replied_at: None,
        };
        self.rows.write().await.push(entity.clone());
        Ok(entity)
    }

    async fn find_all_newest_first(&self) -> Result<Vec<MessageEntity>, error::SystemError> {
        let mut messages = self.rows.read().await.clone();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(messages)
    }

    async fn update(&self, id: &Uuid, changes: &UpdateMessage) -> Result<(), error::SystemError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|m| m.id == *id)
            .ok_or_else(|| error::SystemError::not_found("Message not found"))?;
        changes.apply_to(row);
        Ok(())
    }
}
