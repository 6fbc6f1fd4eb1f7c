use log::info;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::error;
use crate::modules::message::{
    model::{InsertMessage, UpdateMessage},
    repository::MessageRepository,
    schema::MessageEntity,
};

#[derive(Clone)]
pub struct MessageService {
    repo: Arc<dyn MessageRepository + Send + Sync>,
}

impl MessageService {
    pub fn with_dependencies(repo: Arc<dyn MessageRepository + Send + Sync>) -> Self {
        info!("MessageService initialized with dependencies");
        MessageService { repo }
    }

    pub async fn create(&self, message: InsertMessage) -> Result<MessageEntity, error::SystemError> {
        let created = self.repo.create(&message).await?;
        info!("Message {} stored (child age {})", created.id, created.child_age);
        Ok(created)
    }

    pub async fn list_newest_first(&self) -> Result<Vec<MessageEntity>, error::SystemError> {
        self.repo.find_all_newest_first().await
    }

    pub async fn update(&self, id: Uuid, changes: UpdateMessage) -> Result<(), error::SystemError> {
        if changes.is_empty() {
            return Err(error::SystemError::bad_request("No fields to update"));
        }
        if changes.clears_replied_at() {
            return Err(error::SystemError::bad_request("replied_at cannot be cleared"));
        }

        self.repo.update(&id, &changes).await?;
        info!("Message {} updated", id);
        Ok(())
    }
}
