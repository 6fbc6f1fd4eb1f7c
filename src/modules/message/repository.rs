use uuid::Uuid;

use crate::{
    api::error,
    modules::message::{
        model::{InsertMessage, UpdateMessage},
        schema::MessageEntity,
    },
};

#[async_trait::async_trait]
pub trait MessageRepository {
    async fn create(&self, message: &InsertMessage) -> Result<MessageEntity, error::SystemError>;

    /// Every message, `created_at` descending.
    async fn find_all_newest_first(&self) -> Result<Vec<MessageEntity>, error::SystemError>;

    /// Merge `changes` into the row. Fails with `NotFound` for an unknown id.
    async fn update(&self, id: &Uuid, changes: &UpdateMessage) -> Result<(), error::SystemError>;
}
