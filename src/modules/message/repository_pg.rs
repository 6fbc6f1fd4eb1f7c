use uuid::Uuid;

use crate::{
    api::error,
    modules::message::{
        model::{InsertMessage, UpdateMessage},
        repository::MessageRepository,
        schema::MessageEntity,
    },
};

#[derive(Clone)]
pub struct MessageRepositoryPg {
    pool: sqlx::PgPool,
}

impl MessageRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl MessageRepository for MessageRepositoryPg {
    async fn create(&self, message: &InsertMessage) -> Result<MessageEntity, error::SystemError> {
        let id = Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext));
        let message = sqlx::query_as::<_, MessageEntity>(
            "INSERT INTO messages (id, parent_name, parent_email, child_age, message) VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(id)
        .bind(&message.parent_name)
        .bind(&message.parent_email)
        .bind(message.child_age)
        .bind(&message.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    async fn find_all_newest_first(&self) -> Result<Vec<MessageEntity>, error::SystemError> {
        // has index on (created_at DESC)
        let messages =
            sqlx::query_as::<_, MessageEntity>("SELECT * FROM messages ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(messages)
    }

    async fn update(&self, id: &Uuid, changes: &UpdateMessage) -> Result<(), error::SystemError> {
        let rows = sqlx::query(
            r#"
        UPDATE messages
        SET
            status     = COALESCE($2, status),
            reply      = CASE WHEN $3::boolean THEN $4 ELSE reply END,
            replied_at = CASE WHEN $5::boolean THEN $6 ELSE replied_at END
        WHERE id = $1
        "#,
        )
        .bind(id)
        .bind(changes.status) // $2: Option<MessageStatus>
        .bind(changes.reply.is_some()) // $3: bool - was reply provided?
        .bind(changes.reply.as_ref().and_then(|v| v.as_ref())) // $4: Option<&String>
        .bind(changes.replied_at.is_some()) // $5: bool - was replied_at provided?
        .bind(changes.replied_at.flatten()) // $6: Option<DateTime<Utc>>
        .execute(&self.pool)
        .await?
        .rows_affected();

        if rows == 0 {
            return Err(error::SystemError::not_found("Message not found"));
        }
        Ok(())
    }
}
