use actix_web::{get, patch, post, web};
use uuid::Uuid;

use crate::{
    api::{error, success},
    modules::message::{
        model::{CreateMessageModel, UpdateMessage},
        schema::MessageEntity,
        service::MessageService,
    },
    utils::ValidatedJson,
};

#[post("")]
pub async fn create_message(
    message_service: web::Data<MessageService>,
    body: ValidatedJson<CreateMessageModel>,
) -> Result<success::Success<MessageEntity>, error::Error> {
    let message = message_service.create(body.0.into()).await?;
    Ok(success::Success::created(Some(message)).message("Message created successfully"))
}

#[get("")]
pub async fn list_messages(
    message_service: web::Data<MessageService>,
) -> Result<success::Success<Vec<MessageEntity>>, error::Error> {
    let messages = message_service.list_newest_first().await?;
    Ok(success::Success::ok(Some(messages)).message("Messages retrieved successfully"))
}

#[patch("/{id:[0-9a-fA-F-]{36}}")]
pub async fn update_message(
    message_service: web::Data<MessageService>,
    message_id: web::Path<Uuid>,
    body: web::Json<UpdateMessage>,
) -> Result<success::Success<()>, error::Error> {
    message_service.update(message_id.into_inner(), body.into_inner()).await?;
    Ok(success::Success::ok(None).message("Message updated successfully"))
}
