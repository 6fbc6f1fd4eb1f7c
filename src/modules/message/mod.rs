pub mod handle;
pub mod model;
pub mod repository;
pub mod repository_memory;
pub mod repository_pg;
pub mod repository_rest;
pub mod route;
pub mod schema;
pub mod service;

pub use model::{CreateMessageModel, InsertMessage, UpdateMessage};
pub use repository::MessageRepository;
pub use repository_memory::InMemoryMessageRepository;
pub use repository_pg::MessageRepositoryPg;
pub use repository_rest::MessageRepositoryRest;
pub use schema::{MessageEntity, MessageStatus};
pub use service::MessageService;
