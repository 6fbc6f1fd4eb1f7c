pub mod client;
pub mod error;
pub mod handle;
pub mod mailer;
pub mod model;
pub mod route;
pub mod template;

pub use client::{FunctionNotifier, Notifier};
pub use error::FunctionError;
pub use mailer::{Mailer, ResendConfig, ResendMailer};
pub use model::NotificationPayload;
