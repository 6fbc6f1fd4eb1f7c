pub mod dashboard;
pub mod message;
pub mod notification;
pub mod submission;
