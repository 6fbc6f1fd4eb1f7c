use std::sync::Arc;

use crate::modules::{
    message::{model::InsertMessage, repository::MessageRepository, schema::MessageEntity},
    notification::{client::Notifier, model::NotificationPayload},
    submission::draft::{DraftField, MessageDraft},
};

pub const SUBMIT_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

/// The public contact form: a draft, the submit flags and the store/notifier it talks to.
pub struct SubmissionForm {
    store: Arc<dyn MessageRepository + Send + Sync>,
    notifier: Arc<dyn Notifier + Send + Sync>,
    draft: MessageDraft,
    is_submitting: bool,
    submitted: bool,
    error: Option<String>,
}

impl SubmissionForm {
    pub fn new(
        store: Arc<dyn MessageRepository + Send + Sync>,
        notifier: Arc<dyn Notifier + Send + Sync>,
    ) -> Self {
        SubmissionForm {
            store,
            notifier,
            draft: MessageDraft::default(),
            is_submitting: false,
            submitted: false,
            error: None,
        }
    }

    pub fn draft(&self) -> &MessageDraft {
        &self.draft
    }

    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Stores the draft, then makes one best-effort notification call.
    /// Returns the stored message when the submission went through.
    pub async fn submit(&mut self) -> Option<MessageEntity> {
        self.is_submitting = true;
        self.error = None;

        let stored = self.try_submit().await;

        self.is_submitting = false;
        stored
    }

    async fn try_submit(&mut self) -> Option<MessageEntity> {
        let insert = match self.draft.to_insert() {
            Ok(insert) => insert,
            Err(msg) => {
                self.error = Some(msg);
                return None;
            }
        };

        let stored = match self.store.create(&insert).await {
            Ok(stored) => stored,
            Err(e) => {
                log::error!("Failed to store message: {e}");
                self.error = Some(SUBMIT_FAILED_MESSAGE.to_string());
                return None;
            }
        };

        self.submitted = true;
        self.draft = MessageDraft::default();
        self.notify(&insert).await;

        Some(stored)
    }

    async fn notify(&self, insert: &InsertMessage) {
        match self.notifier.notify(&NotificationPayload::from(insert)).await {
            Ok(id) => log::info!("Operator notified ({id})"),
            Err(e) => log::warn!("Notification failed, message is stored anyway: {e}"),
        }
    }

    /// "Send another message": back to an empty form.
    pub fn reset(&mut self) {
        self.submitted = false;
        self.error = None;
        self.draft = MessageDraft::default();
    }
}
