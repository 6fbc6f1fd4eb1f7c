use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::modules::message::{
    model::UpdateMessage,
    repository::MessageRepository,
    schema::{MessageEntity, MessageStatus},
};

/// Operator view: the message list, the selected message and a reply draft.
pub struct Dashboard {
    store: Arc<dyn MessageRepository + Send + Sync>,
    messages: Vec<MessageEntity>,
    selected: Option<MessageEntity>,
    reply_draft: String,
    loading: bool,
    updating: bool,
    last_error: Option<String>,
}

impl Dashboard {
    pub fn new(store: Arc<dyn MessageRepository + Send + Sync>) -> Self {
        Dashboard {
            store,
            messages: Vec::new(),
            selected: None,
            reply_draft: String::new(),
            loading: true,
            updating: false,
            last_error: None,
        }
    }

    /// Builds the view and loads the list once.
    pub async fn open(store: Arc<dyn MessageRepository + Send + Sync>) -> Self {
        let mut dashboard = Self::new(store);
        dashboard.refresh().await;
        dashboard
    }

    pub fn messages(&self) -> &[MessageEntity] {
        &self.messages
    }

    pub fn selected(&self) -> Option<&MessageEntity> {
        self.selected.as_ref()
    }

    pub fn reply_draft(&self) -> &str {
        &self.reply_draft
    }

    pub fn set_reply_draft(&mut self, text: impl Into<String>) {
        self.reply_draft = text.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_updating(&self) -> bool {
        self.updating
    }

    /// Last list/update failure, kept until the next successful call.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Status selector and reply button are disabled while an update is in flight.
    pub fn controls_enabled(&self) -> bool {
        !self.updating
    }

    pub fn can_submit_reply(&self) -> bool {
        !self.updating && self.selected.is_some() && !self.reply_draft.trim().is_empty()
    }

    /// Reloads the list. On failure the previous list stays.
    pub async fn refresh(&mut self) {
        self.reload().await;
    }

    async fn reload(&mut self) -> bool {
        let loaded = match self.store.find_all_newest_first().await {
            Ok(messages) => {
                self.messages = messages;
                self.last_error = None;
                true
            }
            Err(e) => {
                log::error!("Error loading messages: {e}");
                self.last_error = Some(e.to_string());
                false
            }
        };
        self.loading = false;
        loaded
    }

    pub fn select_message(&mut self, message: &MessageEntity) {
        self.reply_draft = message.reply.clone().unwrap_or_default();
        self.selected = Some(message.clone());
    }

    /// Selects a listed message by id. Returns false when it is not in the list.
    pub fn select_by_id(&mut self, id: &Uuid) -> bool {
        match self.messages.iter().find(|m| m.id == *id).cloned() {
            Some(message) => {
                self.select_message(&message);
                true
            }
            None => false,
        }
    }

    pub async fn change_status(&mut self, status: MessageStatus) {
        let Some(id) = self.selected.as_ref().map(|m| m.id) else {
            return;
        };
        self.apply_update(id, UpdateMessage::status(status)).await;
    }

    /// Saves the reply draft on the selected message and marks it replied.
    /// Blank drafts are ignored.
    pub async fn submit_reply(&mut self) {
        let Some(id) = self.selected.as_ref().map(|m| m.id) else {
            return;
        };
        if self.reply_draft.trim().is_empty() {
            return;
        }

        let changes = UpdateMessage::reply(self.reply_draft.clone(), Utc::now());
        if self.apply_update(id, changes).await {
            self.reply_draft.clear();
        }
    }

    async fn apply_update(&mut self, id: Uuid, changes: UpdateMessage) -> bool {
        self.updating = true;

        let saved = match self.store.update(&id, &changes).await {
            Ok(()) => {
                let reloaded = self.reload().await;
                self.resync_selected(id, &changes, reloaded);
                true
            }
            Err(e) => {
                log::error!("Error updating message {id}: {e}");
                self.last_error = Some(e.to_string());
                false
            }
        };

        self.updating = false;
        saved
    }

    /// The reloaded row wins. The written fields are merged in when the list could not
    /// be reloaded or no longer holds the row.
    fn resync_selected(&mut self, id: Uuid, changes: &UpdateMessage, reloaded: bool) {
        let Some(selected) = self.selected.as_mut().filter(|m| m.id == id) else {
            return;
        };
        let fresh = reloaded
            .then(|| self.messages.iter().find(|m| m.id == id))
            .flatten();
        match fresh {
            Some(fresh) => *selected = fresh.clone(),
            None => changes.apply_to(selected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::message::{
        model::InsertMessage, repository_memory::InMemoryMessageRepository,
    };
    use crate::test::{CountingStore, FailingStore};

    async fn seeded() -> (Arc<InMemoryMessageRepository>, MessageEntity) {
        let store = Arc::new(InMemoryMessageRepository::new());
        let message = store
            .create(&InsertMessage {
                parent_name: "Jane Doe".into(),
                parent_email: "jane@example.com".into(),
                child_age: 7,
                message: "Loves dinosaurs".into(),
            })
            .await
            .unwrap();
        (store, message)
    }

    #[tokio::test]
    async fn test_open_loads_newest_first() {
        let (store, _) = seeded().await;
        store
            .create(&InsertMessage {
                parent_name: "John Roe".into(),
                parent_email: "john@example.com".into(),
                child_age: 11,
                message: "Into robots".into(),
            })
            .await
            .unwrap();

        let dashboard = Dashboard::open(store).await;
        assert!(!dashboard.is_loading());
        assert_eq!(dashboard.messages().len(), 2);
        assert!(dashboard
            .messages()
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at));
    }

    #[tokio::test]
    async fn test_select_seeds_reply_draft() {
        let (store, message) = seeded().await;
        let mut dashboard = Dashboard::open(store).await;

        dashboard.select_message(&message);
        assert_eq!(dashboard.reply_draft(), "");

        let mut replied = message.clone();
        replied.reply = Some("A telescope".into());
        dashboard.select_message(&replied);
        assert_eq!(dashboard.reply_draft(), "A telescope");
        assert_eq!(dashboard.selected().unwrap().id, message.id);
    }

    #[tokio::test]
    async fn test_submit_reply_marks_message_replied() {
        let (store, message) = seeded().await;
        let mut dashboard = Dashboard::open(store.clone()).await;
        assert!(dashboard.select_by_id(&message.id));

        dashboard.set_reply_draft("Try a dino excavation kit!");
        assert!(dashboard.can_submit_reply());
        dashboard.submit_reply().await;

        let row = store.find_by_id(&message.id).await.unwrap();
        assert_eq!(row.reply.as_deref(), Some("Try a dino excavation kit!"));
        assert_eq!(row.status, MessageStatus::Replied);
        assert!(row.replied_at.is_some());

        let selected = dashboard.selected().unwrap();
        assert_eq!(selected, &row);
        assert_eq!(dashboard.messages()[0], row);
        assert_eq!(dashboard.reply_draft(), "");
        assert!(!dashboard.is_updating());
    }

    #[tokio::test]
    async fn test_reply_from_archived_still_marks_replied() {
        let (store, message) = seeded().await;
        store.update(&message.id, &UpdateMessage::status(MessageStatus::Archived)).await.unwrap();
        let mut dashboard = Dashboard::open(store.clone()).await;
        dashboard.select_by_id(&message.id);

        dashboard.set_reply_draft("A kite");
        dashboard.submit_reply().await;

        let row = store.find_by_id(&message.id).await.unwrap();
        assert_eq!(row.status, MessageStatus::Replied);
        assert!(row.replied_at.is_some());
    }

    #[tokio::test]
    async fn test_blank_reply_makes_no_store_call() {
        let (inner, message) = seeded().await;
        let store = Arc::new(CountingStore::new(inner));
        let mut dashboard = Dashboard::open(store.clone()).await;
        dashboard.select_by_id(&message.id);

        dashboard.set_reply_draft("   \n\t");
        assert!(!dashboard.can_submit_reply());
        dashboard.submit_reply().await;

        assert_eq!(store.updates(), 0);
    }

    #[tokio::test]
    async fn test_reply_without_selection_is_ignored() {
        let (inner, _) = seeded().await;
        let store = Arc::new(CountingStore::new(inner));
        let mut dashboard = Dashboard::open(store.clone()).await;

        dashboard.set_reply_draft("Hello");
        dashboard.submit_reply().await;
        dashboard.change_status(MessageStatus::Archived).await;

        assert_eq!(store.updates(), 0);
    }

    #[tokio::test]
    async fn test_status_change_leaves_reply_untouched() {
        let (store, message) = seeded().await;
        let replied_at = Utc::now();
        store.update(&message.id, &UpdateMessage::reply("A telescope", replied_at)).await.unwrap();

        let mut dashboard = Dashboard::open(store.clone()).await;
        dashboard.select_by_id(&message.id);
        dashboard.change_status(MessageStatus::Archived).await;

        let row = store.find_by_id(&message.id).await.unwrap();
        assert_eq!(row.status, MessageStatus::Archived);
        assert_eq!(row.reply.as_deref(), Some("A telescope"));
        assert_eq!(row.replied_at, Some(replied_at));
        assert_eq!(dashboard.selected().unwrap().status, MessageStatus::Archived);
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_previous_list() {
        let (inner, message) = seeded().await;
        let store = Arc::new(CountingStore::new(inner));
        let mut dashboard = Dashboard::open(store.clone()).await;
        assert_eq!(dashboard.messages().len(), 1);

        store.fail_lists(true);
        dashboard.refresh().await;
        assert_eq!(dashboard.messages().len(), 1);
        assert_eq!(dashboard.messages()[0].id, message.id);
        assert!(dashboard.last_error().is_some());
    }

    #[tokio::test]
    async fn test_write_is_merged_when_refresh_fails() {
        let (inner, message) = seeded().await;
        let store = Arc::new(CountingStore::new(inner));
        let mut dashboard = Dashboard::open(store.clone()).await;
        dashboard.select_by_id(&message.id);

        store.fail_lists(true);
        dashboard.change_status(MessageStatus::Archived).await;

        assert_eq!(store.updates(), 1);
        assert_eq!(dashboard.selected().unwrap().status, MessageStatus::Archived);
        // stale list, selection reflects the write
        assert_eq!(dashboard.messages()[0].status, MessageStatus::New);
    }

    #[tokio::test]
    async fn test_reply_reaches_selection_when_refresh_fails() {
        let (inner, message) = seeded().await;
        let store = Arc::new(CountingStore::new(inner.clone()));
        let mut dashboard = Dashboard::open(store.clone()).await;
        dashboard.select_by_id(&message.id);
        dashboard.set_reply_draft("A telescope");

        store.fail_lists(true);
        dashboard.submit_reply().await;

        let row = inner.find_by_id(&message.id).await.unwrap();
        assert_eq!(row.status, MessageStatus::Replied);

        let selected = dashboard.selected().unwrap();
        assert_eq!(selected.status, MessageStatus::Replied);
        assert_eq!(selected.reply.as_deref(), Some("A telescope"));
        assert_eq!(selected.replied_at, row.replied_at);
        assert_eq!(dashboard.reply_draft(), "");
        assert!(dashboard.last_error().is_some());
        assert_eq!(dashboard.messages()[0].status, MessageStatus::New);
    }

    #[tokio::test]
    async fn test_failed_update_keeps_reply_draft() {
        let (_, message) = seeded().await;
        let mut dashboard = Dashboard::new(Arc::new(FailingStore));
        dashboard.select_message(&message);
        dashboard.set_reply_draft("A telescope");

        dashboard.submit_reply().await;

        assert_eq!(dashboard.reply_draft(), "A telescope");
        assert!(dashboard.last_error().is_some());
        assert!(dashboard.controls_enabled());
        assert_eq!(dashboard.selected().unwrap().status, MessageStatus::New);
    }
}
