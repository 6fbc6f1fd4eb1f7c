//! Fakes and helpers shared by the unit tests.
#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc, Mutex,
};

use actix_web::{web, App, HttpServer};
use uuid::Uuid;

use crate::{
    api::error,
    modules::{
        message::{
            model::{InsertMessage, UpdateMessage},
            repository::MessageRepository,
            schema::MessageEntity,
        },
        notification::{
            client::Notifier, error::FunctionError, mailer::Mailer, model::NotificationPayload,
            model::OutgoingEmail,
        },
    },
};

/// Starts a real server on an ephemeral port inside the current runtime and returns its base URL.
pub fn spawn_server<F>(configure: F) -> String
where
    F: Fn(&mut web::ServiceConfig) + Clone + Send + 'static,
{
    let server = HttpServer::new(move || App::new().configure(configure.clone()))
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .unwrap();
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}")
}

#[derive(Default)]
pub struct RecordedEmails(Mutex<Vec<OutgoingEmail>>);

impl RecordedEmails {
    pub fn push(&self, email: OutgoingEmail) {
        self.0.lock().unwrap().push(email);
    }

    pub fn take(&self) -> Vec<OutgoingEmail> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

#[derive(Default)]
pub struct FakeMailer {
    sent: Mutex<Vec<NotificationPayload>>,
}

impl FakeMailer {
    pub fn sent(&self) -> Vec<NotificationPayload> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Mailer for FakeMailer {
    async fn send_notification(&self, payload: &NotificationPayload) -> Result<String, FunctionError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(payload.clone());
        Ok(format!("fake-{}", sent.len()))
    }
}

#[derive(Default)]
pub struct FakeNotifier {
    fail: bool,
    attempts: AtomicUsize,
    sent: Mutex<Vec<NotificationPayload>>,
}

impl FakeNotifier {
    pub fn failing() -> Self {
        Self { fail: true, ..Default::default() }
    }

    pub fn sent(&self) -> Vec<NotificationPayload> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Notifier for FakeNotifier {
    async fn notify(&self, payload: &NotificationPayload) -> Result<String, error::SystemError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(error::SystemError::Upstream { status: 500, body: "provider down".into() });
        }
        self.sent.lock().unwrap().push(payload.clone());
        Ok("notified".to_string())
    }
}

/// A store whose backend is unreachable.
pub struct FailingStore;

fn unreachable_store() -> error::SystemError {
    error::SystemError::DatabaseError("connection refused".into())
}

#[async_trait::async_trait]
impl MessageRepository for FailingStore {
    async fn create(&self, _message: &InsertMessage) -> Result<MessageEntity, error::SystemError> {
        Err(unreachable_store())
    }

    async fn find_all_newest_first(&self) -> Result<Vec<MessageEntity>, error::SystemError> {
        Err(unreachable_store())
    }

    async fn update(&self, _id: &Uuid, _changes: &UpdateMessage) -> Result<(), error::SystemError> {
        Err(unreachable_store())
    }
}

/// Wraps a store, counts update calls and can be told to fail listings.
pub struct CountingStore<R> {
    inner: Arc<R>,
    updates: AtomicUsize,
    fail_lists: AtomicBool,
}

impl<R> CountingStore<R> {
    pub fn new(inner: Arc<R>) -> Self {
        Self { inner, updates: AtomicUsize::new(0), fail_lists: AtomicBool::new(false) }
    }

    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub fn fail_lists(&self, fail: bool) {
        self.fail_lists.store(fail, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl<R> MessageRepository for CountingStore<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn create(&self, message: &InsertMessage) -> Result<MessageEntity, error::SystemError> {
        self.inner.create(message).await
    }

    async fn find_all_newest_first(&self) -> Result<Vec<MessageEntity>, error::SystemError> {
        if self.fail_lists.load(Ordering::SeqCst) {
            return Err(unreachable_store());
        }
        self.inner.find_all_newest_first().await
    }

    async fn update(&self, id: &Uuid, changes: &UpdateMessage) -> Result<(), error::SystemError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(id, changes).await
    }
}
