use reqwest::{Client, Response, StatusCode};
use uuid::Uuid;

use crate::{
    api::{error, success::SuccessData},
    constants::ClientConfig,
    modules::message::{
        model::{CreateMessageModel, InsertMessage, UpdateMessage},
        repository::MessageRepository,
        schema::MessageEntity,
    },
};

const MESSAGES_PATH: &str = "/api/messages";

/// The store seen from a browser-side caller: the HTTP API, authenticated with the public key.
#[derive(Clone)]
pub struct MessageRepositoryRest {
    http_client: Client,
    config: ClientConfig,
}

impl MessageRepositoryRest {
    pub fn new(config: ClientConfig) -> Self {
        Self { http_client: Client::new(), config }
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.bearer_auth(&self.config.anon_key).header("apikey", &self.config.anon_key)
    }

    async fn check(response: Response) -> Result<Response, error::SystemError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<error::ErrorBody>(&body)
            .map(|b| b.message.into_owned())
            .unwrap_or_else(|_| body.clone());

        Err(match status {
            StatusCode::BAD_REQUEST => error::SystemError::bad_request(message),
            StatusCode::UNAUTHORIZED => error::SystemError::unauthorized(message),
            StatusCode::NOT_FOUND => error::SystemError::not_found(message),
            _ => error::SystemError::Upstream { status: status.as_u16(), body },
        })
    }

    async fn data<T: serde::de::DeserializeOwned>(
        response: Response,
    ) -> Result<T, error::SystemError> {
        let body: SuccessData<T> = Self::check(response).await?.json().await?;
        body.data.ok_or_else(|| error::SystemError::Upstream {
            status: 200,
            body: "response carried no data".to_string(),
        })
    }
}

#[async_trait::async_trait]
impl MessageRepository for MessageRepositoryRest {
    async fn create(&self, message: &InsertMessage) -> Result<MessageEntity, error::SystemError> {
        let response = self
            .authorized(self.http_client.post(self.config.url(MESSAGES_PATH)))
            .json(&CreateMessageModel::from(message))
            .send()
            .await?;
        Self::data(response).await
    }

    async fn find_all_newest_first(&self) -> Result<Vec<MessageEntity>, error::SystemError> {
        let response =
            self.authorized(self.http_client.get(self.config.url(MESSAGES_PATH))).send().await?;
        Self::data(response).await
    }

    async fn update(&self, id: &Uuid, changes: &UpdateMessage) -> Result<(), error::SystemError> {
        let url = self.config.url(&format!("{MESSAGES_PATH}/{id}"));
        let response = self.authorized(self.http_client.patch(url)).json(changes).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}
