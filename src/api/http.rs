use super::{ClientError, ClientResult, TodoApi};
use crate::libs::config::ClientConfig;
use crate::libs::envelope::Envelope;
use crate::libs::todo::{Todo, TodoId};
use anyhow::Result;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;

/// [`TodoApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: Client,
    /// Base URL including the `/api` prefix, without a trailing slash.
    base_url: String,
}

impl HttpTodoApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn todo_url(&self, id: TodoId) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }

    /// Sends `request` and unwraps the envelope, turning error envelopes and
    /// non-2xx statuses into [`ClientError::Api`].
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<Envelope<T>> {
        let response = request.send().await.map_err(|e| ClientError::Network(e.to_string()))?;
        let status = response.status();
        let body = response.bytes().await.map_err(|e| ClientError::Network(e.to_string()))?;

        let envelope: Envelope<T> = match serde_json::from_slice(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(ClientError::Api {
                    status: status.as_u16(),
                    message: None,
                })
            }
            Err(e) => return Err(ClientError::Decode(e.to_string())),
        };

        if !status.is_success() || !envelope.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: envelope.message,
            });
        }

        Ok(envelope)
    }

    async fn send_data<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        self.send::<T>(request)
            .await?
            .data
            .ok_or_else(|| ClientError::Decode("response has no data".to_string()))
    }
}

impl TodoApi for HttpTodoApi {
    async fn list(&self) -> ClientResult<Vec<Todo>> {
        self.send_data(self.client.get(self.todos_url())).await
    }

    async fn create(&self, title: &str) -> ClientResult<Todo> {
        self.send_data(self.client.post(self.todos_url()).json(&json!({ "title": title })))
            .await
    }

    async fn toggle(&self, id: TodoId) -> ClientResult<Todo> {
        self.send_data(self.client.patch(self.todo_url(id))).await
    }

    async fn delete(&self, id: TodoId) -> ClientResult<()> {
        self.send::<serde_json::Value>(self.client.delete(self.todo_url(id))).await?;
        Ok(())
    }
}
