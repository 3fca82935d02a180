//! Client access to the task store API.
//!
//! [`TodoApi`] is the seam between the board and the network: the board
//! only ever talks to this trait, [`http::HttpTodoApi`] implements it over
//! `reqwest`, and tests substitute an in-memory implementation.
//!
//! ```rust,no_run
//! use todolist::api::{http::HttpTodoApi, TodoApi};
//! use todolist::libs::config::ClientConfig;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let api = HttpTodoApi::new(&ClientConfig::default())?;
//! let created = api.create("Buy milk").await?;
//! api.toggle(created.id).await?;
//! # Ok(())
//! # }
//! ```

pub mod http;

use crate::libs::todo::{Todo, TodoId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request never got a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with an error envelope or a non-success status.
    #[error("server responded with status {status}")]
    Api { status: u16, message: Option<String> },
    /// The response body was not the expected envelope.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ClientError {
    /// The `message` the server put in its error envelope, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Operations the task store offers to clients.
#[allow(async_fn_in_trait)]
pub trait TodoApi {
    async fn list(&self) -> ClientResult<Vec<Todo>>;

    async fn create(&self, title: &str) -> ClientResult<Todo>;

    async fn toggle(&self, id: TodoId) -> ClientResult<Todo>;

    async fn delete(&self, id: TodoId) -> ClientResult<()>;
}
