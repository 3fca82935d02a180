//! Error responses.
//!
//! Every failure leaves the API as an error [`Envelope`] with a matching
//! status code:
//!
//! | Cause | Status | `message` |
//! |---|---|---|
//! | Bad title, id or body | 400 | validation text |
//! | Unknown id | 404 | `Todo not found` |
//! | Unknown route | 404 | `Endpoint not found`, plus `path` |
//! | Storage failure | 500 | `Failed to ... todo(s)`, plus `error` |

use crate::db::todos::StoreError;
use crate::libs::envelope::Envelope;
use crate::libs::messages::Message;
use crate::libs::todo::ValidationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// The store operation a handler was performing, used to word storage failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    fn failure(self) -> Message {
        match self {
            Operation::List => Message::TodosFetchFailed,
            Operation::Create => Message::TodoCreateFailed,
            Operation::Update => Message::TodoUpdateFailed,
            Operation::Delete => Message::TodoDeleteFailed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    pub status: StatusCode,
    pub body: Envelope<()>,
}

impl ApiErrorResponse {
    pub fn new(status: StatusCode, body: Envelope<()>) -> Self {
        Self { status, body }
    }

    pub fn validation(error: &ValidationError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, Envelope::error(error.to_string()))
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, Envelope::error(Message::TodoNotFound.to_string()))
    }

    pub fn route_not_found(path: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            Envelope::error(Message::EndpointNotFound.to_string()).with_path(path),
        )
    }

    pub fn storage(operation: Operation, detail: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            Envelope::error(operation.failure().to_string()).with_error(detail),
        )
    }

    /// Maps a store failure, logging the ones the client cannot fix.
    pub fn from_store(operation: Operation, error: StoreError) -> Self {
        match error {
            StoreError::Validation(e) => Self::validation(&e),
            StoreError::NotFound(_) => Self::not_found(),
            StoreError::Database(e) => {
                tracing::error!(?operation, error = %e, "storage failure");
                Self::storage(operation, e.to_string())
            }
            StoreError::Worker(e) => {
                tracing::error!(?operation, error = %e, "storage worker failure");
                Self::storage(operation, e)
            }
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<ValidationError> for ApiErrorResponse {
    fn from(error: ValidationError) -> Self {
        Self::validation(&error)
    }
}
