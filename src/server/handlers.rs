use super::error::{ApiErrorResponse, Operation};
use super::AppState;
use crate::libs::envelope::Envelope;
use crate::libs::messages::Message;
use crate::libs::todo::{Todo, TodoId, ValidationError};
use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::{StatusCode, Uri},
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// `GET /health`
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// `GET /api/todos`
pub async fn list_todos(State(state): State<AppState>) -> ApiResult<Json<Envelope<Vec<Todo>>>> {
    let todos = state
        .store
        .list()
        .await
        .map_err(|e| ApiErrorResponse::from_store(Operation::List, e))?;
    let count = todos.len();

    Ok(Json(Envelope::success(todos).with_count(count)))
}

/// `POST /api/todos`
///
/// An empty body counts as an object without a title; a `title` that is not
/// a string is treated as missing.
pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<(StatusCode, Json<Envelope<Todo>>)> {
    let body = body.map_err(|e| ValidationError::InvalidBody(e.body_text()))?;
    let title = parse_title(&body)?;
    let todo = state
        .store
        .create(title)
        .await
        .map_err(|e| ApiErrorResponse::from_store(Operation::Create, e))?;
    tracing::debug!(id = %todo.id, "todo created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success(todo).with_message(Message::TodoCreated.to_string())),
    ))
}

/// `PATCH /api/todos/{id}`
pub async fn toggle_todo(State(state): State<AppState>, id: Result<Path<String>, PathRejection>) -> ApiResult<Json<Envelope<Todo>>> {
    let id = parse_id(id)?;
    let todo = state
        .store
        .toggle(id)
        .await
        .map_err(|e| ApiErrorResponse::from_store(Operation::Update, e))?;
    tracing::debug!(%id, completed = todo.completed, "todo toggled");

    Ok(Json(Envelope::success(todo).with_message(Message::TodoUpdated.to_string())))
}

/// `DELETE /api/todos/{id}`
pub async fn delete_todo(State(state): State<AppState>, id: Result<Path<String>, PathRejection>) -> ApiResult<Json<Envelope<()>>> {
    let id = parse_id(id)?;
    state
        .store
        .delete(id)
        .await
        .map_err(|e| ApiErrorResponse::from_store(Operation::Delete, e))?;
    tracing::debug!(%id, "todo deleted");

    Ok(Json(Envelope::done().with_message(Message::TodoDeleted.to_string())))
}

/// Fallback for unmatched routes and methods.
pub async fn not_found(uri: Uri) -> ApiErrorResponse {
    ApiErrorResponse::route_not_found(uri.path())
}

/// A segment axum cannot decode (e.g. invalid UTF-8) is as invalid as one
/// that is not a number.
fn parse_id(raw: Result<Path<String>, PathRejection>) -> Result<TodoId, ValidationError> {
    let Path(raw) = raw.map_err(|_| ValidationError::InvalidId)?;
    raw.parse()
}

fn parse_title(body: &[u8]) -> Result<Option<String>, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    let value: Value = serde_json::from_slice(body).map_err(|e| ValidationError::InvalidBody(e.to_string()))?;

    Ok(value.get("title").and_then(Value::as_str).map(str::to_string))
}
