//! The client view model.
//!
//! A [`Board`] mirrors the server's task list and applies the result of
//! each user action to that mirror without reloading everything:
//!
//! - submit prepends the created task
//! - toggle replaces the task in place, or reloads when the server refuses
//!   or returns a task the mirror did not have
//! - delete asks for confirmation first, then drops the task locally
//!
//! Failures never propagate out of the board. They become a [`Notice`]
//! that disappears on its own after [`NOTICE_TTL`](super::notice::NOTICE_TTL).

use super::messages::Message;
use super::notice::{Notice, NOTICE_TTL};
use super::summary::Summary;
use super::todo::{Todo, TodoId};
use super::view::View;
use crate::api::{ClientError, TodoApi};
use std::time::Duration;

/// A user action, as carried by the `data-action`/`data-id` attributes of
/// the rendered markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    Refresh,
    Submit(String),
    Toggle(TodoId),
    Delete(TodoId),
}

impl BoardEvent {
    /// Rebuilds an event from an element's `data-action`, `data-id` and
    /// input value. Unknown actions and bad ids yield `None`.
    pub fn bind(action: &str, data_id: Option<&str>, value: Option<&str>) -> Option<Self> {
        match action {
            "refresh" => Some(BoardEvent::Refresh),
            "submit" => Some(BoardEvent::Submit(value.unwrap_or_default().to_string())),
            "toggle" => data_id?.parse().ok().map(BoardEvent::Toggle),
            "delete" => data_id?.parse().ok().map(BoardEvent::Delete),
            _ => None,
        }
    }
}

/// What happened to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The server accepted it and the mirror was updated.
    Applied,
    /// Refused locally; no request was sent.
    Rejected,
    /// The user declined the confirmation.
    Cancelled,
    /// The request failed; a notice was raised.
    Failed,
}

/// Asks the user a yes/no question.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

pub struct Board<A: TodoApi> {
    api: A,
    todos: Vec<Todo>,
    notice: Option<Notice>,
    notice_ttl: Duration,
    submitting: bool,
}

/// Holds the submit control busy and releases it when dropped, including
/// when the submitting future is cancelled mid-request.
struct Busy<'a>(&'a mut bool);

impl<'a> Busy<'a> {
    fn hold(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for Busy<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

impl<A: TodoApi> Board<A> {
    pub fn new(api: A) -> Self {
        Self::with_notice_ttl(api, NOTICE_TTL)
    }

    /// A board whose notices stay visible for `notice_ttl`.
    pub fn with_notice_ttl(api: A, notice_ttl: Duration) -> Self {
        Self {
            api,
            todos: Vec::new(),
            notice: None,
            notice_ttl,
            submitting: false,
        }
    }

    /// Replaces the mirror with the server's list.
    pub async fn refresh(&mut self) -> Outcome {
        match self.api.list().await {
            Ok(todos) => {
                self.todos = todos;
                Outcome::Applied
            }
            Err(ClientError::Api { .. }) => {
                self.raise(Message::TodosLoadFailed.to_string());
                Outcome::Failed
            }
            Err(e) => {
                self.raise(Message::TodosLoadError(detail(&e)).to_string());
                Outcome::Failed
            }
        }
    }

    /// Creates a task from `raw` and puts it at the top of the list.
    pub async fn submit(&mut self, raw: &str) -> Outcome {
        let title = raw.trim();
        if title.is_empty() {
            self.raise(Message::TodoTitleEmpty.to_string());
            return Outcome::Rejected;
        }
        if self.submitting {
            return Outcome::Rejected;
        }

        let busy = Busy::hold(&mut self.submitting);
        let result = self.api.create(title).await;
        drop(busy);

        match result {
            Ok(todo) => {
                self.todos.insert(0, todo);
                Outcome::Applied
            }
            Err(e) => {
                self.raise(failure_text(&e, Message::TodoAddFailed, Message::TodoAddError));
                Outcome::Failed
            }
        }
    }

    /// Flips a task. On failure, or when the server knew a task the mirror
    /// did not, the whole list is reloaded so the mirror matches the server.
    pub async fn toggle(&mut self, id: TodoId) -> Outcome {
        match self.api.toggle(id).await {
            Ok(updated) => {
                match self.todos.iter_mut().find(|todo| todo.id == id) {
                    Some(todo) => *todo = updated,
                    None => {
                        self.refresh().await;
                    }
                }
                Outcome::Applied
            }
            Err(e) => {
                self.raise(failure_text(&e, Message::TodoToggleFailed, Message::TodoToggleError));
                self.refresh().await;
                Outcome::Failed
            }
        }
    }

    /// Deletes a task after `confirm` agrees.
    pub async fn delete(&mut self, id: TodoId, confirm: &impl Confirm) -> Outcome {
        if !confirm.confirm(&Message::ConfirmDeleteTodo.to_string()) {
            return Outcome::Cancelled;
        }

        match self.api.delete(id).await {
            Ok(()) => {
                self.todos.retain(|todo| todo.id != id);
                Outcome::Applied
            }
            Err(e) => {
                self.raise(failure_text(&e, Message::TodoRemoveFailed, Message::TodoRemoveError));
                Outcome::Failed
            }
        }
    }

    pub async fn dispatch(&mut self, event: BoardEvent, confirm: &impl Confirm) -> Outcome {
        match event {
            BoardEvent::Refresh => self.refresh().await,
            BoardEvent::Submit(title) => self.submit(&title).await,
            BoardEvent::Toggle(id) => self.toggle(id).await,
            BoardEvent::Delete(id) => self.delete(id, confirm).await,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn contains(&self, id: TodoId) -> bool {
        self.todos.iter().any(|todo| todo.id == id)
    }

    pub fn summary(&self) -> Summary {
        Summary::of(&self.todos)
    }

    /// The current notice, unless it has already expired.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref().filter(|notice| notice.is_visible())
    }

    /// Why `outcome` did not apply, for callers that report it after the
    /// notice may already have expired. `None` for applied or cancelled actions.
    pub fn failure(&self, outcome: Outcome) -> Option<String> {
        match outcome {
            Outcome::Failed | Outcome::Rejected => Some(
                self.notice
                    .as_ref()
                    .map(|notice| notice.message().to_string())
                    .unwrap_or_else(|| Message::OperationFailed.to_string()),
            ),
            Outcome::Applied | Outcome::Cancelled => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn render_html(&self) -> String {
        View::html(&self.todos, self.notice(), self.submitting)
    }

    fn raise(&mut self, message: String) {
        tracing::debug!(%message, "notice raised");
        self.notice = Some(Notice::with_ttl(message, self.notice_ttl));
    }
}

/// The server's own message when it sent one, the generic failure when it
/// did not, and the transport detail when the request never completed.
fn failure_text(error: &ClientError, fallback: Message, detailed: fn(String) -> Message) -> String {
    match error {
        ClientError::Api { message: Some(message), .. } => message.clone(),
        ClientError::Api { message: None, .. } => fallback.to_string(),
        other => detailed(detail(other)).to_string(),
    }
}

fn detail(error: &ClientError) -> String {
    match error {
        ClientError::Network(detail) | ClientError::Decode(detail) => detail.clone(),
        other => other.to_string(),
    }
}
