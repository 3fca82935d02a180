//! The task entity and the validated inputs that create or address it.
//!
//! A [`Todo`] is only ever produced by the store. Callers go through
//! [`NewTodo::parse`] to get a title the store accepts and through
//! [`TodoId`]'s `FromStr` to get an identifier it can look up.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum title length in characters, measured after trimming.
pub const MAX_TITLE_LEN: usize = 255;

/// Server-assigned identifier of a task. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidId)
        }
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for TodoId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidId);
        }
        let value = s.parse::<i64>().map_err(|_| ValidationError::InvalidId)?;
        Self::new(value)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted task, exactly as the API serializes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// A title that passed validation and is ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    title: String,
}

impl NewTodo {
    /// Trims `raw` and checks it is present, non-empty and not longer than
    /// [`MAX_TITLE_LEN`] characters.
    pub fn parse(raw: Option<&str>) -> Result<Self, ValidationError> {
        let title = raw.map(str::trim).unwrap_or_default();
        if title.is_empty() {
            return Err(ValidationError::TitleRequired);
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(ValidationError::TitleTooLong);
        }
        Ok(Self { title: title.to_string() })
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Client-correctable input problems. The display text is what the API
/// sends back in the error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required and cannot be empty")]
    TitleRequired,
    #[error("Title cannot exceed 255 characters")]
    TitleTooLong,
    #[error("Invalid todo ID")]
    InvalidId,
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}
