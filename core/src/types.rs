//! Domain types for the todo service.
//!
//! # Design
//! `Todo` is the record held by the store and the shape written on the wire.
//! The two input types describe request bodies: `CreateTodo` for the
//! collection POST and `UpdateTodo` for the item PUT. Both tolerate missing
//! and `null` fields; validation happens after decoding, not during it.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codec::timestamp;
use crate::error::Error;

/// Identifier assigned by the store. Never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub i64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a base-10 signed integer, with an optional leading sign.
impl FromStr for TodoId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(TodoId)
    }
}

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Apply a patch in place. `id` and `created_at` are never touched.
    pub fn apply(&mut self, patch: UpdateTodo) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

/// Request payload for creating a todo.
///
/// A missing or `null` title decodes to `None` so the handler can report
/// `title required` rather than a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub title: Option<String>,
}

impl CreateTodo {
    /// The supplied title, provided it has any non-whitespace content.
    ///
    /// The returned string is exactly what the client sent, untrimmed.
    pub fn into_title(self) -> Result<String, Error> {
        self.title
            .filter(|t| !t.trim().is_empty())
            .ok_or(Error::TitleRequired)
    }
}

/// Request payload for updating a todo. Absent and `null` fields both mean
/// "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateTodo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl UpdateTodo {
    /// True when the patch sets a title that is empty or whitespace-only.
    pub fn has_blank_title(&self) -> bool {
        self.title.as_deref().is_some_and(|t| t.trim().is_empty())
    }
}
