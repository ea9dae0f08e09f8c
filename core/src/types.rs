//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the backend's schema but are defined independently of
//! the mock-server crate. Integration tests catch any schema drift between
//! the two. The client never invents `id` or `done` values; both come from
//! server responses only.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend-assigned identifier of a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub i64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for TodoId {
    fn from(raw: i64) -> Self {
        TodoId(raw)
    }
}

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub done: bool,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTodo {
    pub title: String,
}

impl CreateTodo {
    /// Build a payload from raw user input.
    ///
    /// Returns `None` when the input is empty after trimming, so a blank
    /// title can never reach the wire.
    pub fn from_input(raw: &str) -> Option<Self> {
        let title = raw.trim();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            title: title.to_string(),
        })
    }
}
