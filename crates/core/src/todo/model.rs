//! Todo model definitions

use serde::{Deserialize, Serialize};

/// Owner id baked into the client. Every todo managed by this
/// application belongs to this user; it is not configurable.
pub const OWNER_ID: i64 = 2263;

/// A single to-do item as stored by the remote API.
///
/// Identity is `id`, assigned by the remote store and immutable from
/// then on. Id 0 marks a local placeholder that has not been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Local stand-in rendered while a create request is in flight.
    pub fn placeholder(title: impl Into<String>) -> Self {
        Self {
            id: 0,
            owner_id: OWNER_ID,
            title: title.into(),
            completed: false,
        }
    }

    /// Whether this todo is the unpersisted placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.id == 0
    }

    /// Copy with the completed flag set to `completed`.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Copy with a new title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Create payload: a todo the remote store has not assigned an id to yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub owner_id: i64,
    pub title: String,
    pub completed: bool,
}

impl NewTodo {
    /// A fresh, incomplete todo for the fixed owner.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            owner_id: OWNER_ID,
            title: title.into(),
            completed: false,
        }
    }
}
