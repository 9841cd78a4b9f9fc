//! View filter over the todo list
//!
//! Pure view state; never persisted and never sent to the remote store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::model::Todo;

/// Which slice of the list the view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterStatus {
    All,
    Active,
    Completed,
}

impl Default for FilterStatus {
    fn default() -> Self {
        Self::All
    }
}

impl FilterStatus {
    /// Whether `todo` passes this filter.
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.completed,
            Self::Completed => todo.completed,
        }
    }

    /// The order-stable subsequence of `todos` passing this filter.
    pub fn apply(&self, todos: &[Todo]) -> Vec<Todo> {
        todos.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}

impl fmt::Display for FilterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        };
        f.write_str(name)
    }
}

impl FromStr for FilterStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(format!("unknown filter: {}", other)),
        }
    }
}
