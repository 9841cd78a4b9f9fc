//! Remote store trait
//!
//! Defines the interface to the HTTP API of record for todo persistence.

use async_trait::async_trait;

use super::model::{NewTodo, Todo};
use crate::error::StoreError;

/// Interface for the remote todo API.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetch all todos belonging to `owner_id`.
    async fn list(&self, owner_id: i64) -> Result<Vec<Todo>, StoreError>;

    /// Create a todo; the store assigns its id.
    async fn create(&self, new: NewTodo) -> Result<Todo, StoreError>;

    /// Update an existing todo with the full record.
    async fn update(&self, todo: &Todo) -> Result<Todo, StoreError>;

    /// Delete a todo by id.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}
