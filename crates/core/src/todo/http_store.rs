//! HTTP implementation of the remote store
//!
//! Talks camelCase JSON to the todo API over reqwest. No retries and no
//! timeouts beyond what the transport itself enforces; once a request is
//! issued it runs to completion or failure.

use async_trait::async_trait;
use tracing::debug;

use super::model::{NewTodo, Todo};
use super::repository::RemoteStore;
use crate::error::StoreError;

/// Remote store backed by the HTTP API.
pub struct HttpRemoteStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRemoteStore {
    /// Create a store rooted at `base_url`. Trailing slashes are
    /// stripped so paths can always be joined with a leading `/`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn check(resp: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            Err(StoreError::Status(resp.status()))
        }
    }
}

#[async_trait]
impl RemoteStore for HttpRemoteStore {
    async fn list(&self, owner_id: i64) -> Result<Vec<Todo>, StoreError> {
        debug!("GET /todos?userId={}", owner_id);
        let resp = self
            .client
            .get(self.url(&format!("/todos?userId={}", owner_id)))
            .send()
            .await?;
        Ok(Self::check(resp)?.json().await?)
    }

    async fn create(&self, new: NewTodo) -> Result<Todo, StoreError> {
        debug!("POST /todos title={:?}", new.title);
        let resp = self.client.post(self.url("/todos")).json(&new).send().await?;
        Ok(Self::check(resp)?.json().await?)
    }

    async fn update(&self, todo: &Todo) -> Result<Todo, StoreError> {
        debug!("PATCH /todos/{}", todo.id);
        let resp = self
            .client
            .patch(self.url(&format!("/todos/{}", todo.id)))
            .json(todo)
            .send()
            .await?;
        Ok(Self::check(resp)?.json().await?)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        debug!("DELETE /todos/{}", id);
        let resp = self
            .client
            .delete(self.url(&format!("/todos/{}", id)))
            .send()
            .await?;
        Self::check(resp)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_stripped() {
        let store = HttpRemoteStore::new("https://api.example.com/");
        assert_eq!(store.url("/todos"), "https://api.example.com/todos");
    }

    #[test]
    fn test_url_joining() {
        let store = HttpRemoteStore::new("https://api.example.com");
        assert_eq!(
            store.url(&format!("/todos?userId={}", 2263)),
            "https://api.example.com/todos?userId=2263"
        );
        assert_eq!(store.url("/todos/42"), "https://api.example.com/todos/42");
    }
}
