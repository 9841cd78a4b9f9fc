//! The state coordinator
//!
//! Owns the authoritative todo list, the in-flight mutation markers,
//! the active filter, and the last error message. Every mutation flows
//! through here: validate, apply the optimistic part, call the remote
//! store, reconcile the outcome.
//!
//! Operations record their failure as the single current user-visible
//! message and also return it, so programmatic callers can sequence on
//! the outcome. A new failure overwrites the previous message; an
//! operation that completes successfully clears it.

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::Error;
use crate::todo::{FilterStatus, NewTodo, RemoteStore, Todo, OWNER_ID};
use crate::Result;

use super::state::{SessionState, Snapshot};

/// A view-layer intent, routed to the matching operation by
/// [`Coordinator::dispatch`].
#[derive(Debug, Clone)]
pub enum Intent {
    Add { title: String },
    Delete { id: i64 },
    Update { todo: Todo },
    ClearCompleted,
    ToggleAll,
    SetFilter { filter: FilterStatus },
    DismissError,
}

/// Client-side coordinator between view intents and the remote store.
///
/// Cheap to clone; clones share the same session state.
#[derive(Clone)]
pub struct Coordinator {
    store: Arc<dyn RemoteStore>,
    state: Arc<RwLock<SessionState>>,
}

impl Coordinator {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            store,
            state: Arc::new(RwLock::new(SessionState::default())),
        }
    }

    /// Current view of the session.
    pub async fn snapshot(&self) -> Snapshot {
        self.state.read().await.snapshot()
    }

    /// Route a view intent to the matching operation.
    pub async fn dispatch(&self, intent: Intent) -> Result<()> {
        match intent {
            Intent::Add { title } => self.add(&title).await,
            Intent::Delete { id } => self.delete(id).await,
            Intent::Update { todo } => self.update(todo).await.map(|_| ()),
            Intent::ClearCompleted => self.clear_completed().await,
            Intent::ToggleAll => self.toggle_all().await,
            Intent::SetFilter { filter } => {
                self.set_filter(filter).await;
                Ok(())
            }
            Intent::DismissError => {
                self.dismiss_error().await;
                Ok(())
            }
        }
    }

    /// Fetch the authoritative list for the fixed owner.
    ///
    /// On failure the list stays empty and the failure is surfaced;
    /// there is no retry.
    pub async fn load(&self) -> Result<()> {
        info!("loading todos for owner {}", OWNER_ID);
        match self.store.list(OWNER_ID).await {
            Ok(todos) => {
                debug!("loaded {} todos", todos.len());
                let mut state = self.state.write().await;
                state.todos = todos;
                state.error = None;
                Ok(())
            }
            Err(e) => {
                let mut state = self.state.write().await;
                Err(record(&mut state, Error::Load(e)))
            }
        }
    }

    /// Create a todo from `title`, showing a placeholder while the
    /// request is in flight.
    ///
    /// A whitespace-only title is rejected before any store call and
    /// leaves no pending state behind.
    pub async fn add(&self, title: &str) -> Result<()> {
        let title = title.trim();
        if title.is_empty() {
            let mut state = self.state.write().await;
            return Err(record(&mut state, Error::EmptyTitle));
        }

        {
            let mut state = self.state.write().await;
            state.placeholder = Some(Todo::placeholder(title));
            state.input_disabled = true;
        }

        let result = self.store.create(NewTodo::new(title)).await;

        // placeholder removal and input re-enable happen regardless of
        // the outcome
        let mut state = self.state.write().await;
        state.placeholder = None;
        state.input_disabled = false;
        match result {
            Ok(created) => {
                info!("created todo {}", created.id);
                state.append(created);
                state.error = None;
                Ok(())
            }
            Err(e) => Err(record(&mut state, Error::Create(e))),
        }
    }

    /// Delete one todo, leaving it in place if the remote call fails.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.delete_one(id).await?;
        self.state.write().await.error = None;
        Ok(())
    }

    /// Delete every completed todo concurrently, then settle.
    ///
    /// With nothing completed this is a no-op: no network calls, no
    /// markers. Individual failures leave their todo in place; the
    /// barrier always clears the markers and re-enables input. Multiple
    /// failures surface as the one generic delete message.
    pub async fn clear_completed(&self) -> Result<()> {
        let ids = self.state.read().await.completed_ids();
        if ids.is_empty() {
            return Ok(());
        }

        info!("clearing {} completed todos", ids.len());
        {
            let mut state = self.state.write().await;
            state.deleting.extend(ids.iter().copied());
            state.input_disabled = true;
        }

        // interleaved, not parallel: each completion applies its own
        // remove-by-id transform, so the deletes commute
        let results = join_all(ids.iter().map(|&id| self.delete_one(id))).await;

        let mut state = self.state.write().await;
        for id in &ids {
            state.deleting.remove(id);
        }
        state.input_disabled = false;

        let mut first_err = None;
        for result in results {
            if let Err(e) = result {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => {
                state.error = None;
                Ok(())
            }
        }
    }

    /// Persist the full record for `todo`, replacing the local copy on
    /// success. The prior state stays untouched on failure.
    pub async fn update(&self, todo: Todo) -> Result<Todo> {
        let updated = self.update_one(todo).await?;
        self.state.write().await.error = None;
        Ok(updated)
    }

    /// Flip every todo to the opposite of "all completed".
    ///
    /// Updates run one at a time, in list order; the first failure
    /// aborts the remainder. Already-applied updates are not rolled
    /// back.
    pub async fn toggle_all(&self) -> Result<()> {
        let targets: Vec<Todo> = {
            let state = self.state.read().await;
            let target = !state.all_completed();
            state
                .todos
                .iter()
                .filter(|t| t.completed != target)
                .map(|t| t.clone().with_completed(target))
                .collect()
        };

        for todo in targets {
            self.update_one(todo).await?;
        }
        self.state.write().await.error = None;
        Ok(())
    }

    /// Switch the view filter. Pure view state; no network interaction.
    pub async fn set_filter(&self, filter: FilterStatus) {
        self.state.write().await.filter = filter;
    }

    /// Drop the current error message.
    pub async fn dismiss_error(&self) {
        self.state.write().await.error = None;
    }

    /// DeleteTask body shared by `delete` and `clear_completed`: marks
    /// the id, calls the store, reconciles, and always clears its own
    /// marker. Does not touch the error state on success so a sibling
    /// failure inside `clear_completed` stays surfaced.
    async fn delete_one(&self, id: i64) -> Result<()> {
        {
            let mut state = self.state.write().await;
            state.deleting.insert(id);
            state.input_disabled = true;
        }

        let result = self.store.delete(id).await;

        let mut state = self.state.write().await;
        state.deleting.remove(&id);
        state.input_disabled = false;
        match result {
            Ok(()) => {
                info!("deleted todo {}", id);
                state.remove(id);
                Ok(())
            }
            Err(e) => Err(record(&mut state, Error::Delete(e))),
        }
    }

    /// UpdateTask body shared by `update` and `toggle_all`. Updates do
    /// not disable the input field; only the per-row marker is set.
    async fn update_one(&self, todo: Todo) -> Result<Todo> {
        let id = todo.id;
        self.state.write().await.updating.insert(id);

        let result = self.store.update(&todo).await;

        let mut state = self.state.write().await;
        state.updating.remove(&id);
        match result {
            Ok(updated) => {
                debug!("updated todo {}", id);
                state.replace(updated.clone());
                Ok(updated)
            }
            Err(e) => Err(record(&mut state, Error::Update(e))),
        }
    }
}

/// Record `err` as the current user-visible message and hand it back.
fn record(state: &mut SessionState, err: Error) -> Error {
    warn!("operation failed: {:?}", err);
    state.error = Some(err.to_string());
    err
}
