//! Session state and its transition functions
//!
//! All mutation happens through these methods while the coordinator
//! holds the write lock; each transition is a pure function of the
//! current state, so interleaved completions commute.

use std::collections::HashSet;

use crate::todo::{FilterStatus, Todo};

/// Mutable client session state. One per coordinator.
#[derive(Debug, Default)]
pub(crate) struct SessionState {
    /// Authoritative list, in remote arrival order.
    pub todos: Vec<Todo>,
    pub filter: FilterStatus,
    /// Local stand-in rendered while a create is in flight. Never part
    /// of `todos`.
    pub placeholder: Option<Todo>,
    /// Ids with a delete in flight.
    pub deleting: HashSet<i64>,
    /// Ids with an update in flight.
    pub updating: HashSet<i64>,
    pub input_disabled: bool,
    /// Current user-visible failure message, if any.
    pub error: Option<String>,
}

impl SessionState {
    /// Append a todo returned by the remote store.
    pub fn append(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Remove a todo by id. Commutes with other removes.
    pub fn remove(&mut self, id: i64) {
        self.todos.retain(|t| t.id != id);
    }

    /// Replace the todo matching `updated.id` in place, keeping order.
    pub fn replace(&mut self, updated: Todo) {
        if let Some(slot) = self.todos.iter_mut().find(|t| t.id == updated.id) {
            *slot = updated;
        }
    }

    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    pub fn all_completed(&self) -> bool {
        self.todos.iter().all(|t| t.completed)
    }

    /// Ids of all completed todos, in list order.
    pub fn completed_ids(&self) -> Vec<i64> {
        self.todos
            .iter()
            .filter(|t| t.completed)
            .map(|t| t.id)
            .collect()
    }

    /// Derive the read-only view handed to the frontend.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            todos: self.filter.apply(&self.todos),
            placeholder: self.placeholder.clone(),
            deleting: self.deleting.clone(),
            updating: self.updating.clone(),
            input_disabled: self.input_disabled,
            error: self.error.clone(),
            filter: self.filter,
            active_count: self.active_count(),
            completed_count: self.completed_count(),
            is_empty: self.todos.is_empty(),
            all_completed: self.all_completed(),
        }
    }
}

/// Read-only view of the session, recomputed from the authoritative
/// state on every read.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// The filtered, order-stable view of the authoritative list.
    pub todos: Vec<Todo>,
    pub placeholder: Option<Todo>,
    pub deleting: HashSet<i64>,
    pub updating: HashSet<i64>,
    pub input_disabled: bool,
    pub error: Option<String>,
    pub filter: FilterStatus,
    pub active_count: usize,
    pub completed_count: usize,
    pub is_empty: bool,
    pub all_completed: bool,
}

impl Snapshot {
    /// Whether `id` has any mutation in flight.
    pub fn is_busy(&self, id: i64) -> bool {
        self.deleting.contains(&id) || self.updating.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64, completed: bool) -> Todo {
        Todo {
            id,
            owner_id: 1,
            title: format!("todo {}", id),
            completed,
        }
    }

    fn seeded() -> SessionState {
        SessionState {
            todos: vec![todo(1, false), todo(2, true), todo(3, false)],
            ..Default::default()
        }
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut state = seeded();
        state.remove(2);
        let ids: Vec<i64> = state.todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut state = seeded();
        state.remove(99);
        assert_eq!(state.todos.len(), 3);
    }

    #[test]
    fn test_replace_in_place() {
        let mut state = seeded();
        state.replace(todo(1, true));
        assert!(state.todos[0].completed);
        assert_eq!(state.todos[0].id, 1);
        assert_eq!(state.todos.len(), 3);
    }

    #[test]
    fn test_counts() {
        let state = seeded();
        assert_eq!(state.active_count(), 2);
        assert_eq!(state.completed_count(), 1);
        assert!(!state.all_completed());
    }

    #[test]
    fn test_all_completed_on_empty_list() {
        let state = SessionState::default();
        assert!(state.all_completed());
        assert_eq!(state.completed_ids(), Vec::<i64>::new());
    }

    #[test]
    fn test_completed_ids_in_list_order() {
        let mut state = seeded();
        state.replace(todo(3, true));
        assert_eq!(state.completed_ids(), vec![2, 3]);
    }

    #[test]
    fn test_snapshot_applies_filter() {
        let mut state = seeded();
        state.filter = FilterStatus::Completed;
        let snapshot = state.snapshot();
        assert_eq!(snapshot.todos.len(), 1);
        assert_eq!(snapshot.todos[0].id, 2);
        // counts stay derived from the full list
        assert_eq!(snapshot.active_count, 2);
        assert!(!snapshot.is_empty);
    }

    #[test]
    fn test_snapshot_is_busy() {
        let mut state = seeded();
        state.deleting.insert(1);
        state.updating.insert(3);
        let snapshot = state.snapshot();
        assert!(snapshot.is_busy(1));
        assert!(snapshot.is_busy(3));
        assert!(!snapshot.is_busy(2));
    }
}
