//! Snapshot rendering for the console frontend

use std::fmt::Write;

use todo_core::sync::Snapshot;
use todo_core::todo::Todo;

/// Render a snapshot as the full list view.
pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    for todo in &snapshot.todos {
        render_row(&mut out, todo, snapshot);
    }
    if let Some(placeholder) = &snapshot.placeholder {
        let _ = writeln!(out, "  [ ] ...  {} (saving)", placeholder.title);
    }
    if snapshot.is_empty && snapshot.placeholder.is_none() {
        out.push_str("  (no todos)\n");
    }

    let _ = writeln!(
        out,
        "{} items left, {} completed [{}]",
        snapshot.active_count, snapshot.completed_count, snapshot.filter
    );
    if let Some(error) = &snapshot.error {
        let _ = writeln!(out, "! {}", error);
    }

    out
}

fn render_row(out: &mut String, todo: &Todo, snapshot: &Snapshot) {
    let mark = if todo.completed { "x" } else { " " };
    let busy = if snapshot.deleting.contains(&todo.id) {
        " (deleting)"
    } else if snapshot.updating.contains(&todo.id) {
        " (updating)"
    } else {
        ""
    };
    let _ = writeln!(out, "  [{}] #{:<4} {}{}", mark, todo.id, todo.title, busy);
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use todo_core::todo::FilterStatus;

    use super::*;

    fn todo(id: i64, title: &str, completed: bool) -> Todo {
        Todo {
            id,
            owner_id: 1,
            title: title.to_string(),
            completed,
        }
    }

    fn snapshot(todos: Vec<Todo>) -> Snapshot {
        let active_count = todos.iter().filter(|t| !t.completed).count();
        let completed_count = todos.len() - active_count;
        Snapshot {
            is_empty: todos.is_empty(),
            all_completed: completed_count == todos.len(),
            todos,
            placeholder: None,
            deleting: HashSet::new(),
            updating: HashSet::new(),
            input_disabled: false,
            error: None,
            filter: FilterStatus::All,
            active_count,
            completed_count,
        }
    }

    #[test]
    fn test_rows_and_footer() {
        let out = render(&snapshot(vec![
            todo(1, "Buy milk", false),
            todo(2, "Walk dog", true),
        ]));
        assert!(out.contains("[ ] #1"));
        assert!(out.contains("Buy milk"));
        assert!(out.contains("[x] #2"));
        assert!(out.contains("1 items left, 1 completed [all]"));
    }

    #[test]
    fn test_empty_list() {
        let out = render(&snapshot(vec![]));
        assert!(out.contains("(no todos)"));
        assert!(out.contains("0 items left"));
    }

    #[test]
    fn test_placeholder_row() {
        let mut snapshot = snapshot(vec![]);
        snapshot.placeholder = Some(Todo::placeholder("Buy milk"));
        let out = render(&snapshot);
        assert!(out.contains("Buy milk (saving)"));
        assert!(!out.contains("(no todos)"));
    }

    #[test]
    fn test_busy_markers() {
        let mut snapshot = snapshot(vec![todo(1, "a", false), todo(2, "b", false)]);
        snapshot.deleting.insert(1);
        snapshot.updating.insert(2);
        let out = render(&snapshot);
        assert!(out.contains("a (deleting)"));
        assert!(out.contains("b (updating)"));
    }

    #[test]
    fn test_error_line() {
        let mut snapshot = snapshot(vec![]);
        snapshot.error = Some("Unable to load todos".to_string());
        let out = render(&snapshot);
        assert!(out.contains("! Unable to load todos"));
    }
}
