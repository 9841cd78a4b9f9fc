//! Console frontend for Remote Todo
//!
//! Reads commands from stdin, dispatches them to the coordinator as
//! intents, and renders a fresh state snapshot after every operation.

mod command;
mod render;

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_core::sync::{Coordinator, Intent};
use todo_core::todo::HttpRemoteStore;

use crate::command::Command;

const DEFAULT_API_URL: &str = "https://mate.academy/students-api";

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_console=info,todo_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url =
        std::env::var("TODO_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    tracing::info!("using API at {}", base_url);

    let store = Arc::new(HttpRemoteStore::new(base_url));
    let coordinator = Coordinator::new(store);

    // initial load; a failure shows up in the first render, no retry
    let _ = coordinator.load().await;
    print!("{}", render::render(&coordinator.snapshot().await));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) | Err(_) => break,
        };

        let command = match command::parse(&line) {
            Some(Ok(command)) => command,
            Some(Err(message)) => {
                println!("{}", message);
                continue;
            }
            None => continue,
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{}", command::USAGE);
                continue;
            }
            Command::List => {}
            other => {
                if let Some(intent) = to_intent(other, &coordinator).await {
                    // failures are surfaced on the snapshot's error line
                    let _ = coordinator.dispatch(intent).await;
                }
            }
        }

        print!("{}", render::render(&coordinator.snapshot().await));
    }
}

/// Translate a command into a coordinator intent, resolving ids against
/// the currently visible list where needed.
async fn to_intent(command: Command, coordinator: &Coordinator) -> Option<Intent> {
    match command {
        Command::Add(title) => {
            // mirrors the disabled input field while a mutation runs
            if coordinator.snapshot().await.input_disabled {
                println!("busy, try again in a moment");
                return None;
            }
            Some(Intent::Add { title })
        }
        Command::Remove(id) => Some(Intent::Delete { id }),
        Command::Toggle(id) => {
            let todo = find_visible(coordinator, id).await?;
            let completed = !todo.completed;
            Some(Intent::Update {
                todo: todo.with_completed(completed),
            })
        }
        Command::Edit(id, title) => {
            let todo = find_visible(coordinator, id).await?;
            Some(Intent::Update {
                todo: todo.with_title(title),
            })
        }
        Command::Clear => Some(Intent::ClearCompleted),
        Command::ToggleAll => Some(Intent::ToggleAll),
        Command::Filter(filter) => Some(Intent::SetFilter { filter }),
        Command::Dismiss => Some(Intent::DismissError),
        Command::List | Command::Help | Command::Quit => None,
    }
}

async fn find_visible(
    coordinator: &Coordinator,
    id: i64,
) -> Option<todo_core::todo::Todo> {
    let snapshot = coordinator.snapshot().await;
    match snapshot.todos.iter().find(|t| t.id == id) {
        Some(todo) => Some(todo.clone()),
        None => {
            println!("no visible todo #{}", id);
            None
        }
    }
}
