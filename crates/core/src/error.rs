//! Error types for the core library

use thiserror::Error;

/// Failure talking to the remote store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
}

/// Operation-level errors.
///
/// The `Display` output of each variant is the exact message shown to
/// the user; transport detail stays available through `source()`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Title should not be empty")]
    EmptyTitle,

    #[error("Unable to load todos")]
    Load(#[source] StoreError),

    #[error("Unable to add a todo")]
    Create(#[source] StoreError),

    #[error("Unable to delete a todo")]
    Delete(#[source] StoreError),

    #[error("Unable to update a todo")]
    Update(#[source] StoreError),
}
