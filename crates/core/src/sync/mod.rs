//! Client-side state synchronization
//!
//! This module mediates every mutation between view intents and the
//! remote store, reconciling optimistic state (a pending-create
//! placeholder, pending-delete and pending-update markers) against the
//! outcomes of asynchronous network calls.

mod coordinator;
mod state;

pub use coordinator::{Coordinator, Intent};
pub use state::Snapshot;
