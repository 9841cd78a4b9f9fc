//! Todo module
//!
//! This module contains todo-related types and remote store access.

mod filter;
mod http_store;
mod model;
mod repository;

pub use filter::FilterStatus;
pub use http_store::HttpRemoteStore;
pub use model::*;
pub use repository::RemoteStore;
