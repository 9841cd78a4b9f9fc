//! Core library for Remote Todo
//!
//! This crate contains the client-side business logic, including:
//! - Todo model and view filtering
//! - Remote store access
//! - State synchronization between view intents and the remote API

pub mod error;
pub mod sync;
pub mod todo;

pub use error::{Error, StoreError};
pub type Result<T> = std::result::Result<T, Error>;
