// src/request/mod.rs

//! Wire schema for sort requests and conversion into a [`TaskSet`].
//!
//! Responsibilities:
//! - Define the serde-backed request model (`model.rs`).
//! - Load task files from disk or stdin (`loader.rs`).
//! - Validate the preconditions the resolver relies on (`validate.rs`).
//!
//! [`TaskSet`]: crate::task::TaskSet

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_tasks_from_path, load_tasks_from_reader};
pub use model::{TaskRequest, TasksRequest};
pub use validate::validate_request;
