// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

use crate::dag::CycleDetected;

#[derive(Error, Debug)]
pub enum TasksortError {
    #[error("Circular dependency found")]
    CircularDependency(#[from] CycleDetected),

    #[error("Some of the prerequisites of task {task} do not exist (unknown task '{prerequisite}')")]
    UnknownPrerequisite { task: String, prerequisite: String },

    #[error("Duplicate task name: {0}")]
    DuplicateTaskName(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TasksortError {
    /// Whether the error was caused by the caller's input rather than the
    /// environment (used to pick between 400 and 500 in the HTTP layer).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            TasksortError::CircularDependency(_)
                | TasksortError::UnknownPrerequisite { .. }
                | TasksortError::DuplicateTaskName(_)
                | TasksortError::InvalidRequest(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TasksortError>;
