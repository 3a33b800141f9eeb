// src/request/model.rs

use serde::{Deserialize, Serialize};

/// Body of a sort request.
///
/// The same shape is used for JSON bodies and TOML task files:
///
/// ```toml
/// [[tasks]]
/// name = "build"
/// command = "cargo build"
///
/// [[tasks]]
/// name = "test"
/// command = "cargo test"
/// requires = ["build"]
/// ```
///
/// The order of `tasks` is preserved and used as the tie-break when sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasksRequest {
    #[serde(default)]
    pub tasks: Vec<TaskRequest>,
}

/// A single task as sent by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRequest {
    pub name: String,

    pub command: String,

    /// Names of tasks that must come first. Omitted or `null` means none;
    /// duplicates collapse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires: Option<Vec<String>>,
}

impl TaskRequest {
    pub fn new(name: impl Into<String>, command: impl Into<String>, requires: Vec<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            requires: Some(requires),
        }
    }

    /// Declared prerequisites, empty when omitted.
    pub fn requires(&self) -> &[String] {
        self.requires.as_deref().unwrap_or(&[])
    }
}

impl TasksRequest {
    pub fn new(tasks: Vec<TaskRequest>) -> Self {
        Self { tasks }
    }
}
