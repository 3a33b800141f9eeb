// src/render/response.rs

use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Minimal structured view of a sorted task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    pub name: String,
    pub command: String,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            name: task.name.clone(),
            command: task.command.clone(),
        }
    }
}

pub fn to_responses(tasks: &[Task]) -> Vec<TaskResponse> {
    tasks.iter().map(TaskResponse::from).collect()
}
