// src/request/validate.rs

use std::collections::HashSet;

use crate::errors::{Result, TasksortError};
use crate::request::model::TasksRequest;
use crate::task::{Task, TaskSet};

impl TryFrom<TasksRequest> for TaskSet {
    type Error = TasksortError;

    fn try_from(request: TasksRequest) -> std::result::Result<Self, Self::Error> {
        validate_request(&request)?;
        Ok(request
            .tasks
            .into_iter()
            .map(|t| {
                let requires = t.requires.unwrap_or_default().into_iter().collect();
                Task {
                    name: t.name,
                    command: t.command,
                    requires,
                }
            })
            .collect())
    }
}

/// Check the preconditions the resolver relies on.
///
/// This checks, in order:
/// - every task name is non-blank
/// - task names are unique
/// - every prerequisite refers to a task in the same request
///
/// A task requiring itself passes here; the resolver reports it as a cycle.
pub fn validate_request(request: &TasksRequest) -> Result<()> {
    ensure_names_present(request)?;
    ensure_unique_names(request)?;
    validate_prerequisites(request)?;
    Ok(())
}

fn ensure_names_present(request: &TasksRequest) -> Result<()> {
    if let Some(position) = request.tasks.iter().position(|t| t.name.trim().is_empty()) {
        return Err(TasksortError::InvalidRequest(format!(
            "task at position {position} has an empty name"
        )));
    }
    Ok(())
}

fn ensure_unique_names(request: &TasksRequest) -> Result<()> {
    let mut seen = HashSet::with_capacity(request.tasks.len());
    for task in request.tasks.iter() {
        if !seen.insert(task.name.as_str()) {
            return Err(TasksortError::DuplicateTaskName(task.name.clone()));
        }
    }
    Ok(())
}

fn validate_prerequisites(request: &TasksRequest) -> Result<()> {
    let names: HashSet<&str> = request.tasks.iter().map(|t| t.name.as_str()).collect();

    for task in request.tasks.iter() {
        if let Some(missing) = task.requires().iter().find(|r| !names.contains(r.as_str())) {
            return Err(TasksortError::UnknownPrerequisite {
                task: task.name.clone(),
                prerequisite: missing.clone(),
            });
        }
    }
    Ok(())
}
