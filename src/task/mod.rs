// src/task/mod.rs

//! Task data model.
//!
//! - [`Task`] is a value type: name, opaque command, and a set of
//!   prerequisite names.
//! - [`TaskSet`] is the ordered, immutable input to the resolver. Its order
//!   only matters as a tie-break for the output order.

use std::collections::BTreeSet;

/// Canonical task name type.
pub type TaskName = String;

/// A named unit of work with a command and a set of prerequisites.
///
/// Equality compares all three fields; `requires` is compared by membership.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task {
    pub name: TaskName,
    pub command: String,
    pub requires: BTreeSet<TaskName>,
}

impl Task {
    pub fn new<I, S>(name: impl Into<String>, command: impl Into<String>, requires: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            command: command.into(),
            requires: requires.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this task can be scheduled without waiting on anything.
    pub fn is_root(&self) -> bool {
        self.requires.is_empty()
    }
}

/// Ordered sequence of tasks as supplied by the caller.
///
/// Preconditions (checked by [`crate::request`] before construction from a
/// request, not by the resolver): names are unique and every prerequisite
/// names a task in the same set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskSet {
    tasks: Vec<Task>,
}

impl TaskSet {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl From<Vec<Task>> for TaskSet {
    fn from(tasks: Vec<Task>) -> Self {
        Self::new(tasks)
    }
}

impl FromIterator<Task> for TaskSet {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
