#![allow(dead_code)]

use tasksort::request::{TaskRequest, TasksRequest};
use tasksort::task::{Task, TaskSet};

/// Shorthand for a task with the given prerequisites.
pub fn task(name: &str, command: &str, requires: &[&str]) -> Task {
    TaskBuilder::new(name, command).requires(requires).build()
}

/// Builder for `TaskSet` to simplify test setup. Tasks keep insertion order.
pub struct TaskSetBuilder {
    tasks: Vec<Task>,
}

impl TaskSetBuilder {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Add a task whose command is `echo <name>`.
    pub fn with(self, name: &str, requires: &[&str]) -> Self {
        self.with_task(task(name, &format!("echo {name}"), requires))
    }

    pub fn build(self) -> TaskSet {
        TaskSet::new(self.tasks)
    }
}

impl Default for TaskSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `Task`.
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new(name: &str, command: &str) -> Self {
        Self {
            task: Task::new(name, command, Vec::<String>::new()),
        }
    }

    pub fn require(mut self, dep: &str) -> Self {
        self.task.requires.insert(dep.to_string());
        self
    }

    pub fn requires(mut self, deps: &[&str]) -> Self {
        for dep in deps {
            self = self.require(dep);
        }
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}

/// Builder for the wire-level `TasksRequest`.
pub struct TasksRequestBuilder {
    request: TasksRequest,
}

impl TasksRequestBuilder {
    pub fn new() -> Self {
        Self {
            request: TasksRequest::new(Vec::new()),
        }
    }

    pub fn with(mut self, name: &str, command: &str, requires: &[&str]) -> Self {
        self.request.tasks.push(TaskRequest::new(
            name,
            command,
            requires.iter().map(|s| s.to_string()).collect(),
        ));
        self
    }

    /// Add a task with `requires` omitted entirely.
    pub fn with_no_requires(mut self, name: &str, command: &str) -> Self {
        self.request.tasks.push(TaskRequest {
            name: name.to_string(),
            command: command.to_string(),
            requires: None,
        });
        self
    }

    pub fn build(self) -> TasksRequest {
        self.request
    }
}

impl Default for TasksRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
