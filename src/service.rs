// src/service.rs

//! Task service abstraction.
//!
//! The HTTP layer talks to a `TaskService` instead of calling the resolver
//! directly, so tests can swap in a fake that records calls.
//!
//! - [`GraphTaskService`] is the production implementation; it runs
//!   [`crate::dag::sort`].

use tracing::info;

use crate::dag::{self, CycleDetected};
use crate::task::{Task, TaskSet};

/// Trait abstracting how a validated task set gets ordered.
pub trait TaskService: Send + Sync {
    fn sort_tasks(&self, tasks: &TaskSet) -> Result<Vec<Task>, CycleDetected>;
}

/// Production service backed by the FIFO topological sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphTaskService;

impl GraphTaskService {
    pub fn new() -> Self {
        Self
    }
}

impl TaskService for GraphTaskService {
    fn sort_tasks(&self, tasks: &TaskSet) -> Result<Vec<Task>, CycleDetected> {
        let sorted = dag::sort(tasks)?;
        info!(tasks = sorted.len(), "sorted task set");
        Ok(sorted)
    }
}
