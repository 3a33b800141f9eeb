use std::sync::{Arc, Mutex};

use tasksort::dag::CycleDetected;
use tasksort::service::TaskService;
use tasksort::task::{Task, TaskSet};

/// A fake task service that:
/// - records every task set it was asked to sort
/// - returns a canned response instead of running the resolver.
pub struct RecordingTaskService {
    response: Result<Vec<Task>, CycleDetected>,
    calls: Arc<Mutex<Vec<TaskSet>>>,
}

impl RecordingTaskService {
    pub fn returning(tasks: Vec<Task>, calls: Arc<Mutex<Vec<TaskSet>>>) -> Self {
        Self {
            response: Ok(tasks),
            calls,
        }
    }

    pub fn failing(calls: Arc<Mutex<Vec<TaskSet>>>) -> Self {
        Self {
            response: Err(CycleDetected),
            calls,
        }
    }
}

impl TaskService for RecordingTaskService {
    fn sort_tasks(&self, tasks: &TaskSet) -> Result<Vec<Task>, CycleDetected> {
        {
            let mut guard = self.calls.lock().unwrap();
            guard.push(tasks.clone());
        }
        self.response.clone()
    }
}
