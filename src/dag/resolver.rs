// src/dag/resolver.rs

use std::collections::VecDeque;

use thiserror::Error;
use tracing::{debug, warn};

use crate::dag::graph::DependencyGraph;
use crate::task::{Task, TaskSet};

/// The task set has no complete order: it contains a cycle (a
/// self-requirement included) or a prerequisite that never resolves.
///
/// Carries no information about which tasks are involved.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("circular dependency detected")]
pub struct CycleDetected;

/// Order `tasks` so that every prerequisite precedes the tasks requiring it.
///
/// Ties are broken FIFO: tasks with no prerequisites are emitted in input
/// order, and a task unblocked mid-sort is queued in the order its last
/// prerequisite's dependents were recorded. No canonical key is used.
///
/// The input is only borrowed; remaining-prerequisite counts live in a
/// private vector for the duration of the call. The returned tasks are
/// clones of the input tasks with `requires` untouched.
pub fn sort(tasks: &TaskSet) -> Result<Vec<Task>, CycleDetected> {
    let graph = DependencyGraph::from_task_set(tasks);
    debug!(
        tasks = tasks.len(),
        edges = graph.edge_count(),
        prerequisites = graph.prerequisites().count(),
        "resolver: built dependency graph"
    );

    let items = tasks.tasks();
    let mut remaining: Vec<usize> = items.iter().map(|t| t.requires.len()).collect();

    let mut queue: VecDeque<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, task)| task.is_root())
        .map(|(index, _)| index)
        .collect();

    let mut order: Vec<usize> = Vec::with_capacity(items.len());

    while let Some(index) = queue.pop_front() {
        order.push(index);

        for &dependent in graph.dependents_of(&items[index].name) {
            let count = &mut remaining[dependent];
            // Already released (only reachable with duplicate task names).
            if *count == 0 {
                continue;
            }
            *count -= 1;
            if *count == 0 {
                queue.push_back(dependent);
            }
        }
    }

    if order.len() != items.len() {
        warn!(
            resolved = order.len(),
            total = items.len(),
            "resolver: dependency cycle detected"
        );
        return Err(CycleDetected);
    }

    Ok(order.into_iter().map(|index| items[index].clone()).collect())
}
