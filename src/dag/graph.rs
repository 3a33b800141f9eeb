// src/dag/graph.rs

use std::collections::HashMap;

use crate::task::TaskSet;

/// Adjacency from a prerequisite name to the tasks that directly require it.
///
/// Dependents are stored as indices into the [`TaskSet`] the graph was built
/// from, in the order those tasks appear in the input. Only names that are
/// somebody's prerequisite get an entry; a name that is required but absent
/// from the set still gets one, its dependents simply never unblock.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    dependents: HashMap<String, Vec<usize>>,
    edge_count: usize,
}

impl DependencyGraph {
    /// Build the graph with a single scan of `tasks` in input order.
    pub fn from_task_set(tasks: &TaskSet) -> Self {
        let mut dependents: HashMap<String, Vec<usize>> = HashMap::new();
        let mut edge_count = 0;

        for (index, task) in tasks.iter().enumerate() {
            for prerequisite in task.requires.iter() {
                dependents
                    .entry(prerequisite.clone())
                    .or_default()
                    .push(index);
                edge_count += 1;
            }
        }

        Self {
            dependents,
            edge_count,
        }
    }

    /// Immediate dependents of `name` (tasks that list it in `requires`).
    pub fn dependents_of(&self, name: &str) -> &[usize] {
        self.dependents
            .get(name)
            .map(|d| d.as_slice())
            .unwrap_or(&[])
    }

    /// Names that at least one task requires.
    pub fn prerequisites(&self) -> impl Iterator<Item = &str> {
        self.dependents.keys().map(|s| s.as_str())
    }

    /// Total number of prerequisite edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
