// tests/resolver_ordering.rs

use std::error::Error;

use tasksort::dag::{self, DependencyGraph};
use tasksort::task::{Task, TaskSet};
use tasksort_test_utils::builders::{TaskSetBuilder, task};
use tasksort_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

fn names(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|t| t.name.as_str()).collect()
}

#[test]
fn empty_task_set_sorts_to_empty_sequence() -> TestResult {
    init_tracing();

    let sorted = dag::sort(&TaskSet::default())?;
    assert!(sorted.is_empty());
    Ok(())
}

#[test]
fn single_task_is_returned_unchanged() -> TestResult {
    let only = task("task-1", "task command", &[]);
    let tasks = TaskSet::new(vec![only.clone()]);

    let sorted = dag::sort(&tasks)?;
    assert_eq!(sorted, vec![only]);
    Ok(())
}

#[test]
fn prerequisites_move_ahead_of_their_dependent() -> TestResult {
    // Input order [C, A, B]; C requires A and B.
    let tasks = TaskSetBuilder::new()
        .with("C", &["A", "B"])
        .with("A", &[])
        .with("B", &[])
        .build();

    let sorted = dag::sort(&tasks)?;
    assert_eq!(names(&sorted), vec!["A", "B", "C"]);
    Ok(())
}

#[test]
fn already_sorted_input_keeps_its_order() -> TestResult {
    let tasks = TaskSetBuilder::new()
        .with("task-1", &[])
        .with("task-2", &[])
        .with("task-3", &["task-1", "task-2"])
        .build();

    let sorted = dag::sort(&tasks)?;
    assert_eq!(sorted, tasks.tasks().to_vec());
    Ok(())
}

#[test]
fn resorting_the_output_is_idempotent() -> TestResult {
    let tasks = TaskSetBuilder::new()
        .with("task-4", &["task-2", "task-3"])
        .with("task-3", &["task-1"])
        .with("task-2", &["task-3"])
        .with("task-1", &[])
        .build();

    let first = dag::sort(&tasks)?;
    let second = dag::sort(&TaskSet::new(first.clone()))?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn chain_through_middle_task_is_respected() -> TestResult {
    let tasks = TaskSetBuilder::new()
        .with("task-1", &[])
        .with("task-2", &["task-3"])
        .with("task-3", &["task-1"])
        .with("task-4", &["task-2", "task-3"])
        .build();

    let sorted = dag::sort(&tasks)?;
    assert_eq!(names(&sorted), vec!["task-1", "task-3", "task-2", "task-4"]);
    Ok(())
}

#[test]
fn siblings_sharing_a_prerequisite_keep_input_order() -> TestResult {
    let tasks = TaskSetBuilder::new()
        .with("task-1", &[])
        .with("task-2", &["task-1"])
        .with("task-3", &["task-1"])
        .with("task-4", &["task-2", "task-3"])
        .build();

    let sorted = dag::sort(&tasks)?;
    assert_eq!(names(&sorted), vec!["task-1", "task-2", "task-3", "task-4"]);
    Ok(())
}

#[test]
fn seven_interleaved_tasks_follow_fifo_tie_break() -> TestResult {
    init_tracing();

    let tasks = TaskSetBuilder::new()
        .with("task-1", &[])
        .with("task-2", &["task-1", "task-7"])
        .with("task-3", &["task-1", "task-2"])
        .with("task-4", &["task-6", "task-3"])
        .with("task-5", &["task-6"])
        .with("task-6", &["task-7", "task-2"])
        .with("task-7", &[])
        .build();

    let sorted = dag::sort(&tasks)?;
    assert_eq!(
        names(&sorted),
        vec!["task-1", "task-7", "task-2", "task-3", "task-6", "task-4", "task-5"]
    );
    Ok(())
}

#[test]
fn independent_tasks_keep_input_order() -> TestResult {
    let tasks = TaskSetBuilder::new()
        .with("zeta", &[])
        .with("alpha", &[])
        .with("mid", &[])
        .build();

    let sorted = dag::sort(&tasks)?;
    assert_eq!(names(&sorted), vec!["zeta", "alpha", "mid"]);
    Ok(())
}

#[test]
fn sorting_does_not_touch_the_input() -> TestResult {
    let tasks = TaskSetBuilder::new()
        .with("C", &["A", "B"])
        .with("A", &[])
        .with("B", &["A"])
        .build();
    let before = tasks.clone();

    let sorted = dag::sort(&tasks)?;

    assert_eq!(tasks, before);
    let c = sorted.iter().find(|t| t.name == "C").ok_or("C missing")?;
    assert_eq!(c.requires.len(), 2);
    Ok(())
}

#[test]
fn graph_lists_dependents_in_input_order() {
    let tasks = TaskSetBuilder::new()
        .with("task-1", &[])
        .with("task-2", &["task-1", "task-7"])
        .with("task-3", &["task-1", "task-2"])
        .with("task-6", &["task-7", "task-2"])
        .with("task-7", &[])
        .build();

    let graph = DependencyGraph::from_task_set(&tasks);

    assert_eq!(graph.dependents_of("task-1"), &[1, 2]);
    assert_eq!(graph.dependents_of("task-7"), &[1, 3]);
    assert_eq!(graph.dependents_of("task-2"), &[2, 3]);
    assert!(graph.dependents_of("task-3").is_empty());
    assert_eq!(graph.edge_count(), 6);

    let mut prerequisites: Vec<&str> = graph.prerequisites().collect();
    prerequisites.sort();
    assert_eq!(prerequisites, vec!["task-1", "task-2", "task-7"]);
}
