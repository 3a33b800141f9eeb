// src/dag/mod.rs

//! Dependency resolution.
//!
//! - [`graph`] builds the ephemeral prerequisite -> dependents adjacency.
//! - [`resolver`] runs the FIFO (Kahn) topological sort over a task set and
//!   reports [`CycleDetected`] when no complete order exists.

pub mod graph;
pub mod resolver;

pub use graph::DependencyGraph;
pub use resolver::{CycleDetected, sort};
