//! Basic graph implementations.
//!
//! This module contains the adjacency-list container and the algorithms
//! built on top of its public API.

pub mod adjacency_graph;
pub mod algorithms;
mod invariants;

pub use adjacency_graph::AdjacencyGraph;
pub use algorithms::{
    is_acyclic, is_connected, reachable_from, topological_sort, transitive_closure,
    weakly_connected_components, Bfs,
};
