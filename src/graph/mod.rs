//! Directed graphs over labelled vertices.
//!
//! Graph implementations are organized into categories:
//! - `basic`: adjacency-list container and the classic algorithms over it

pub mod basic;

// Re-export commonly used types from submodules
pub use basic::{
    is_acyclic, is_connected, reachable_from, topological_sort, transitive_closure,
    weakly_connected_components, AdjacencyGraph, Bfs,
};
