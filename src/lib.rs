//! # `adjgraph` - Adjacency-List Directed Graphs
//!
//! A generic directed graph with a fixed vertex capacity, stored as one
//! adjacency list per vertex, plus three classic algorithms built on its
//! public API: transitive closure, connectivity testing and topological
//! sorting.
//!
//! ## Guarantees
//!
//! ### Structural Invariants
//! - **Unique labels**: no two vertices compare equal.
//! - **No dangling arcs**: every arc target is a vertex of the same graph.
//! - **No repeated arcs**: an adjacency list never names the same target twice.
//!   Self-loops are permitted.
//! - **Bounded size**: the vertex count never exceeds the capacity fixed at
//!   construction.
//!
//! ### Failure Atomicity
//! Every fallible operation validates its preconditions before mutating, so
//! an `Err` leaves the graph exactly as it was. Debug builds re-check the
//! invariants after every mutation.
//!
//! ### Ownership
//! Copies and sub-graphs are deep: they share no storage with their source.
//! Query results (`list_vertices`, `list_adjacent`, algorithm outputs) are
//! freshly allocated.
//!
//! ## Algorithms
//!
//! - [`transitive_closure`]: Warshall's algorithm, returns a new graph.
//! - [`is_connected`]: weak connectivity (arc direction ignored).
//! - [`topological_sort`]: Kahn's algorithm, sources emitted in insertion order,
//!   fails with [`GraphError::CycleDetected`] on cyclic input.
//!
//! ## Cargo Features
//!
//! - `tracing`: emit `tracing` events for construction, removal and algorithm results.
//! - `parallel`: run the transitive-closure row updates on `rayon`.
//!
//! ## Example
//!
//! ```rust
//! use adjgraph::{is_connected, topological_sort, AdjacencyGraph};
//!
//! # fn main() -> adjgraph::Result<()> {
//! let mut g = AdjacencyGraph::new(3)?;
//! for v in ["shirt", "tie", "jacket"] {
//!     g.add_vertex(v)?;
//! }
//! g.add_arc(&"shirt", &"tie")?;
//! g.add_arc(&"tie", &"jacket")?;
//!
//! assert!(is_connected(&g));
//! assert_eq!(topological_sort(&g)?, vec!["shirt", "tie", "jacket"]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{
    is_acyclic, is_connected, reachable_from, topological_sort, transitive_closure,
    weakly_connected_components, AdjacencyGraph, Bfs,
};
