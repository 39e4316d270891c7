//! Reachability, connectivity and ordering algorithms for `AdjacencyGraph`.
//!
//! Everything here works through the container's public API and never
//! mutates its input. Working state (reachability rows, degree counters,
//! visited flags) is indexed by vertex insertion index.

use std::collections::VecDeque;

use super::adjacency_graph::AdjacencyGraph;
use super::invariants::{debug_invariant, is_topological_order};
use crate::error::{GraphError, Result};

/// A breadth-first traversal over index adjacency lists.
///
/// Yields vertex indices in discovery order. The visited set survives
/// [`Bfs::restart`], so repeated restarts partition the vertices into the
/// components reachable from each new seed.
pub struct Bfs<'a> {
    adjacency: &'a [Vec<usize>],
    visited: Vec<bool>,
    queue: VecDeque<usize>,
}

impl<'a> Bfs<'a> {
    /// Creates a traversal that has not been seeded yet.
    pub fn new(adjacency: &'a [Vec<usize>]) -> Self {
        Self {
            adjacency,
            visited: vec![false; adjacency.len()],
            queue: VecDeque::new(),
        }
    }

    /// Seeds the traversal with `start` unless it was already visited.
    ///
    /// Returns `true` if `start` was newly seeded.
    pub fn restart(&mut self, start: usize) -> bool {
        if start >= self.visited.len() || self.visited[start] {
            return false;
        }
        self.visited[start] = true;
        self.queue.push_back(start);
        true
    }

    /// Seeds the traversal with the direct successors of `start`, leaving
    /// `start` itself unvisited so it is only yielded if a cycle leads back.
    pub fn from_successors(adjacency: &'a [Vec<usize>], start: usize) -> Self {
        let mut bfs = Self::new(adjacency);
        if let Some(successors) = adjacency.get(start) {
            for &v in successors {
                bfs.restart(v);
            }
        }
        bfs
    }

    /// Returns `true` if `index` has been discovered.
    pub fn is_visited(&self, index: usize) -> bool {
        self.visited.get(index).copied().unwrap_or(false)
    }
}

impl Iterator for Bfs<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for &v in &self.adjacency[u] {
            if v < self.visited.len() && !self.visited[v] {
                self.visited[v] = true;
                self.queue.push_back(v);
            }
        }

        Some(u)
    }
}

/// Copies the arcs of `graph` into index adjacency lists.
fn directed_adjacency<T>(graph: &AdjacencyGraph<T>) -> Vec<Vec<usize>> {
    (0..graph.vertex_count())
        .map(|u| graph.neighbor_indices(u).collect())
        .collect()
}

/// Index adjacency lists with every arc also present in reverse.
fn undirected_adjacency<T>(graph: &AdjacencyGraph<T>) -> Vec<Vec<usize>> {
    let n = graph.vertex_count();
    let mut adjacency = vec![Vec::new(); n];
    for u in 0..n {
        for v in graph.neighbor_indices(u) {
            adjacency[u].push(v);
            if u != v {
                adjacency[v].push(u);
            }
        }
    }
    adjacency
}

/// `reach[i][j]` is set when `i -> j` is an arc.
fn arc_matrix<T>(graph: &AdjacencyGraph<T>) -> Vec<Vec<bool>> {
    let n = graph.vertex_count();
    let mut reach = vec![vec![false; n]; n];
    for (i, row) in reach.iter_mut().enumerate() {
        for j in graph.neighbor_indices(i) {
            row[j] = true;
        }
    }
    reach
}

/// ORs `pivot` into `row` when `row` reaches the pivot vertex.
#[inline]
fn merge_through(row: &mut [bool], pivot_index: usize, pivot: &[bool]) {
    if row[pivot_index] {
        for (r, &p) in row.iter_mut().zip(pivot) {
            *r |= p;
        }
    }
}

/// Warshall's algorithm in row form: for each pivot `k`, every row that
/// reaches `k` absorbs row `k`. Row `k` does not change during its own step,
/// so a snapshot of it is exact.
fn close_rows(reach: &mut [Vec<bool>]) {
    for k in 0..reach.len() {
        let pivot = reach[k].clone();

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            reach
                .par_iter_mut()
                .for_each(|row| merge_through(row, k, &pivot));
        }

        #[cfg(not(feature = "parallel"))]
        {
            for row in reach.iter_mut() {
                merge_through(row, k, &pivot);
            }
        }
    }
}

/// Computes the transitive closure of `graph`.
///
/// The result has the same vertices, capacity and insertion order as
/// `graph`, and holds the arc `u -> v` exactly when `v` is reachable from
/// `u` through one or more arcs. A vertex gets a self-loop only if it lies on
/// a cycle. Arcs of each vertex are listed in target insertion order.
///
/// With the `parallel` feature, the row updates of each pivot run on `rayon`.
///
/// # Errors
/// Returns [`GraphError::AllocationFailure`] if the result graph cannot be
/// allocated. Container errors are propagated unchanged.
pub fn transitive_closure<T: PartialEq + Clone>(
    graph: &AdjacencyGraph<T>,
) -> Result<AdjacencyGraph<T>> {
    let mut reach = arc_matrix(graph);
    close_rows(&mut reach);

    let mut closure = AdjacencyGraph::new(graph.capacity())?;
    for label in graph.vertices() {
        closure.add_vertex(label.clone())?;
    }
    for (i, row) in reach.iter().enumerate() {
        for (j, &reachable) in row.iter().enumerate() {
            if reachable {
                closure.add_arc_by_index(i, j)?;
            }
        }
    }

    trace_debug!(
        vertices = closure.vertex_count(),
        arcs = closure.arc_count(),
        "computed transitive closure"
    );
    Ok(closure)
}

/// Returns `true` if `graph` is weakly connected: ignoring arc direction,
/// a single traversal from the first vertex reaches every vertex.
///
/// Graphs with zero or one vertex are connected.
pub fn is_connected<T>(graph: &AdjacencyGraph<T>) -> bool {
    let n = graph.vertex_count();
    if n <= 1 {
        return true;
    }

    let adjacency = undirected_adjacency(graph);
    let mut bfs = Bfs::new(&adjacency);
    bfs.restart(0);
    let connected = bfs.count() == n;

    trace_debug!(vertices = n, connected, "checked weak connectivity");
    connected
}

/// Labels every vertex with the id of its weakly connected component.
///
/// `result[i]` is the component of the vertex at insertion index `i`.
/// Component ids are assigned `0, 1, ...` in order of their first vertex.
pub fn weakly_connected_components<T>(graph: &AdjacencyGraph<T>) -> Vec<usize> {
    let n = graph.vertex_count();
    let adjacency = undirected_adjacency(graph);
    let mut bfs = Bfs::new(&adjacency);
    let mut component = vec![usize::MAX; n];
    let mut next_id = 0usize;

    for start in 0..n {
        if !bfs.restart(start) {
            continue;
        }
        for u in bfs.by_ref() {
            component[u] = next_id;
        }
        next_id += 1;
    }

    component
}

/// Returns the labels reachable from `label` through one or more arcs, in
/// breadth-first discovery order. `label` itself is included only if it lies
/// on a cycle.
///
/// # Errors
/// Returns [`GraphError::UnknownVertex`] if `label` is not a vertex.
pub fn reachable_from<T: PartialEq + Clone>(
    graph: &AdjacencyGraph<T>,
    label: &T,
) -> Result<Vec<T>> {
    let start = graph.index_of(label).ok_or(GraphError::UnknownVertex)?;
    let adjacency = directed_adjacency(graph);

    Ok(Bfs::from_successors(&adjacency, start)
        .filter_map(|v| graph.vertex(v).cloned())
        .collect())
}

/// Kahn's algorithm over insertion indices.
///
/// The ready queue is first-in first-out and is seeded with the initial
/// sources in insertion order; a vertex becoming ready later joins the back.
fn topological_indices<T>(graph: &AdjacencyGraph<T>) -> Result<Vec<usize>> {
    let n = graph.vertex_count();
    let mut in_degree = vec![0usize; n];
    for u in 0..n {
        for v in graph.neighbor_indices(u) {
            in_degree[v] += 1;
        }
    }

    // Sources in increasing order for determinism.
    let mut ready: VecDeque<usize> = (0..n).filter(|&u| in_degree[u] == 0).collect();
    let mut emitted = vec![false; n];
    let mut order = Vec::with_capacity(n);

    while let Some(u) = ready.pop_front() {
        debug_invariant(!emitted[u], "vertex emitted twice");
        emitted[u] = true;
        order.push(u);

        for v in graph.neighbor_indices(u) {
            in_degree[v] -= 1;
            if in_degree[v] == 0 {
                ready.push_back(v);
            }
        }
    }

    let remaining = emitted.iter().filter(|&&done| !done).count();
    if remaining > 0 {
        trace_debug!(remaining, "topological sort found a cycle");
        return Err(GraphError::CycleDetected { remaining });
    }

    debug_invariant(
        !cfg!(debug_assertions) || is_topological_order(&order, &directed_adjacency(graph)),
        "Kahn order must place every arc source before its target",
    );
    Ok(order)
}

/// Orders the vertices of `graph` so that every arc goes from an earlier
/// vertex to a later one.
///
/// The result is deterministic: vertices with no incoming arc are emitted in
/// insertion order, and every other vertex follows in the order it became
/// ready.
///
/// # Errors
/// Returns [`GraphError::CycleDetected`] if `graph` has a cycle (including
/// a self-loop). No partial order is returned.
pub fn topological_sort<T: Clone>(graph: &AdjacencyGraph<T>) -> Result<Vec<T>> {
    let order = topological_indices(graph)?;
    trace_debug!(vertices = order.len(), "topological sort succeeded");
    Ok(order
        .into_iter()
        .filter_map(|u| graph.vertex(u).cloned())
        .collect())
}

/// Returns `true` if `graph` has no cycle.
pub fn is_acyclic<T>(graph: &AdjacencyGraph<T>) -> bool {
    topological_indices(graph).is_ok()
}
