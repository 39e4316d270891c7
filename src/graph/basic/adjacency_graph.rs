//! A generic adjacency-list directed graph with a fixed vertex capacity.
//!
//! Vertices are identified by their labels. Internally each vertex occupies a
//! slot in an insertion-ordered table and arcs are stored as slot indices:
//! - `vertices[i]` is the label of slot `i`
//! - `adjacency[i]` lists the slots reachable from slot `i` by one arc, in
//!   arc-insertion order
//!
//! Every mutating operation validates its preconditions before touching the
//! tables, so a failed call leaves the graph unchanged.

use core::fmt;

use super::invariants::{debug_invariant, structure_violation};
use crate::error::{GraphError, Result};

/// A directed graph over labels of type `T`, backed by adjacency lists.
///
/// Labels only need equality; lookups are linear scans over the vertex table.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(n)\) | Duplicate check over the vertex table |
/// | `remove_vertex` | \(O(n + m)\) | Must purge and renumber every adjacency list |
/// | `add_arc` | \(O(n + \text{out-degree})\) | Label lookup, then duplicate check |
/// | `remove_arc` | \(O(n + \text{out-degree})\) | Label lookup, then linear scan |
/// | `out_degree` | \(O(n)\) | Label lookup, then `Vec::len` |
/// | `in_degree` | \(O(n + m)\) | Scans all adjacency lists |
/// | `subgraph` | \(O(n \cdot r + m)\) | `r` = number of removed labels |
#[derive(Debug)]
pub struct AdjacencyGraph<T> {
    vertices: Vec<T>,
    adjacency: Vec<Vec<usize>>,
    capacity: usize,
}

impl<T> AdjacencyGraph<T> {
    /// Creates an empty graph able to hold up to `capacity` vertices.
    ///
    /// # Errors
    /// - [`GraphError::InvalidArgument`] if `capacity` is zero.
    /// - [`GraphError::AllocationFailure`] if the vertex tables cannot be reserved.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(GraphError::InvalidArgument(
                "graph capacity must be positive".to_string(),
            ));
        }

        let mut vertices = Vec::new();
        vertices.try_reserve_exact(capacity)?;
        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(capacity)?;

        trace_debug!(capacity, "created adjacency graph");
        Ok(Self {
            vertices,
            adjacency,
            capacity,
        })
    }

    /// Maximum number of vertices the graph can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of arcs.
    pub fn arc_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if no further vertex can be added.
    pub fn is_full(&self) -> bool {
        self.vertices.len() == self.capacity
    }

    /// Returns the label stored at insertion index `index`.
    pub fn vertex(&self, index: usize) -> Option<&T> {
        self.vertices.get(index)
    }

    /// Iterates over the vertex labels in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.vertices.iter()
    }

    /// Returns the insertion indices of the out-neighbors of the vertex at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn neighbor_indices(&self, index: usize) -> impl ExactSizeIterator<Item = usize> + '_ {
        assert!(index < self.vertex_count(), "vertex index {index} out of bounds");
        self.adjacency[index].iter().copied()
    }

    /// Adds the arc between the vertices at insertion indices `from` and `to`.
    ///
    /// Returns `Ok(false)` if the arc was already present.
    ///
    /// # Errors
    /// - [`GraphError::UnknownVertex`] if either index is out of bounds.
    /// - [`GraphError::AllocationFailure`] if the adjacency list cannot grow.
    pub fn add_arc_by_index(&mut self, from: usize, to: usize) -> Result<bool> {
        let n = self.vertex_count();
        if from >= n || to >= n {
            return Err(GraphError::UnknownVertex);
        }

        let targets = &mut self.adjacency[from];
        if targets.contains(&to) {
            return Ok(false);
        }
        targets.try_reserve(1)?;
        targets.push(to);
        Ok(true)
    }

    /// Checks I1-I4: unique labels, bounded size, arcs naming existing
    /// vertices, and no repeated arc.
    pub fn validate_invariants(&self) -> bool
    where
        T: PartialEq,
    {
        structure_violation(&self.vertices, &self.adjacency, self.capacity).is_none()
    }

    #[inline]
    fn debug_check(&self)
    where
        T: PartialEq,
    {
        let violation = if cfg!(debug_assertions) {
            structure_violation(&self.vertices, &self.adjacency, self.capacity)
        } else {
            None
        };
        debug_invariant(violation.is_none(), violation.unwrap_or_default());
    }
}

impl<T: PartialEq> AdjacencyGraph<T> {
    /// Returns the insertion index of `label`, if it is a vertex.
    pub fn index_of(&self, label: &T) -> Option<usize> {
        self.vertices.iter().position(|v| v == label)
    }

    fn require(&self, label: &T) -> Result<usize> {
        self.index_of(label).ok_or(GraphError::UnknownVertex)
    }

    /// Adds `label` as a new vertex in the next free slot.
    ///
    /// Returns the insertion index of the new vertex.
    ///
    /// # Errors
    /// - [`GraphError::DuplicateVertex`] if `label` is already a vertex,
    ///   whether or not the graph is full.
    /// - [`GraphError::CapacityExceeded`] if the graph is full.
    pub fn add_vertex(&mut self, label: T) -> Result<usize> {
        if self.has_vertex(&label) {
            return Err(GraphError::DuplicateVertex);
        }
        if self.is_full() {
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        // Both tables hold `capacity` slots (see `new` and `Clone`), so these never reallocate.
        let idx = self.vertices.len();
        self.vertices.push(label);
        self.adjacency.push(Vec::new());
        self.debug_check();
        Ok(idx)
    }

    /// Adds the arc `from -> to`. Self-loops are allowed.
    ///
    /// Returns `Ok(false)` if the arc was already present; the graph never
    /// holds the same arc twice.
    ///
    /// # Errors
    /// - [`GraphError::UnknownVertex`] if either endpoint is not a vertex.
    /// - [`GraphError::AllocationFailure`] if the adjacency list cannot grow.
    pub fn add_arc(&mut self, from: &T, to: &T) -> Result<bool> {
        let u = self.require(from)?;
        let v = self.require(to)?;
        let inserted = self.add_arc_by_index(u, v)?;
        self.debug_check();
        Ok(inserted)
    }

    /// Removes the arc `from -> to` if present.
    ///
    /// Returns whether an arc was removed; removing a missing arc between
    /// existing vertices is a no-op.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if either endpoint is not a vertex.
    pub fn remove_arc(&mut self, from: &T, to: &T) -> Result<bool> {
        let u = self.require(from)?;
        let v = self.require(to)?;

        let targets = &mut self.adjacency[u];
        match targets.iter().position(|&w| w == v) {
            Some(pos) => {
                targets.remove(pos);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes `label` and every arc that starts or ends at it.
    ///
    /// Vertices inserted after `label` move down one slot; their relative
    /// order, and the order of every adjacency list, is preserved.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if `label` is not a vertex.
    pub fn remove_vertex(&mut self, label: &T) -> Result<()> {
        let vertex = self.require(label)?;

        // Remove incoming arcs (u -> vertex) and shift indices above `vertex` down by 1.
        for (u, targets) in self.adjacency.iter_mut().enumerate() {
            if u == vertex {
                continue;
            }
            targets.retain(|&v| v != vertex);
            for v in targets.iter_mut() {
                if *v > vertex {
                    *v -= 1;
                }
            }
        }

        // Outgoing arcs are dropped with the slot.
        let _outgoing = self.adjacency.remove(vertex);
        self.vertices.remove(vertex);
        trace_trace!(vertex, purged_outgoing = _outgoing.len(), "removed vertex");
        self.debug_check();
        Ok(())
    }

    /// Returns `true` if `label` is a vertex.
    pub fn has_vertex(&self, label: &T) -> bool {
        self.index_of(label).is_some()
    }

    /// Returns `true` if the arc `from -> to` exists. Unknown labels yield `false`.
    pub fn has_arc(&self, from: &T, to: &T) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(u), Some(v)) => self.adjacency[u].contains(&v),
            _ => false,
        }
    }

    /// Returns the number of arcs leaving `label`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if `label` is not a vertex.
    pub fn out_degree(&self, label: &T) -> Result<usize> {
        let u = self.require(label)?;
        Ok(self.adjacency[u].len())
    }

    /// Returns the number of arcs, across the whole graph, ending at `label`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if `label` is not a vertex.
    pub fn in_degree(&self, label: &T) -> Result<usize> {
        let v = self.require(label)?;
        Ok(self
            .adjacency
            .iter()
            .filter(|targets| targets.contains(&v))
            .count())
    }
}

impl<T: PartialEq + Clone> AdjacencyGraph<T> {
    /// Returns a deep copy of the graph, reporting allocation failure instead of aborting.
    ///
    /// # Errors
    /// Returns [`GraphError::AllocationFailure`] if storage cannot be reserved.
    pub fn try_clone(&self) -> Result<Self> {
        let mut copy = Self::new(self.capacity)?;
        copy.vertices.extend(self.vertices.iter().cloned());
        for targets in &self.adjacency {
            let mut list = Vec::new();
            list.try_reserve_exact(targets.len())?;
            list.extend_from_slice(targets);
            copy.adjacency.push(list);
        }
        copy.debug_check();
        Ok(copy)
    }

    /// Builds an independent graph holding every vertex except those in
    /// `removed`, and every arc whose endpoints both survive.
    ///
    /// The sub-graph keeps the source capacity and insertion order.
    ///
    /// # Errors
    /// - [`GraphError::InvalidArgument`] if a label in `removed` is not a vertex.
    /// - [`GraphError::AllocationFailure`] if storage cannot be reserved.
    pub fn subgraph(&self, removed: &[T]) -> Result<Self> {
        let n = self.vertex_count();
        let mut keep = vec![true; n];
        for label in removed {
            let idx = self.index_of(label).ok_or_else(|| {
                GraphError::InvalidArgument(
                    "sub-graph removal set names a vertex outside the graph".to_string(),
                )
            })?;
            keep[idx] = false;
        }

        // Old slot -> new slot for surviving vertices.
        let mut renumber = vec![None; n];
        let mut next = 0usize;
        for (old, slot) in renumber.iter_mut().enumerate() {
            if keep[old] {
                *slot = Some(next);
                next += 1;
            }
        }

        let mut sub = Self::new(self.capacity)?;
        for (old, label) in self.vertices.iter().enumerate() {
            if !keep[old] {
                continue;
            }
            let survivors = self.adjacency[old].iter().filter_map(|&v| renumber[v]);
            let mut list = Vec::new();
            list.try_reserve_exact(survivors.clone().count())?;
            list.extend(survivors);
            sub.vertices.push(label.clone());
            sub.adjacency.push(list);
        }

        trace_debug!(
            kept = sub.vertex_count(),
            removed = n - sub.vertex_count(),
            "extracted sub-graph"
        );
        sub.debug_check();
        Ok(sub)
    }

    /// Returns the vertex labels in insertion order.
    pub fn list_vertices(&self) -> Vec<T> {
        self.vertices.clone()
    }

    /// Returns the out-neighbors of `label` in arc-insertion order.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if `label` is not a vertex.
    pub fn list_adjacent(&self, label: &T) -> Result<Vec<T>> {
        let u = self.require(label)?;
        Ok(self.adjacency[u]
            .iter()
            .map(|&v| self.vertices[v].clone())
            .collect())
    }
}

/// Deep copy that keeps room for `capacity` vertices, like [`AdjacencyGraph::new`].
impl<T: Clone> Clone for AdjacencyGraph<T> {
    fn clone(&self) -> Self {
        let mut vertices = Vec::with_capacity(self.capacity);
        vertices.extend(self.vertices.iter().cloned());
        let mut adjacency = Vec::with_capacity(self.capacity);
        adjacency.extend(self.adjacency.iter().cloned());
        Self {
            vertices,
            adjacency,
            capacity: self.capacity,
        }
    }
}

/// Writes one `from -> to` line per arc, in vertex then arc-insertion order.
impl<T: fmt::Display> fmt::Display for AdjacencyGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (u, targets) in self.adjacency.iter().enumerate() {
            for &v in targets {
                writeln!(f, "{} -> {}", self.vertices[u], self.vertices[v])?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with(n: i32, arcs: &[(i32, i32)]) -> AdjacencyGraph<i32> {
        let mut g = AdjacencyGraph::new(n as usize).unwrap();
        for v in 1..=n {
            g.add_vertex(v).unwrap();
        }
        for (u, v) in arcs {
            g.add_arc(u, v).unwrap();
        }
        g
    }

    #[test]
    fn adjacency_graph_construction() {
        assert!(matches!(
            AdjacencyGraph::<i32>::new(0),
            Err(GraphError::InvalidArgument(_))
        ));

        let g = AdjacencyGraph::<i32>::new(3).unwrap();
        assert_eq!(g.capacity(), 3);
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.arc_count(), 0);
        assert!(g.is_empty());
        assert!(!g.is_full());
    }

    #[test]
    fn adjacency_graph_huge_capacity_reports_allocation_failure() {
        let err = AdjacencyGraph::<u64>::new(usize::MAX).unwrap_err();
        assert!(matches!(err, GraphError::AllocationFailure(_)));
        assert!(!err.is_logic_error());
    }

    #[test]
    fn adjacency_graph_vertex_rules() {
        let mut g = AdjacencyGraph::new(2).unwrap();
        assert_eq!(g.add_vertex("a").unwrap(), 0);
        assert_eq!(g.add_vertex("a"), Err(GraphError::DuplicateVertex));
        assert_eq!(g.add_vertex("b").unwrap(), 1);
        assert!(g.is_full());
        assert_eq!(
            g.add_vertex("c"),
            Err(GraphError::CapacityExceeded { capacity: 2 })
        );
        assert_eq!(g.list_vertices(), vec!["a", "b"]);
        assert_eq!(g.index_of(&"b"), Some(1));
        assert_eq!(g.vertex(0), Some(&"a"));
        assert_eq!(g.vertex(2), None);
    }

    #[test]
    fn adjacency_graph_duplicate_reported_when_full() {
        let mut g = AdjacencyGraph::new(1).unwrap();
        assert_eq!(g.add_vertex(7), Ok(0));
        assert_eq!(g.add_vertex(7), Err(GraphError::DuplicateVertex));
        assert_eq!(
            g.add_vertex(8),
            Err(GraphError::CapacityExceeded { capacity: 1 })
        );
        assert_eq!(g.list_vertices(), vec![7]);
    }

    #[test]
    fn adjacency_graph_copies_keep_full_capacity() {
        let g = graph_with(2, &[(1, 2)]);
        let mut partial = AdjacencyGraph::new(5).unwrap();
        partial.add_vertex(1).unwrap();

        let cloned = partial.clone();
        assert!(cloned.vertices.capacity() >= 5);
        assert!(cloned.adjacency.capacity() >= 5);

        let mut assigned = graph_with(1, &[]);
        assigned.clone_from(&partial);
        assert!(assigned.vertices.capacity() >= 5);

        let copied = partial.try_clone().unwrap();
        assert!(copied.vertices.capacity() >= 5);
        assert!(copied.adjacency.capacity() >= 5);

        let mut grown = g.clone();
        grown.remove_vertex(&1).unwrap();
        assert_eq!(grown.add_vertex(3), Ok(1));
        assert!(g.has_vertex(&1));
    }

    #[test]
    fn adjacency_graph_dynamic_operations() {
        let mut g = graph_with(3, &[(1, 2), (1, 3), (2, 3)]);

        assert_eq!(g.arc_count(), 3);
        assert!(g.has_arc(&1, &2));
        assert!(g.has_arc(&1, &3));
        assert!(g.has_arc(&2, &3));
        assert!(!g.has_arc(&3, &1));

        assert_eq!(g.add_arc(&1, &2), Ok(false));
        assert_eq!(g.arc_count(), 3);

        assert_eq!(g.remove_arc(&1, &2), Ok(true));
        assert!(!g.has_arc(&1, &2));
        assert_eq!(g.remove_arc(&1, &2), Ok(false));
        assert_eq!(g.arc_count(), 2);

        assert_eq!(g.add_arc(&1, &9), Err(GraphError::UnknownVertex));
        assert_eq!(g.remove_arc(&9, &1), Err(GraphError::UnknownVertex));
        assert_eq!(g.arc_count(), 2);
    }

    #[test]
    fn adjacency_graph_remove_vertex_purges_arcs() {
        let mut g = graph_with(4, &[(1, 2), (2, 3), (3, 2), (4, 2), (2, 4), (1, 4)]);
        g.remove_vertex(&2).unwrap();

        assert!(!g.has_vertex(&2));
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.list_vertices(), vec![1, 3, 4]);
        assert_eq!(g.list_adjacent(&1).unwrap(), vec![4]);
        assert_eq!(g.list_adjacent(&3).unwrap(), Vec::<i32>::new());
        assert_eq!(g.in_degree(&4), Ok(1));
        assert_eq!(g.out_degree(&4), Ok(0));
        assert!(g.validate_invariants());

        assert_eq!(g.remove_vertex(&2), Err(GraphError::UnknownVertex));
        // The freed slot can be reused.
        assert_eq!(g.add_vertex(5).unwrap(), 3);
    }

    #[test]
    fn adjacency_graph_degrees() {
        let g = graph_with(3, &[(1, 2), (1, 3), (2, 3)]);

        assert_eq!(g.out_degree(&1), Ok(2));
        assert_eq!(g.out_degree(&2), Ok(1));
        assert_eq!(g.out_degree(&3), Ok(0));

        assert_eq!(g.in_degree(&1), Ok(0));
        assert_eq!(g.in_degree(&2), Ok(1));
        assert_eq!(g.in_degree(&3), Ok(2));

        assert_eq!(g.in_degree(&7), Err(GraphError::UnknownVertex));
        assert_eq!(g.out_degree(&7), Err(GraphError::UnknownVertex));
        assert_eq!(g.list_adjacent(&7), Err(GraphError::UnknownVertex));
    }

    #[test]
    fn adjacency_graph_self_loop() {
        let mut g = graph_with(2, &[(1, 1)]);
        assert!(g.has_arc(&1, &1));
        assert_eq!(g.in_degree(&1), Ok(1));
        assert_eq!(g.out_degree(&1), Ok(1));
        g.remove_vertex(&1).unwrap();
        assert_eq!(g.arc_count(), 0);
    }

    #[test]
    fn adjacency_graph_neighbor_indices() {
        let g = graph_with(3, &[(1, 3), (1, 2)]);
        assert_eq!(g.neighbor_indices(0).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(g.list_adjacent(&1).unwrap(), vec![3, 2]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn adjacency_graph_neighbor_indices_out_of_bounds() {
        let g = graph_with(1, &[]);
        let _ = g.neighbor_indices(1).count();
    }

    #[test]
    fn adjacency_graph_try_clone_is_deep() {
        let g = graph_with(3, &[(1, 2), (2, 3)]);
        let mut copy = g.try_clone().unwrap();
        assert_eq!(copy.capacity(), 3);
        assert_eq!(copy.to_string(), g.to_string());

        copy.remove_vertex(&2).unwrap();
        copy.add_vertex(9).unwrap();
        assert!(g.has_arc(&1, &2));
        assert!(!g.has_vertex(&9));
        assert_eq!(g.vertex_count(), 3);
    }

    #[test]
    fn adjacency_graph_clone_from_replaces_contents() {
        let source = graph_with(3, &[(1, 2)]);
        let mut target = graph_with(1, &[]);
        target.clone_from(&source);
        assert_eq!(target.capacity(), 3);
        assert_eq!(target.list_vertices(), vec![1, 2, 3]);
        assert!(target.has_arc(&1, &2));
    }

    #[test]
    fn adjacency_graph_subgraph() {
        let g = graph_with(5, &[(1, 2), (2, 3), (3, 4), (4, 5), (5, 1), (1, 4)]);
        let sub = g.subgraph(&[2, 5]).unwrap();

        assert_eq!(sub.list_vertices(), vec![1, 3, 4]);
        assert_eq!(sub.capacity(), 5);
        assert!(sub.has_arc(&3, &4));
        assert!(sub.has_arc(&1, &4));
        assert_eq!(sub.arc_count(), 2);
        assert!(sub.validate_invariants());

        assert!(matches!(
            g.subgraph(&[2, 42]),
            Err(GraphError::InvalidArgument(_))
        ));
        assert_eq!(g.subgraph(&[]).unwrap().to_string(), g.to_string());
    }

    #[test]
    fn adjacency_graph_display() {
        let g = graph_with(3, &[(2, 1), (1, 3), (1, 2)]);
        assert_eq!(g.to_string(), "1 -> 3\n1 -> 2\n2 -> 1\n");
        assert_eq!(graph_with(2, &[]).to_string(), "");
    }
}
