//! Error type shared by the graph container and its algorithms.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors reported by [`AdjacencyGraph`](crate::AdjacencyGraph) and the
/// functions in [`algorithms`](crate::graph::basic::algorithms).
///
/// Every failing operation leaves the graph exactly as it was before the call.
///
/// # Error Categories
///
/// ## Contract violations (logic errors)
/// - [`GraphError::InvalidArgument`] - zero capacity, or unknown labels handed to
///   sub-graph extraction
/// - [`GraphError::DuplicateVertex`] - the label is already a vertex
/// - [`GraphError::UnknownVertex`] - the label is not a vertex
/// - [`GraphError::CapacityExceeded`] - the graph is full
/// - [`GraphError::CycleDetected`] - topological sort on a cyclic graph
///
/// ## Resource errors
/// - [`GraphError::AllocationFailure`] - vertex or adjacency storage could not be reserved
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A construction parameter or argument list was malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Attempted to add a vertex whose label is already present.
    #[error("vertex already belongs to the graph")]
    DuplicateVertex,

    /// Referenced a vertex that is not present.
    #[error("vertex does not belong to the graph")]
    UnknownVertex,

    /// Attempted to add a vertex to a full graph.
    #[error("graph is full: capacity of {capacity} vertices reached")]
    CapacityExceeded {
        /// The fixed capacity of the graph.
        capacity: usize,
    },

    /// Storage for vertices or adjacency lists could not be obtained.
    #[error("memory allocation failed: {0}")]
    AllocationFailure(#[from] TryReserveError),

    /// The graph is not acyclic, so no topological order exists.
    #[error("graph contains a cycle: {remaining} vertices could not be ordered")]
    CycleDetected {
        /// Number of vertices left unprocessed when no zero in-degree vertex remained.
        remaining: usize,
    },
}

impl GraphError {
    /// Returns `true` for contract violations, `false` for resource exhaustion.
    pub fn is_logic_error(&self) -> bool {
        !matches!(self, Self::AllocationFailure(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logic_error_classification() {
        assert!(GraphError::DuplicateVertex.is_logic_error());
        assert!(GraphError::UnknownVertex.is_logic_error());
        assert!(GraphError::CapacityExceeded { capacity: 3 }.is_logic_error());
        assert!(GraphError::CycleDetected { remaining: 2 }.is_logic_error());
        assert!(GraphError::InvalidArgument("x".into()).is_logic_error());

        let reserve_err = Vec::<u64>::new().try_reserve_exact(usize::MAX).unwrap_err();
        assert!(!GraphError::from(reserve_err).is_logic_error());
    }

    #[test]
    fn messages() {
        assert_eq!(
            GraphError::CapacityExceeded { capacity: 4 }.to_string(),
            "graph is full: capacity of 4 vertices reached"
        );
        assert_eq!(
            GraphError::CycleDetected { remaining: 5 }.to_string(),
            "graph contains a cycle: 5 vertices could not be ordered"
        );
    }
}
