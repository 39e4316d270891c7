//! Structural invariant checks for adjacency graphs.
//!
//! The container calls [`debug_invariant`] after every mutation so that debug
//! builds catch a broken vertex index immediately, while release builds pay
//! nothing.

/// Debug-asserts a structural invariant with a message.
#[inline]
pub(crate) fn debug_invariant(condition: bool, message: &str) {
    debug_assert!(condition, "Graph invariant violated: {}", message);
}

/// Returns the first violated invariant of a vertex table and its adjacency
/// lists, or `None` when the structure is sound.
///
/// Checks that:
/// 1. there is exactly one adjacency list per vertex
/// 2. the vertex count does not exceed `capacity`
/// 3. no two vertices are equal
/// 4. every arc target names an existing vertex
/// 5. no adjacency list repeats a target
pub(crate) fn structure_violation<T: PartialEq>(
    vertices: &[T],
    adjacency: &[Vec<usize>],
    capacity: usize,
) -> Option<&'static str> {
    if vertices.len() != adjacency.len() {
        return Some("vertex table and adjacency table lengths differ");
    }
    if vertices.len() > capacity {
        return Some("vertex count exceeds capacity");
    }
    for (i, a) in vertices.iter().enumerate() {
        if vertices[i + 1..].iter().any(|b| a == b) {
            return Some("duplicate vertex label");
        }
    }
    let n = vertices.len();
    for targets in adjacency {
        for (pos, &v) in targets.iter().enumerate() {
            if v >= n {
                return Some("arc target out of bounds");
            }
            if targets[pos + 1..].contains(&v) {
                return Some("adjacency list repeats a target");
            }
        }
    }
    None
}

/// Returns `true` when `order` lists each of the `adjacency.len()` vertices
/// exactly once and every arc goes forward in it.
pub(crate) fn is_topological_order(order: &[usize], adjacency: &[Vec<usize>]) -> bool {
    let n = adjacency.len();
    if order.len() != n {
        return false;
    }

    let mut position = vec![usize::MAX; n];
    for (pos, &u) in order.iter().enumerate() {
        if u >= n || position[u] != usize::MAX {
            return false;
        }
        position[u] = pos;
    }

    adjacency
        .iter()
        .enumerate()
        .all(|(u, targets)| targets.iter().all(|&v| position[u] < position[v]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sound_structure_passes() {
        let vertices = vec!['a', 'b', 'c'];
        let adjacency = vec![vec![1, 2], vec![2], vec![0]];
        assert_eq!(structure_violation(&vertices, &adjacency, 3), None);
    }

    #[test]
    fn each_violation_is_reported() {
        assert!(structure_violation(&[1, 2], &[vec![]], 4).is_some());
        assert!(structure_violation(&[1, 2], &[vec![], vec![]], 1).is_some());
        assert!(structure_violation(&[1, 1], &[vec![], vec![]], 4).is_some());
        assert!(structure_violation(&[1, 2], &[vec![2], vec![]], 4).is_some());
        assert!(structure_violation(&[1, 2], &[vec![1, 1], vec![]], 4).is_some());
    }

    #[test]
    fn topological_order_check() {
        // 0 -> 1 -> 2
        let adjacency = vec![vec![1], vec![2], vec![]];
        assert!(is_topological_order(&[0, 1, 2], &adjacency));
        assert!(!is_topological_order(&[1, 0, 2], &adjacency));
        assert!(!is_topological_order(&[0, 1], &adjacency));
        assert!(!is_topological_order(&[0, 0, 2], &adjacency));
    }
}
