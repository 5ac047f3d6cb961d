use std::collections::HashMap;

use crate::graph::VertexId;

/// Rebuilds the start-to-end vertex sequence from a predecessor table.
///
/// Returns `[start]` when `start == end` (the trivial path, cost zero), and
/// the empty sequence when `end` has no predecessor entry, which is the
/// unambiguous "unreachable" signal. Callers must treat emptiness as
/// failure, not as a path of length zero.
///
/// Expects an engine-produced table: a chain of entries rooted at `start`,
/// with `start` itself absent. Following it backward from `end` therefore
/// terminates at `start`.
pub fn reconstruct(
    predecessors: &HashMap<VertexId, VertexId>,
    start: VertexId,
    end: VertexId,
) -> Vec<VertexId> {
    if start == end {
        return vec![start];
    }
    if !predecessors.contains_key(&end) {
        return Vec::new();
    }

    let mut path = Vec::new();
    let mut step = Some(end);
    while let Some(vertex) = step {
        path.push(vertex);
        step = predecessors.get(&vertex).copied();
    }
    path.reverse();
    path
}
