use log::{debug, trace};
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

use crate::algorithm::observer::SearchObserver;
use crate::algorithm::path;
use crate::data_structures::Frontier;
use crate::graph::{Graph, VertexId};

/// Classic Dijkstra with a lazy-deletion frontier, instrumented so an
/// observer sees every pop, relaxation, rejection, and close.
///
/// The run is strictly single-threaded: the distance table, predecessor
/// table, and frontier live only for the duration of one call and are
/// mutated by nothing but the loop body. There is no cancellation hook; a
/// host wanting early abort signals out-of-band from its observer and
/// discards the returned path.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra engine instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Computes the shortest path from `start` to `end` without observation.
    ///
    /// Returns the vertex sequence from `start` to `end` inclusive, `[start]`
    /// when the two coincide, and the empty sequence when `end` is
    /// unreachable or either endpoint is not in the graph. Emptiness is the
    /// only failure signal; no error is raised for unreachability.
    pub fn find_shortest_path<W>(
        &self,
        graph: &Graph<W>,
        start: VertexId,
        end: VertexId,
    ) -> Vec<VertexId>
    where
        W: Float + Zero + Debug + Copy + Ord,
    {
        self.find_shortest_path_observed(graph, start, end, &mut ())
    }

    /// Same as [`Self::find_shortest_path`], reporting each step to
    /// `observer`.
    ///
    /// Event order is deterministic for a fixed graph and endpoint pair:
    /// edges are scanned in their insertion order, ties on candidate
    /// distance are rejections (the first-discovered equal-cost path wins),
    /// and running twice on an unmodified graph replays the identical
    /// sequence. Correctness assumes non-negative weights; the model does
    /// not check this.
    pub fn find_shortest_path_observed<W, O>(
        &self,
        graph: &Graph<W>,
        start: VertexId,
        end: VertexId,
        observer: &mut O,
    ) -> Vec<VertexId>
    where
        W: Float + Zero + Debug + Copy + Ord,
        O: SearchObserver<W> + ?Sized,
    {
        if !graph.contains_vertex(start) || !graph.contains_vertex(end) {
            debug!("search aborted: {:?} or {:?} not in graph", start, end);
            return Vec::new();
        }

        // Absent entries in the distance table stand for +infinity.
        let mut distances: HashMap<VertexId, W> = HashMap::new();
        let mut predecessors: HashMap<VertexId, VertexId> = HashMap::new();
        let mut frontier = Frontier::new();

        distances.insert(start, W::zero());
        frontier.push(start, W::zero());

        debug!("searching {:?} -> {:?}", start, end);

        while let Some((current, popped_distance)) = frontier.pop() {
            observer.on_vertex_visiting(current);

            if current == end {
                // Early exit: the target's own neighbors are never scanned.
                observer.on_vertex_finalized(current);
                break;
            }

            let best = distances
                .get(&current)
                .copied()
                .unwrap_or_else(W::infinity);
            if popped_distance > best {
                // Stale entry, superseded by a smaller push since. Close it
                // without a neighbor scan.
                trace!("skipping stale entry for {:?}", current);
                observer.on_vertex_finalized(current);
                continue;
            }

            for edge in graph.edges_of(current) {
                let candidate = best + edge.weight();
                let improves = match distances.get(&edge.target()) {
                    None => true,
                    Some(known) => candidate < *known,
                };

                if improves {
                    trace!("relaxing {:?} to {:?}", edge.id(), candidate);
                    distances.insert(edge.target(), candidate);
                    predecessors.insert(edge.target(), current);
                    frontier.push(edge.target(), candidate);
                    observer.on_edge_relaxed(edge, candidate);
                } else {
                    observer.on_edge_rejected(edge, candidate);
                }
            }

            observer.on_vertex_finalized(current);
        }

        let result = path::reconstruct(&predecessors, start, end);
        debug!(
            "search {:?} -> {:?} finished, path length {}",
            start,
            end,
            result.len()
        );
        result
    }
}
