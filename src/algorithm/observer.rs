use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::graph::{Edge, EdgeId, VertexId};

/// Per-step observation hooks for the shortest path engine.
///
/// Every method is a no-op by default, so a subscriber implements only the
/// events it cares about. Notification is one-directional: the engine never
/// changes its behavior based on what an observer does, and for a fixed
/// graph and (start, end) pair the event sequence is deterministic, so a
/// visual replay of a run is reproducible.
///
/// Callbacks run synchronously on the engine's thread. A subscriber may
/// deliberately pace inside a callback (e.g. sleep to animate each step)
/// without affecting traversal order.
pub trait SearchObserver<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// The vertex was popped from the frontier as the closest unexpanded
    /// one and is about to be examined.
    fn on_vertex_visiting(&mut self, _vertex: VertexId) {}

    /// The vertex is closed: its neighbor scan finished, or its frontier
    /// entry was stale and skipped, or it is the target and the search
    /// stopped early.
    fn on_vertex_finalized(&mut self, _vertex: VertexId) {}

    /// Examining the edge found a strictly smaller total distance to its
    /// target than previously known.
    fn on_edge_relaxed(&mut self, _edge: &Edge<W>, _new_distance: W) {}

    /// The candidate distance over this edge was equal to or worse than the
    /// best known distance to its target.
    fn on_edge_rejected(&mut self, _edge: &Edge<W>, _candidate_distance: W) {}
}

/// The zero-subscriber observer.
impl<W> SearchObserver<W> for ()
where
    W: Float + Zero + Debug + Copy,
{
}

/// One recorded engine event. See [`SearchObserver`] for when each fires.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent<W>
where
    W: Float + Zero + Debug + Copy,
{
    Visit(VertexId),
    Finalize(VertexId),
    Relax { edge: EdgeId, distance: W },
    Reject { edge: EdgeId, distance: W },
}

/// An observer that records the full event sequence of a run, for replay or
/// for asserting on engine behavior in tests.
#[derive(Debug, Clone)]
pub struct TraceRecorder<W>
where
    W: Float + Zero + Debug + Copy,
{
    events: Vec<TraceEvent<W>>,
}

impl<W> Default for TraceRecorder<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> TraceRecorder<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn new() -> Self {
        TraceRecorder { events: Vec::new() }
    }

    /// The events recorded so far, in emission order
    pub fn events(&self) -> &[TraceEvent<W>] {
        &self.events
    }

    /// Drops all recorded events, keeping the recorder reusable across runs
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn into_events(self) -> Vec<TraceEvent<W>> {
        self.events
    }
}

impl<W> SearchObserver<W> for TraceRecorder<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn on_vertex_visiting(&mut self, vertex: VertexId) {
        self.events.push(TraceEvent::Visit(vertex));
    }

    fn on_vertex_finalized(&mut self, vertex: VertexId) {
        self.events.push(TraceEvent::Finalize(vertex));
    }

    fn on_edge_relaxed(&mut self, edge: &Edge<W>, new_distance: W) {
        self.events.push(TraceEvent::Relax {
            edge: edge.id(),
            distance: new_distance,
        });
    }

    fn on_edge_rejected(&mut self, edge: &Edge<W>, candidate_distance: W) {
        self.events.push(TraceEvent::Reject {
            edge: edge.id(),
            distance: candidate_distance,
        });
    }
}
