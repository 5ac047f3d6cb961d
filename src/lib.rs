//! Pathwatch - an instrumented single-pair shortest path engine
//!
//! This library computes the shortest path between two vertices of a weighted
//! directed graph with classic Dijkstra, and reports every internal decision
//! (vertex popped, edge relaxed, edge rejected, vertex closed) through an
//! observer interface so a caller can react step by step instead of only
//! consuming the final path.
//!
//! The traversal loop is single-threaded and synchronous; callbacks run on
//! the calling thread in a deterministic order for a given graph and
//! (start, end) pair. A host that wants the search off its main thread runs
//! the whole `find_shortest_path` call on a worker and marshals the
//! callbacks itself. The graph must not be mutated while a traversal over it
//! is in progress.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra,
    observer::{SearchObserver, TraceEvent, TraceRecorder},
};
/// Re-export main types for convenient use
pub use graph::model::{Edge, EdgeId, Graph, VertexId};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex name: {0:?}")]
    InvalidName(String),

    #[error("Unknown vertex: {0:?}")]
    UnknownVertex(VertexId),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
