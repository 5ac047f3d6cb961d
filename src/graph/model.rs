use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

use crate::{Error, Result};

/// Handle to a vertex in a [`Graph`].
///
/// Ids are never reused within one graph, so a handle kept across a
/// `remove_vertex` simply dangles: lookups on it return `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

/// Handle to a directed edge in a [`Graph`]. Same non-reuse guarantee as
/// [`VertexId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(usize);

/// A directed edge. The source is implicit: it is the vertex whose edge list
/// owns this value. The target is a non-owning handle into the graph's
/// vertex arena.
#[derive(Debug, Clone)]
pub struct Edge<W>
where
    W: Float + Zero + Debug + Copy,
{
    id: EdgeId,
    target: VertexId,
    weight: W,
}

impl<W> Edge<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn target(&self) -> VertexId {
        self.target
    }

    /// The edge weight. Must be non-negative for the engine's correctness
    /// guarantee to hold; the model does not enforce this (see
    /// [`Graph::add_edge`]).
    pub fn weight(&self) -> W {
        self.weight
    }
}

/// A named vertex owning its outgoing edges in insertion order.
#[derive(Debug, Clone)]
pub struct Vertex<W>
where
    W: Float + Zero + Debug + Copy,
{
    name: String,
    edges: Vec<Edge<W>>,
}

impl<W> Vertex<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outgoing edges in insertion order. This order is the engine's
    /// neighbor scan order, so it is part of observable behavior.
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }
}

/// A weighted directed graph with named vertices.
///
/// Vertices live in a central arena; each vertex owns its outgoing edges and
/// edges refer to their targets by id, so ownership stays tree-shaped. The
/// graph persists across engine runs and may be edited between them, but not
/// while a traversal over it is in progress (single-writer discipline is the
/// caller's responsibility).
#[derive(Debug, Clone)]
pub struct Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    vertices: HashMap<VertexId, Vertex<W>>,

    /// Monotonic id counters; removal never frees an id for reuse.
    next_vertex: usize,
    next_edge: usize,
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(())
}

impl<W> Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        Graph {
            vertices: HashMap::new(),
            next_vertex: 0,
            next_edge: 0,
        }
    }

    /// Adds a vertex with the given display name and returns its id.
    ///
    /// Fails with [`Error::InvalidName`] if the name is empty or
    /// whitespace-only.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> Result<VertexId> {
        let name = name.into();
        validate_name(&name)?;

        let id = VertexId(self.next_vertex);
        self.next_vertex += 1;
        self.vertices.insert(
            id,
            Vertex {
                name,
                edges: Vec::new(),
            },
        );
        Ok(id)
    }

    /// Renames a vertex, with the same name validation as [`Self::add_vertex`].
    pub fn rename_vertex(&mut self, vertex: VertexId, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        validate_name(&name)?;

        let entry = self
            .vertices
            .get_mut(&vertex)
            .ok_or(Error::UnknownVertex(vertex))?;
        entry.name = name;
        Ok(())
    }

    /// Adds a directed edge and returns its id. The edge is appended to the
    /// source's list, preserving insertion order.
    ///
    /// Negative weights are NOT rejected here: Dijkstra's non-negativity
    /// precondition is the caller's to enforce at creation time, and a graph
    /// that violates it yields paths with no correctness guarantee.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId, weight: W) -> Result<EdgeId> {
        if !self.vertices.contains_key(&target) {
            return Err(Error::UnknownVertex(target));
        }
        let entry = self
            .vertices
            .get_mut(&source)
            .ok_or(Error::UnknownVertex(source))?;

        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        entry.edges.push(Edge { id, target, weight });
        Ok(id)
    }

    /// Removes an edge. Idempotent: returns false if the edge was already
    /// gone.
    pub fn remove_edge(&mut self, edge: EdgeId) -> bool {
        for vertex in self.vertices.values_mut() {
            let before = vertex.edges.len();
            vertex.edges.retain(|e| e.id != edge);
            if vertex.edges.len() < before {
                return true;
            }
        }
        false
    }

    /// Removes a vertex together with its outgoing edges and every edge in
    /// the rest of the graph that targets it. Returns false if the vertex
    /// was already gone.
    pub fn remove_vertex(&mut self, vertex: VertexId) -> bool {
        if self.vertices.remove(&vertex).is_none() {
            return false;
        }
        for other in self.vertices.values_mut() {
            other.edges.retain(|e| e.target != vertex);
        }
        true
    }

    /// Updates the weight of an existing edge. Returns false if the edge no
    /// longer exists. Negative weights are not rejected (see
    /// [`Self::add_edge`]).
    pub fn set_edge_weight(&mut self, edge: EdgeId, weight: W) -> bool {
        for vertex in self.vertices.values_mut() {
            if let Some(e) = vertex.edges.iter_mut().find(|e| e.id == edge) {
                e.weight = weight;
                return true;
            }
        }
        false
    }

    /// Gets the weight of an edge if it still exists
    pub fn edge_weight(&self, edge: EdgeId) -> Option<W> {
        self.vertices
            .values()
            .flat_map(|v| v.edges.iter())
            .find(|e| e.id == edge)
            .map(|e| e.weight)
    }

    /// Returns the outgoing edges of a vertex in insertion order; empty for
    /// a dangling id.
    pub fn edges_of(&self, vertex: VertexId) -> impl Iterator<Item = &Edge<W>> {
        self.vertices
            .get(&vertex)
            .map(|v| v.edges.as_slice())
            .unwrap_or(&[])
            .iter()
    }

    pub fn vertex(&self, vertex: VertexId) -> Option<&Vertex<W>> {
        self.vertices.get(&vertex)
    }

    /// Display name of a vertex, if it still exists
    pub fn vertex_name(&self, vertex: VertexId) -> Option<&str> {
        self.vertices.get(&vertex).map(|v| v.name.as_str())
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains_key(&vertex)
    }

    /// Returns the number of vertices in the graph
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|v| v.edges.len()).sum()
    }

    /// Iterates over all vertex ids, in no particular order
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }
}
