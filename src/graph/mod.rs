pub mod model;

pub use model::{Edge, EdgeId, Graph, Vertex, VertexId};
