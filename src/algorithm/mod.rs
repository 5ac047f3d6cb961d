pub mod dijkstra;
pub mod observer;
pub mod path;

pub use dijkstra::Dijkstra;
pub use observer::{SearchObserver, TraceEvent, TraceRecorder};
