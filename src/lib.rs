//! graph-algos — a small in-memory directed graph over string vertices.
//!
//! Vertices and edges are added incrementally; the graph can then be walked
//! breadth-first, depth-first with an explicit stack, or depth-first
//! recursively, and queried for a path between two vertices.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::EdgeListReader;
pub use graph::{Graph, GraphBuilder, PathDirection, TraversalOrder, VisitedMap};
pub use types::{GraphConfig, GraphError, GraphResult, VertexId, PATH_SEPARATOR};
