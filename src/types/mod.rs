//! Shared types for the graph-algos library.

pub mod config;
pub mod error;

pub use config::GraphConfig;
pub use error::{GraphError, GraphResult};

/// Vertex identifier.
pub type VertexId = String;

/// Separator used when rendering a path as text.
pub const PATH_SEPARATOR: &str = " -> ";
