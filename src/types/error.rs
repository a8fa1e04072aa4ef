//! Error types for the graph-algos library.

use thiserror::Error;

/// All errors that can occur in the graph-algos library.
///
/// None of these are fatal: after any failed operation the graph is left
/// exactly as it was before the call.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex is already registered.
    #[error("vertex {0} already exists")]
    DuplicateVertex(String),

    /// Vertex has never been added.
    #[error("vertex {0} does not exist")]
    UnknownVertex(String),

    /// The edge is already present in the source's adjacency.
    #[error("edge {from} -> {to} already exists")]
    DuplicateEdge { from: String, to: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed edge-list input.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Unrecognized argument value (CLI).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
