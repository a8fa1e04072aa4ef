//! In-memory directed graph and its traversals.

pub mod builder;
pub mod digraph;
pub mod path;
pub mod traversal;
pub mod visited;

pub use builder::GraphBuilder;
pub use digraph::Graph;
pub use path::PathDirection;
pub use traversal::TraversalOrder;
pub use visited::VisitedMap;
