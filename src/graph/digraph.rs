//! Core graph structure — string vertices with ordered adjacency lists.

use std::collections::HashMap;

use crate::types::{GraphConfig, GraphError, GraphResult, VertexId};

/// Directed graph over string identifiers.
///
/// Each registered vertex maps to its outgoing edges in insertion order.
/// Edge targets do not have to be registered; an unregistered identifier
/// simply has no outgoing edges.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Registered vertex -> outgoing targets, in insertion order.
    adjacency: HashMap<VertexId, Vec<VertexId>>,
    /// Registered vertices in the order they were added.
    order: Vec<VertexId>,
    /// Diagnostics toggle.
    config: GraphConfig,
}

impl Graph {
    /// Create a new empty graph with diagnostics off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty graph with the given configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Current diagnostics configuration.
    pub fn config(&self) -> GraphConfig {
        self.config
    }

    /// Replace the configuration; existing vertices and edges are kept.
    pub fn set_config(&mut self, config: GraphConfig) {
        self.config = config;
    }

    /// Number of registered vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges across all adjacency lists.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Whether `id` was registered with [`Graph::add_vertex`].
    pub fn contains_vertex(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Registered vertices, in registration order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Outgoing edges of `id` in insertion order.
    ///
    /// Any identifier, registered or not, has an adjacency: unknown ones
    /// get the empty slice.
    pub fn neighbors(&self, id: &str) -> &[VertexId] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the edge `from -> to` exists.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.neighbors(from).iter().any(|n| n == to)
    }

    /// True iff `id` has no outgoing edges (including unregistered ids).
    pub fn is_leaf(&self, id: &str) -> bool {
        self.neighbors(id).is_empty()
    }

    /// Register a new vertex with no outgoing edges.
    pub fn add_vertex(&mut self, id: impl Into<VertexId>) -> GraphResult<()> {
        let id = id.into();
        if self.adjacency.contains_key(&id) {
            return Err(self.reject(GraphError::DuplicateVertex(id)));
        }
        self.order.push(id.clone());
        self.adjacency.insert(id, Vec::new());
        Ok(())
    }

    /// Append `to` to the outgoing edges of `from`.
    ///
    /// `from` must be registered; `to` need not be.
    pub fn add_edge(&mut self, from: &str, to: impl Into<VertexId>) -> GraphResult<()> {
        let to = to.into();
        let Some(targets) = self.adjacency.get_mut(from) else {
            return Err(self.reject(GraphError::UnknownVertex(from.to_string())));
        };
        if targets.contains(&to) {
            return Err(self.reject(GraphError::DuplicateEdge {
                from: from.to_string(),
                to,
            }));
        }
        targets.push(to);
        Ok(())
    }

    /// Log a rejected mutation when diagnostics are on and hand the error back.
    fn reject(&self, err: GraphError) -> GraphError {
        if self.config.debug {
            log::warn!("{}", err);
        }
        err
    }

    /// Registered vertex keys, in arbitrary order (used to seed visited maps).
    pub(crate) fn vertex_keys(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }
}
