//! Fluent API for building Graph instances.

use crate::types::{GraphConfig, GraphResult, VertexId};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Vertices and edges are recorded in call order and replayed against a
/// fresh graph by [`GraphBuilder::build`], which stops at the first
/// rejected mutation.
pub struct GraphBuilder {
    config: GraphConfig,
    vertices: Vec<VertexId>,
    edges: Vec<(VertexId, VertexId)>,
}

impl GraphBuilder {
    /// Create a new builder with the default config.
    pub fn new() -> Self {
        Self {
            config: GraphConfig::default(),
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Use a specific config for the built graph.
    pub fn config(&mut self, config: GraphConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Register a vertex.
    pub fn vertex(&mut self, id: impl Into<VertexId>) -> &mut Self {
        self.vertices.push(id.into());
        self
    }

    /// Add an edge. `from` must also be registered via [`GraphBuilder::vertex`].
    pub fn edge(&mut self, from: impl Into<VertexId>, to: impl Into<VertexId>) -> &mut Self {
        self.edges.push((from.into(), to.into()));
        self
    }

    /// Register `from` and every target, then link `from` to each target
    /// in the given order. Already-registered ids are not registered again.
    pub fn chain_from(&mut self, from: &str, targets: &[&str]) -> &mut Self {
        for id in std::iter::once(from).chain(targets.iter().copied()) {
            if !self.vertices.iter().any(|v| v == id) {
                self.vertices.push(id.to_string());
            }
        }
        for target in targets {
            self.edges.push((from.to_string(), target.to_string()));
        }
        self
    }

    /// Build the final Graph.
    pub fn build(&self) -> GraphResult<Graph> {
        let mut graph = Graph::with_config(self.config);
        for id in &self.vertices {
            graph.add_vertex(id.as_str())?;
        }
        for (from, to) in &self.edges {
            graph.add_edge(from, to.as_str())?;
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
