//! Reads whitespace-separated edge lists into a [`Graph`].
//!
//! One entry per line. A single token registers a vertex; two tokens
//! `from to` register `from` if needed and add the edge. `#` starts a
//! comment and blank lines are skipped.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::graph::Graph;
use crate::types::{GraphConfig, GraphError, GraphResult};

/// Reader for edge-list text files.
pub struct EdgeListReader;

impl EdgeListReader {
    /// Read an edge-list file into a Graph.
    pub fn read_from_file(path: &Path, config: GraphConfig) -> GraphResult<Graph> {
        let file = std::fs::File::open(path)?;
        Self::read_from(file, config)
    }

    /// Parse an in-memory edge list.
    pub fn read_from_str(text: &str, config: GraphConfig) -> GraphResult<Graph> {
        Self::read_from(text.as_bytes(), config)
    }

    /// Read from any reader into a Graph.
    ///
    /// Repeated vertices and edges are skipped, not rejected: a file that
    /// lists the same edge twice still describes the same graph.
    pub fn read_from(reader: impl Read, config: GraphConfig) -> GraphResult<Graph> {
        let mut graph = Graph::with_config(config);

        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            let content = match line.split_once('#') {
                Some((before, _)) => before,
                None => line.as_str(),
            };

            let tokens: Vec<&str> = content.split_whitespace().collect();
            match tokens.as_slice() {
                [] => {}
                [vertex] => {
                    if !graph.contains_vertex(vertex) {
                        graph.add_vertex(*vertex)?;
                    }
                }
                [from, to] => {
                    if !graph.contains_vertex(from) {
                        graph.add_vertex(*from)?;
                    }
                    if graph.has_edge(from, to) {
                        log::debug!(
                            "line {}: skipping repeated edge {} -> {}",
                            line_no,
                            from,
                            to
                        );
                    } else {
                        graph.add_edge(from, *to)?;
                    }
                }
                _ => {
                    return Err(GraphError::Parse {
                        line: line_no,
                        message: format!(
                            "expected `vertex` or `from to`, got {} fields",
                            tokens.len()
                        ),
                    });
                }
            }
        }

        Ok(graph)
    }
}
