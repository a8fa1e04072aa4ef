//! CLI command implementations.
//!
//! Each command builds a serializable report and then prints it, either as
//! pretty JSON or as plain text.

use std::path::Path;

use serde::Serialize;

use crate::format::EdgeListReader;
use crate::graph::{Graph, PathDirection, TraversalOrder};
use crate::types::{GraphConfig, GraphResult, PATH_SEPARATOR};

/// Result of an `info` command.
#[derive(Debug, Serialize)]
pub struct InfoReport {
    pub file: String,
    pub vertices: usize,
    pub edges: usize,
    /// Registered vertices with no outgoing edges, in registration order.
    pub leaves: Vec<String>,
}

/// Result of a `traverse` command.
#[derive(Debug, Serialize)]
pub struct TraversalReport {
    pub start: String,
    pub order: TraversalOrder,
    pub visited: Vec<String>,
}

/// Result of a `path` command.
#[derive(Debug, Serialize)]
pub struct PathReport {
    pub from: String,
    pub to: String,
    pub direction: PathDirection,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
}

/// Result of a `leaf` command.
#[derive(Debug, Serialize)]
pub struct LeafReport {
    pub vertex: String,
    pub registered: bool,
    pub leaf: bool,
}

/// Load the edge-list file named on the command line.
pub fn load_graph(path: &Path, verbose: bool) -> GraphResult<Graph> {
    EdgeListReader::read_from_file(path, GraphConfig::new().with_debug(verbose))
}

pub fn info_report(graph: &Graph, path: &Path) -> InfoReport {
    InfoReport {
        file: path.display().to_string(),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        leaves: graph
            .vertices()
            .filter(|v| graph.is_leaf(v))
            .map(str::to_string)
            .collect(),
    }
}

pub fn traversal_report(graph: &Graph, start: &str, order: TraversalOrder) -> TraversalReport {
    TraversalReport {
        start: start.to_string(),
        order,
        visited: graph.traverse(start, order),
    }
}

pub fn path_report(graph: &Graph, from: &str, to: &str, direction: PathDirection) -> PathReport {
    let path = graph.create_path(from, to, direction);
    PathReport {
        from: from.to_string(),
        to: to.to_string(),
        direction,
        found: path.is_some(),
        path,
    }
}

pub fn leaf_report(graph: &Graph, vertex: &str) -> LeafReport {
    LeafReport {
        vertex: vertex.to_string(),
        registered: graph.contains_vertex(vertex),
        leaf: graph.is_leaf(vertex),
    }
}

/// Pretty-print a report as JSON.
fn print_json(report: &impl Serialize) {
    println!(
        "{}",
        serde_json::to_string_pretty(report).unwrap_or_default()
    );
}

/// Display vertex/edge counts and leaves.
pub fn cmd_info(graph: &Graph, path: &Path, json: bool) -> GraphResult<()> {
    let report = info_report(graph, path);

    if json {
        print_json(&report);
    } else {
        println!("File: {}", report.file);
        println!("Vertices: {}", report.vertices);
        println!("Edges: {}", report.edges);
        println!("Leaves: {}", report.leaves.join(", "));
    }
    Ok(())
}

/// Run one traversal and print the visit order.
pub fn cmd_traverse(
    graph: &Graph,
    start: &str,
    order: TraversalOrder,
    json: bool,
) -> GraphResult<()> {
    let report = traversal_report(graph, start, order);

    if json {
        print_json(&report);
    } else {
        println!(
            "{} from {}: {}",
            report.order.name(),
            report.start,
            report.visited.join(", ")
        );
    }
    Ok(())
}

/// Look for a path and print it. Returns whether one was found.
pub fn cmd_path(
    graph: &Graph,
    from: &str,
    to: &str,
    direction: PathDirection,
    json: bool,
) -> GraphResult<bool> {
    let report = path_report(graph, from, to, direction);

    if json {
        print_json(&report);
    } else {
        match &report.path {
            Some(p) => println!("{}", p.join(PATH_SEPARATOR)),
            None => println!("no link found"),
        }
    }
    Ok(report.found)
}

/// Report whether a vertex has no outgoing edges.
pub fn cmd_leaf(graph: &Graph, vertex: &str, json: bool) -> GraphResult<()> {
    let report = leaf_report(graph, vertex);

    if json {
        print_json(&report);
    } else {
        let state = if report.leaf { "leaf" } else { "not a leaf" };
        println!("{}: {}", report.vertex, state);
    }
    Ok(())
}
