//! Path discovery between two vertices.

use std::collections::{HashMap, VecDeque};

use serde::Serialize;

use crate::types::PATH_SEPARATOR;

use super::{Graph, VisitedMap};

/// Which endpoint the search starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathDirection {
    /// Search from the first endpoint toward the second.
    #[default]
    Forward,
    /// Search from the second endpoint toward the first.
    Reverse,
}

impl PathDirection {
    /// Name used in JSON output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Reverse => "reverse",
        }
    }

    /// Wording used in the `Direction: ...` diagnostic.
    fn diagnostic_label(&self) -> &'static str {
        match self {
            Self::Forward => "normal",
            Self::Reverse => "reverse",
        }
    }
}

impl Graph {
    /// Look for a path between `first` and `second`.
    ///
    /// Runs a breadth-first search from the start endpoint. As soon as a
    /// dequeued vertex has a direct edge to the target, the route to that
    /// vertex plus the target is returned. The check runs before that
    /// vertex's neighbors are queued and vertices leave the queue in level
    /// order, so the returned path has the fewest hops.
    ///
    /// Returns `None` when the target cannot be reached.
    pub fn create_path(
        &self,
        first: &str,
        second: &str,
        direction: PathDirection,
    ) -> Option<Vec<String>> {
        let (start, target) = match direction {
            PathDirection::Forward => (first, second),
            PathDirection::Reverse => (second, first),
        };

        if self.config().debug {
            log::debug!("Direction: {}", direction.diagnostic_label());
        }

        let mut visited = VisitedMap::for_graph(self);
        let mut queue: VecDeque<&str> = VecDeque::new();
        // Discovered vertex -> the vertex it was queued from.
        let mut parents: HashMap<&str, &str> = HashMap::new();

        visited.mark(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let edges = self.neighbors(current);

            if edges.iter().any(|n| n == target) {
                let mut path = route_to(current, &parents);
                path.push(target.to_string());
                if self.config().debug {
                    log::debug!("{}", path.join(PATH_SEPARATOR));
                }
                return Some(path);
            }

            for node in edges {
                if visited.mark(node) {
                    parents.insert(node, current);
                    queue.push_back(node);
                }
            }
        }

        if self.config().debug {
            log::debug!("no link found");
        }
        None
    }

    /// Whether `second` is reachable from `first` over at least one edge.
    pub fn has_path(&self, first: &str, second: &str) -> bool {
        self.create_path(first, second, PathDirection::Forward)
            .is_some()
    }
}

/// Walk parent links back from `node` to the search root.
fn route_to<'a>(node: &'a str, parents: &HashMap<&'a str, &'a str>) -> Vec<String> {
    let mut route = vec![node.to_string()];
    let mut cursor = node;
    while let Some(&parent) = parents.get(cursor) {
        route.push(parent.to_string());
        cursor = parent;
    }
    route.reverse();
    route
}
