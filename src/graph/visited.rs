//! Per-call visited tracking.

use std::collections::HashMap;

use super::Graph;

/// Visited flags for one traversal or path query.
///
/// Built fresh for every call and seeded with `false` for every registered
/// vertex, so construction costs O(registered vertices) regardless of how
/// much of the graph is reachable. Identifiers that are not registered are
/// inserted on first mark.
#[derive(Debug, Clone)]
pub struct VisitedMap {
    flags: HashMap<String, bool>,
}

impl VisitedMap {
    /// Seed a map with every registered vertex of `graph` marked unvisited.
    pub fn for_graph(graph: &Graph) -> Self {
        let mut flags = HashMap::with_capacity(graph.vertex_count());
        for key in graph.vertex_keys() {
            flags.insert(key.to_string(), false);
        }
        Self { flags }
    }

    /// Whether `id` has been marked. Unknown ids are unvisited.
    pub fn is_visited(&self, id: &str) -> bool {
        self.flags.get(id).copied().unwrap_or(false)
    }

    /// Mark `id` visited. Returns `true` if it was not visited before.
    pub fn mark(&mut self, id: &str) -> bool {
        match self.flags.get_mut(id) {
            Some(flag) => !std::mem::replace(flag, true),
            None => {
                self.flags.insert(id.to_string(), true);
                true
            }
        }
    }

    /// Number of tracked identifiers (seeded plus any inserted by `mark`).
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether no identifiers are tracked.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Number of identifiers currently marked visited.
    pub fn visited_count(&self) -> usize {
        self.flags.values().filter(|v| **v).count()
    }
}
