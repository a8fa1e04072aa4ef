//! Graph traversal algorithms (BFS, iterative DFS, recursive DFS).

use std::collections::VecDeque;

use serde::Serialize;

use super::{Graph, VisitedMap};

/// Which traversal to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalOrder {
    /// Level order, neighbors in insertion order.
    BreadthFirst,
    /// Explicit stack; siblings come out in reverse insertion order.
    DepthFirstIterative,
    /// Recursive descent; siblings in insertion order.
    DepthFirstRecursive,
}

impl TraversalOrder {
    /// Parse a CLI-style name: `bfs`, `dfs`, `dfs-recursive`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bfs" | "breadth-first" => Some(Self::BreadthFirst),
            "dfs" | "dfs-iterative" | "depth-first" => Some(Self::DepthFirstIterative),
            "dfs-recursive" | "recursive" => Some(Self::DepthFirstRecursive),
            _ => None,
        }
    }

    /// Short name accepted by [`TraversalOrder::from_name`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirstIterative => "dfs",
            Self::DepthFirstRecursive => "dfs-recursive",
        }
    }
}

/// Accumulator for the recursive-order walk.
///
/// `frames` stands in for the call stack: each entry is a vertex whose
/// children are being entered and the index of the next child to try.
struct Walk<'g> {
    visited: VisitedMap,
    order: Vec<String>,
    frames: Vec<(&'g str, usize)>,
}

impl<'g> Walk<'g> {
    /// Visit `node` and open a frame for its children.
    fn enter(&mut self, node: &'g str) {
        self.visited.mark(node);
        self.order.push(node.to_string());
        self.frames.push((node, 0));
    }
}

impl Graph {
    /// Run the traversal selected by `order` from `start`.
    pub fn traverse(&self, start: &str, order: TraversalOrder) -> Vec<String> {
        match order {
            TraversalOrder::BreadthFirst => self.bfs(start),
            TraversalOrder::DepthFirstIterative => self.dfs_iterative(start),
            TraversalOrder::DepthFirstRecursive => self.dfs_recursive(start),
        }
    }

    /// Breadth-first traversal. Neighbors are marked when enqueued.
    pub fn bfs(&self, start: &str) -> Vec<String> {
        let mut visited = VisitedMap::for_graph(self);
        let mut queue: VecDeque<&str> = VecDeque::new();
        let mut result = Vec::new();

        visited.mark(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            result.push(current.to_string());
            for node in self.neighbors(current) {
                if visited.mark(node) {
                    queue.push_back(node);
                }
            }
        }

        result
    }

    /// Depth-first traversal with an explicit stack.
    ///
    /// Neighbors are pushed in insertion order and popped in reverse, so at
    /// every branch the last-added edge is explored first. Marking happens
    /// at push time, same as [`Graph::bfs`].
    pub fn dfs_iterative(&self, start: &str) -> Vec<String> {
        let mut visited = VisitedMap::for_graph(self);
        let mut stack: Vec<&str> = Vec::new();
        let mut result = Vec::new();

        visited.mark(start);
        stack.push(start);

        while let Some(current) = stack.pop() {
            result.push(current.to_string());
            for node in self.neighbors(current) {
                if visited.mark(node) {
                    stack.push(node);
                }
            }
        }

        result
    }

    /// Depth-first traversal in recursive order.
    ///
    /// A vertex is appended before any of its children; children are
    /// entered in insertion order and each subtree finishes before the next
    /// sibling starts. Frames live on the heap, so chain depth is bounded
    /// by memory rather than the thread stack.
    pub fn dfs_recursive(&self, start: &str) -> Vec<String> {
        let mut walk = Walk {
            visited: VisitedMap::for_graph(self),
            order: Vec::new(),
            frames: Vec::new(),
        };
        walk.enter(start);

        while let Some(frame) = walk.frames.last_mut() {
            let (node, next_idx) = *frame;
            let neighbors = self.neighbors(node);
            match neighbors.get(next_idx) {
                Some(next) => {
                    frame.1 += 1;
                    if !walk.visited.is_visited(next) {
                        walk.enter(next);
                    }
                }
                None => {
                    walk.frames.pop();
                }
            }
        }

        walk.order
    }
}
