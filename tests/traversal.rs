//! BFS / DFS traversal tests.

use std::collections::HashSet;

use graph_algos::graph::{Graph, GraphBuilder, TraversalOrder};

use rand::Rng;

// ==================== Helpers ====================

/// A -> B -> C -> D
fn chain() -> Graph {
    GraphBuilder::new()
        .chain_from("A", &["B"])
        .chain_from("B", &["C"])
        .chain_from("C", &["D"])
        .build()
        .unwrap()
}

/// A -> {B, C}, B -> D, C -> D
fn diamond() -> Graph {
    GraphBuilder::new()
        .chain_from("A", &["B", "C"])
        .chain_from("B", &["D"])
        .chain_from("C", &["D"])
        .build()
        .unwrap()
}

const ALL_ORDERS: [TraversalOrder; 3] = [
    TraversalOrder::BreadthFirst,
    TraversalOrder::DepthFirstIterative,
    TraversalOrder::DepthFirstRecursive,
];

/// Reachable set computed independently of the traversals under test.
fn reachable(graph: &Graph, start: &str) -> HashSet<String> {
    let mut seen = HashSet::new();
    let mut pending = vec![start.to_string()];
    while let Some(v) = pending.pop() {
        if seen.insert(v.clone()) {
            pending.extend(graph.neighbors(&v).iter().cloned());
        }
    }
    seen
}

// ==================== Fixed shapes ====================

#[test]
fn test_chain_all_orders_agree() {
    let graph = chain();
    let expected = vec!["A", "B", "C", "D"];
    assert_eq!(graph.bfs("A"), expected);
    assert_eq!(graph.dfs_iterative("A"), expected);
    assert_eq!(graph.dfs_recursive("A"), expected);
}

#[test]
fn test_diamond_bfs() {
    assert_eq!(diamond().bfs("A"), vec!["A", "B", "C", "D"]);
}

#[test]
fn test_diamond_dfs_recursive() {
    // D is reached through B and not revisited through C.
    assert_eq!(diamond().dfs_recursive("A"), vec!["A", "B", "D", "C"]);
}

#[test]
fn test_diamond_dfs_iterative_reverses_branches() {
    // Stack pops the last-added edge first.
    assert_eq!(diamond().dfs_iterative("A"), vec!["A", "C", "D", "B"]);
}

#[test]
fn test_bfs_level_order() {
    let graph = GraphBuilder::new()
        .chain_from("root", &["l1a", "l1b"])
        .chain_from("l1a", &["l2a"])
        .chain_from("l1b", &["l2b"])
        .chain_from("l2a", &["l3"])
        .build()
        .unwrap();
    assert_eq!(graph.bfs("root"), vec!["root", "l1a", "l1b", "l2a", "l2b", "l3"]);
}

#[test]
fn test_dfs_recursive_finishes_subtree_before_sibling() {
    let graph = GraphBuilder::new()
        .chain_from("A", &["B", "E"])
        .chain_from("B", &["C", "D"])
        .build()
        .unwrap();
    assert_eq!(graph.dfs_recursive("A"), vec!["A", "B", "C", "D", "E"]);
    assert_eq!(graph.dfs_iterative("A"), vec!["A", "E", "B", "D", "C"]);
}

#[test]
fn test_cycle_terminates() {
    let graph = GraphBuilder::new()
        .chain_from("A", &["B"])
        .chain_from("B", &["C"])
        .chain_from("C", &["A"])
        .build()
        .unwrap();
    for order in ALL_ORDERS {
        assert_eq!(graph.traverse("A", order), vec!["A", "B", "C"]);
    }
}

#[test]
fn test_self_loop() {
    let mut graph = Graph::new();
    graph.add_vertex("A").unwrap();
    graph.add_edge("A", "A").unwrap();
    for order in ALL_ORDERS {
        assert_eq!(graph.traverse("A", order), vec!["A"]);
    }
}

#[test]
fn test_deep_chain_all_orders() {
    const DEPTH: usize = 200_000;
    let mut graph = Graph::new();
    for i in 0..DEPTH {
        graph.add_vertex(format!("v{}", i)).unwrap();
    }
    for i in 0..DEPTH - 1 {
        graph.add_edge(&format!("v{}", i), format!("v{}", i + 1)).unwrap();
    }

    for order in ALL_ORDERS {
        let visited = graph.traverse("v0", order);
        assert_eq!(visited.len(), DEPTH, "{:?}", order);
        assert_eq!(visited[DEPTH - 1], format!("v{}", DEPTH - 1));
    }
}

#[test]
fn test_dfs_recursive_deep_chain_with_side_branches() {
    // spine: s0 -> s1 -> ... ; every spine vertex also points at a side leaf
    // added after the next spine step, so each side leaf comes after the
    // whole remaining spine.
    const DEPTH: usize = 50_000;
    let mut graph = Graph::new();
    for i in 0..DEPTH {
        graph.add_vertex(format!("s{}", i)).unwrap();
    }
    for i in 0..DEPTH - 1 {
        graph.add_edge(&format!("s{}", i), format!("s{}", i + 1)).unwrap();
        graph.add_edge(&format!("s{}", i), format!("x{}", i)).unwrap();
    }

    let visited = graph.dfs_recursive("s0");
    assert_eq!(visited.len(), DEPTH * 2 - 1);
    assert_eq!(visited[DEPTH - 1], format!("s{}", DEPTH - 1));
    assert_eq!(visited[DEPTH], format!("x{}", DEPTH - 2));
    assert_eq!(visited[visited.len() - 1], "x0");
}

// ==================== Unregistered ids ====================

#[test]
fn test_unregistered_start() {
    let graph = chain();
    for order in ALL_ORDERS {
        assert_eq!(graph.traverse("nobody", order), vec!["nobody"]);
    }
}

#[test]
fn test_unregistered_target_is_dead_end() {
    let mut graph = Graph::new();
    graph.add_vertex("A").unwrap();
    graph.add_edge("A", "ghost").unwrap();
    graph.add_edge("A", "B").unwrap();
    assert_eq!(graph.bfs("A"), vec!["A", "ghost", "B"]);
    assert_eq!(graph.dfs_recursive("A"), vec!["A", "ghost", "B"]);
    assert_eq!(graph.dfs_iterative("A"), vec!["A", "B", "ghost"]);
}

#[test]
fn test_empty_graph() {
    let graph = Graph::new();
    assert_eq!(graph.bfs("A"), vec!["A"]);
}

// ==================== Randomized ====================

#[test]
fn test_random_graphs_visit_reachable_set_once() {
    let mut rng = rand::thread_rng();

    for _ in 0..20 {
        let n = rng.gen_range(1..40);
        let mut graph = Graph::new();
        for i in 0..n {
            graph.add_vertex(format!("v{}", i)).unwrap();
        }
        for _ in 0..n * 2 {
            let from = format!("v{}", rng.gen_range(0..n));
            let to = format!("v{}", rng.gen_range(0..n + 5));
            let _ = graph.add_edge(&from, to);
        }

        let start = format!("v{}", rng.gen_range(0..n));
        let expected = reachable(&graph, &start);

        for order in ALL_ORDERS {
            let visited = graph.traverse(&start, order);
            let unique: HashSet<String> = visited.iter().cloned().collect();
            assert_eq!(unique.len(), visited.len(), "{:?} repeated a vertex", order);
            assert_eq!(unique, expected, "{:?} visited the wrong set", order);
            assert_eq!(visited[0], start);
        }
    }
}

#[test]
fn test_order_names() {
    for order in ALL_ORDERS {
        assert_eq!(TraversalOrder::from_name(order.name()), Some(order));
    }
    assert_eq!(TraversalOrder::from_name("sideways"), None);
}
