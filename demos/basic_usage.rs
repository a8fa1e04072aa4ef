//! Build a small graph, walk it three ways and look for a path.

use graph_algos::*;

fn main() -> GraphResult<()> {
    let mut graph = Graph::new();

    for id in ["A", "B", "C", "D"] {
        graph.add_vertex(id)?;
    }
    graph.add_edge("A", "B")?;
    graph.add_edge("A", "C")?;
    graph.add_edge("B", "D")?;
    graph.add_edge("C", "D")?;

    // Mutation failures are ordinary errors; the graph stays usable.
    if let Err(e) = graph.add_edge("A", "B") {
        println!("rejected: {}", e);
    }

    println!("bfs:           {:?}", graph.bfs("A"));
    println!("dfs:           {:?}", graph.dfs_iterative("A"));
    println!("dfs-recursive: {:?}", graph.dfs_recursive("A"));

    match graph.create_path("A", "D", PathDirection::Forward) {
        Some(path) => println!("path: {}", path.join(PATH_SEPARATOR)),
        None => println!("no link found"),
    }
    println!("D is a leaf: {}", graph.is_leaf("D"));

    Ok(())
}
