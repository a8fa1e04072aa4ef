//! CLI entry point for the `galgo` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graph_algos::cli::commands;
use graph_algos::graph::{PathDirection, TraversalOrder};
use graph_algos::GraphError;

#[derive(Parser)]
#[command(
    name = "galgo",
    about = "Traverse and query small directed graphs from edge-list files"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug diagnostics
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show vertex and edge counts
    Info {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Traverse the graph from a starting vertex
    Traverse {
        /// Path to the edge-list file
        file: PathBuf,
        /// Starting vertex
        start: String,
        /// Order: bfs, dfs, or dfs-recursive
        #[arg(long, default_value = "bfs")]
        order: String,
    },
    /// Find a path between two vertices
    Path {
        /// Path to the edge-list file
        file: PathBuf,
        /// First endpoint
        from: String,
        /// Second endpoint
        to: String,
        /// Search from the second endpoint toward the first
        #[arg(long)]
        reverse: bool,
    },
    /// Check whether a vertex has no outgoing edges
    Leaf {
        /// Path to the edge-list file
        file: PathBuf,
        /// Vertex to check
        vertex: String,
    },
}

fn run(cli: Cli) -> Result<bool, GraphError> {
    let json = cli.format == "json";
    let verbose = cli.verbose;

    match cli.command {
        Commands::Info { file } => {
            let graph = commands::load_graph(&file, verbose)?;
            commands::cmd_info(&graph, &file, json)?;
            Ok(true)
        }
        Commands::Traverse { file, start, order } => {
            let order = TraversalOrder::from_name(&order)
                .ok_or_else(|| GraphError::InvalidArgument(format!("traversal order {}", order)))?;
            let graph = commands::load_graph(&file, verbose)?;
            commands::cmd_traverse(&graph, &start, order, json)?;
            Ok(true)
        }
        Commands::Path {
            file,
            from,
            to,
            reverse,
        } => {
            let direction = if reverse {
                PathDirection::Reverse
            } else {
                PathDirection::Forward
            };
            let graph = commands::load_graph(&file, verbose)?;
            commands::cmd_path(&graph, &from, &to, direction, json)
        }
        Commands::Leaf { file, vertex } => {
            let graph = commands::load_graph(&file, verbose)?;
            commands::cmd_leaf(&graph, &vertex, json)?;
            Ok(true)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(4),
        Err(e) => {
            eprintln!("Error: {}", e);
            let code = match &e {
                GraphError::Io(_) => 1,
                GraphError::Parse { .. } => 2,
                GraphError::InvalidArgument(_) => 3,
                _ => 5,
            };
            process::exit(code);
        }
    }
}
