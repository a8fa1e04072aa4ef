//! Text input format for loading graphs from files.

pub mod edge_list;

pub use edge_list::EdgeListReader;
