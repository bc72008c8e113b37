mod error;
mod simple_graph;
pub mod import;

pub use error::BadGraphInput;
pub use simple_graph::SimpleGraph;

/// An undirected edge between two 1-indexed node labels.
pub type Edge = (usize, usize);
