use std::error::Error;
use std::fmt;

/// The reasons for which graph construction can be rejected.
#[derive(Debug, PartialEq, Clone)]
pub enum BadGraphInput {
    /// A nonzero diagonal entry, i.e. an edge from a node to itself.
    Loops,
    /// A matrix entry greater than one, i.e. two nodes connected twice.
    MultipleEdges,
    /// The matrix is not square or not symmetric.
    Incorrect,
    /// An incidence matrix column that does not connect exactly two nodes.
    /// Carries the number of nodes the column actually connects.
    InvalidEdge(usize),
    /// An adjacency list label outside of 1..=n.
    NodeOutOfBounds(usize),
}

impl fmt::Display for BadGraphInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph could not be created due to bad input: ")?;
        match self {
            Self::Loops => write!(f, "can't have loops"),
            Self::MultipleEdges => write!(f, "can't have multiple edges"),
            Self::Incorrect => write!(f, "incorrect graph"),
            Self::InvalidEdge(count) => write!(f, "invalid edge, {} nodes", count),
            Self::NodeOutOfBounds(label) => write!(f, "node index {} out of bounds", label),
        }
    }
}

impl Error for BadGraphInput {}
