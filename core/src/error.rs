//! Error types for graph loading and search

use crate::graph::NodeId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse token {token} at line {line} as a node id: {value:?}")]
    InvalidToken {
        line: usize,
        token: usize,
        value: String,
    },

    #[error("Missing token {token} at line {line}")]
    MissingToken { line: usize, token: usize },
}

/// Internal-consistency faults raised while searching.
///
/// None of these depend on the input graph; each one means the peer bookkeeping
/// broke an invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Predecessor map contained a cycle through node {node}")]
    PredecessorCycle { node: NodeId },

    #[error("Node {node} has no predecessor on the way back to {start}")]
    MissingPredecessor { node: NodeId, start: NodeId },

    #[error("Search peer starting from {start} terminated without a result")]
    PeerLost { start: NodeId },
}
