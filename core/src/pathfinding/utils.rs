use crate::error::SearchError;
use crate::graph::NodeId;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

pub type ParentMap = FxHashMap<NodeId, NodeId>;

/// Counters one search direction reports when it terminates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeerStats {
    pub start: NodeId,
    pub nodes_visited: usize,
    pub edges_examined: usize,
    pub reports_sent: usize,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Source first, target last. `None` when the target is unreachable.
    pub path: Option<Vec<NodeId>>,
    pub nodes_explored: usize,
    pub elapsed_secs: f64,
    pub peer_stats: Vec<PeerStats>,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of edges on the path.
    pub fn hop_count(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len().saturating_sub(1))
    }
}

/// Follows `parent_map` from `from` back to `start`, returning
/// `[from, parent(from), ..., start]`.
pub fn reconstruct_path(
    parent_map: &ParentMap,
    from: NodeId,
    start: NodeId,
) -> Result<Vec<NodeId>, SearchError> {
    let mut path = Vec::new();
    let mut seen = FxHashSet::default();
    let mut current_node = from;

    loop {
        if !seen.insert(current_node) {
            return Err(SearchError::PredecessorCycle { node: current_node });
        }
        path.push(current_node);

        if current_node == start {
            return Ok(path);
        }

        current_node = *parent_map
            .get(&current_node)
            .ok_or(SearchError::MissingPredecessor {
                node: current_node,
                start,
            })?;
    }
}

/// Joins two half-paths that both begin at the meeting point: the source half is
/// reversed to read source -> meeting point, and the target half follows without its
/// duplicate leading node.
pub fn join_half_paths(mut source_half: Vec<NodeId>, target_half: &[NodeId]) -> Vec<NodeId> {
    source_half.reverse();
    source_half.extend(target_half.iter().skip(1));
    source_half
}
