pub mod bfs;
pub mod bidirectional;
pub mod peer;
pub mod utils;

use crate::algorithm::Algorithm;
use crate::error::SearchError;
use crate::graph::{Graph, NodeId};
use crate::search_config::SearchConfig;

// Re-export the public functions
pub use bfs::{bfs_find_path, hop_distances};
pub use bidirectional::bidirectional_bfs;
pub use utils::{PeerStats, SearchOutcome, join_half_paths, reconstruct_path};

pub fn find_path(
    graph: &Graph,
    source: NodeId,
    target: NodeId,
    algorithm: Algorithm,
    config: &SearchConfig,
) -> Result<SearchOutcome, SearchError> {
    match algorithm {
        Algorithm::Bidirectional => bidirectional_bfs(graph, source, target, config),
        Algorithm::Unidirectional => bfs_find_path(graph, source, target),
    }
}
