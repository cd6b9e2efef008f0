pub mod algorithm;
pub mod benchmark;
pub mod error;
pub mod graph;
pub mod parsing;
pub mod pathfinding;
pub mod search_config;

// Re-export commonly used items
pub use algorithm::Algorithm;
pub use error::{LoadError, SearchError};
pub use graph::{Graph, NodeId};
pub use parsing::{GraphFormat, load_graph, load_graph_str};
pub use pathfinding::{
    PeerStats, SearchOutcome, bfs_find_path, bidirectional_bfs, find_path, hop_distances,
    reconstruct_path,
};
pub use search_config::SearchConfig;
