use clap::Parser;
use pargraph_core::{Algorithm, GraphFormat, NodeId, SearchConfig, search_config::DEFAULT_CHANNEL_CAPACITY};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "pargraph")]
#[command(about = "Find the fewest-hops path between two nodes of a large graph")]
pub struct Args {
    /// Source node id
    pub source: NodeId,

    /// Target node id
    pub target: NodeId,

    /// Graph file (defaults to $PARGRAPH_GRAPH, then data/USA-road-d.NY.gr)
    #[arg(short, long, value_name = "PATH")]
    pub graph: Option<PathBuf>,

    /// Graph file layout
    #[arg(short, long, value_parser = ["dimacs", "adjacency"], default_value = "dimacs")]
    pub format: String,

    /// Search strategy
    #[arg(short, long, value_parser = ["bidirectional", "unidirectional"], default_value = "bidirectional")]
    pub algorithm: String,

    /// Slots in each peer-to-peer report channel
    #[arg(short, long, value_name = "SLOTS", default_value_t = DEFAULT_CHANNEL_CAPACITY)]
    pub channel_capacity: usize,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search info and statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path flow
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn graph_format(&self) -> GraphFormat {
        GraphFormat::from(self.format.as_str())
    }

    pub fn search_algorithm(&self) -> Algorithm {
        Algorithm::from(self.algorithm.as_str())
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::new(self.channel_capacity)
    }
}
