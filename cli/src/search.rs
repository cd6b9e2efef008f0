use pargraph_core::{Graph, NodeId, SearchError, SearchOutcome, find_path};

use crate::args::Args;

pub struct SearchRequest {
    pub source: NodeId,
    pub target: NodeId,
    pub search_args: Args,
}

pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub source: NodeId,
    pub target: NodeId,
    pub display_options: Args,
}

impl SearchRequest {
    pub fn new(args: Args) -> Self {
        Self {
            source: args.source,
            target: args.target,
            search_args: args,
        }
    }
}

pub fn execute_search(request: SearchRequest, graph: &Graph) -> Result<SearchResult, SearchError> {
    let algorithm = request.search_args.search_algorithm();
    let config = request.search_args.search_config();
    tracing::debug!(
        source = request.source,
        target = request.target,
        algorithm = algorithm.as_str(),
        channel_capacity = config.channel_capacity,
        "running search"
    );

    let outcome = find_path(graph, request.source, request.target, algorithm, &config)?;
    tracing::info!(
        found = outcome.found(),
        hops = outcome.hop_count(),
        nodes_explored = outcome.nodes_explored,
        elapsed_secs = outcome.elapsed_secs,
        "search finished"
    );

    Ok(SearchResult {
        outcome,
        source: request.source,
        target: request.target,
        display_options: request.search_args,
    })
}
