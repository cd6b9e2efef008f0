use pargraph_core::{NodeId, PeerStats};
use serde::Serialize;

use crate::search::SearchResult;

#[derive(Serialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize)]
pub struct JsonQuery {
    pub source: NodeId,
    pub target: NodeId,
    pub options: JsonOptions,
}

#[derive(Serialize)]
pub struct JsonOptions {
    pub algorithm: &'static str,
    pub format: &'static str,
    pub channel_capacity: usize,
}

#[derive(Serialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hops: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<NodeId>>,
}

#[derive(Serialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub nodes_explored: usize,
    pub peers: Vec<PeerStats>,
}

pub fn create_json_output(result: &SearchResult) -> JsonOutput {
    let args = &result.display_options;
    let outcome = &result.outcome;

    JsonOutput {
        query: JsonQuery {
            source: result.source,
            target: result.target,
            options: JsonOptions {
                algorithm: args.search_algorithm().as_str(),
                format: args.graph_format().as_str(),
                channel_capacity: args.search_config().channel_capacity,
            },
        },
        result: JsonResult {
            found: outcome.found(),
            hops: outcome.hop_count(),
            path: outcome.path.clone(),
        },
        stats: JsonStats {
            search_time_ms: (outcome.elapsed_secs * 1000.0) as u64,
            nodes_explored: outcome.nodes_explored,
            peers: outcome.peer_stats.clone(),
        },
    }
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
