use crate::algorithm::Algorithm;
use crate::error::SearchError;
use crate::graph::{Graph, NodeId};
use crate::pathfinding::{SearchOutcome, find_path};
use crate::search_config::SearchConfig;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub algorithm: Algorithm,
    pub source: NodeId,
    pub target: NodeId,
    pub path_found: bool,
    pub path_length: usize,
    pub nodes_explored: usize,
    pub total_time_ms: f64,
}

impl From<(Algorithm, NodeId, NodeId, &SearchOutcome)> for BenchmarkResult {
    fn from((algorithm, source, target, outcome): (Algorithm, NodeId, NodeId, &SearchOutcome)) -> Self {
        Self {
            algorithm,
            source,
            target,
            path_found: outcome.found(),
            path_length: outcome.hop_count().unwrap_or(0),
            nodes_explored: outcome.nodes_explored,
            total_time_ms: outcome.elapsed_secs * 1000.0,
        }
    }
}

/// Picks `count` node pairs deterministically: ids are sorted and paired from the
/// two ends inwards, which tends to give far-apart endpoints on road networks.
pub fn sample_pairs(graph: &Graph, count: usize) -> Vec<(NodeId, NodeId)> {
    let mut node_ids: Vec<NodeId> = graph.nodes().collect();
    node_ids.sort_unstable();

    let half = node_ids.len() / 2;
    node_ids[..half]
        .iter()
        .zip(node_ids[half..].iter().rev())
        .map(|(&source, &target)| (source, target))
        .take(count)
        .collect()
}

/// Runs the unidirectional baseline, then the bidirectional search, on every pair.
pub fn compare_algorithms(
    graph: &Graph,
    pairs: &[(NodeId, NodeId)],
    config: &SearchConfig,
) -> Result<Vec<BenchmarkResult>, SearchError> {
    let mut results = Vec::with_capacity(pairs.len() * 2);

    for &(source, target) in pairs {
        for algorithm in [Algorithm::Unidirectional, Algorithm::Bidirectional] {
            let outcome = find_path(graph, source, target, algorithm, config)?;
            results.push(BenchmarkResult::from((algorithm, source, target, &outcome)));
        }
    }

    Ok(results)
}

pub fn summarize(results: &[BenchmarkResult]) {
    println!("\n=== Algorithm Comparison ===");

    let mut by_algorithm: FxHashMap<Algorithm, Vec<&BenchmarkResult>> = FxHashMap::default();
    for result in results {
        by_algorithm.entry(result.algorithm).or_default().push(result);
    }

    for algorithm in [Algorithm::Unidirectional, Algorithm::Bidirectional] {
        let Some(runs) = by_algorithm.get(&algorithm) else {
            continue;
        };
        let total_time: f64 = runs.iter().map(|r| r.total_time_ms).sum();
        let total_nodes: usize = runs.iter().map(|r| r.nodes_explored).sum();
        let found = runs.iter().filter(|r| r.path_found).count();

        println!("\n{}:", algorithm.as_str());
        println!("  Paths found: {}/{}", found, runs.len());
        println!("  Total time: {:.2}ms", total_time);
        println!("  Nodes explored: {}", total_nodes);
    }

    let mismatches = length_mismatches(results);
    if mismatches.is_empty() {
        println!("\nAll path lengths agree.");
    } else {
        for (unidirectional, bidirectional) in mismatches {
            println!(
                "\n⚠️  {} -> {}: {} hops unidirectional, {} hops bidirectional",
                unidirectional.source,
                unidirectional.target,
                unidirectional.path_length,
                bidirectional.path_length
            );
        }
    }
}

/// Pairs up the two algorithms' runs on the same `(source, target)` query and returns
/// those that disagree on reachability or hop count, as `(unidirectional, bidirectional)`.
pub fn length_mismatches(results: &[BenchmarkResult]) -> Vec<(&BenchmarkResult, &BenchmarkResult)> {
    let mut baselines: FxHashMap<(NodeId, NodeId), &BenchmarkResult> = FxHashMap::default();
    for result in results.iter().filter(|r| r.algorithm == Algorithm::Unidirectional) {
        baselines.entry((result.source, result.target)).or_insert(result);
    }

    results
        .iter()
        .filter(|r| r.algorithm == Algorithm::Bidirectional)
        .filter_map(|bidirectional| {
            let baseline = baselines.get(&(bidirectional.source, bidirectional.target))?;
            let agree = (baseline.path_found, baseline.path_length)
                == (bidirectional.path_found, bidirectional.path_length);
            (!agree).then_some((*baseline, bidirectional))
        })
        .collect()
}
