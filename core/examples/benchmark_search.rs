use pargraph_core::benchmark::{compare_algorithms, sample_pairs, summarize};
use pargraph_core::{GraphFormat, SearchConfig, load_graph};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Update this path to match your actual data location
    let graph_path = Path::new("../data/USA-road-d.NY.gr");

    if !graph_path.exists() {
        eprintln!("Error: {} not found", graph_path.display());
        eprintln!(
            "Please update the path in examples/benchmark_search.rs to match your data location"
        );
        std::process::exit(1);
    }

    println!("🚀 Loading graph...");
    let graph = load_graph(graph_path, GraphFormat::Dimacs)?;
    println!(
        "Graph has {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    // Number of node pairs to test - adjust based on how long you want the run to take
    let pairs = sample_pairs(&graph, 5);
    println!("Testing {} node pairs...", pairs.len());

    let results = compare_algorithms(&graph, &pairs, &SearchConfig::default())?;
    summarize(&results);

    println!("\n✅ Benchmark completed!");
    Ok(())
}
