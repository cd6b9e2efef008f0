use pargraph_core::{Algorithm, Graph, NodeId, PeerStats};

use crate::colors::ColorScheme;
use crate::search::{SearchRequest, SearchResult};
use crate::utils::format_number;

pub fn display_search_info(request: &SearchRequest, graph: &Graph, colors: &ColorScheme) {
    println!(
        "🧭 Finding fewest-hops path from node {} to node {}",
        colors.node(&request.source.to_string()),
        colors.node(&request.target.to_string())
    );

    println!(
        "📂 Graph has {} nodes and {} edges",
        colors.number(&format_number(graph.node_count())),
        colors.number(&format_number(graph.edge_count()))
    );

    match request.search_args.search_algorithm() {
        Algorithm::Bidirectional => println!(
            "⚙️  Using bidirectional search ({} report slots per peer)",
            colors.number(&format_number(request.search_args.search_config().channel_capacity))
        ),
        Algorithm::Unidirectional => println!("⚙️  Using unidirectional BFS"),
    }

    println!("🔍 Searching...");
}

pub fn display_search_results(result: SearchResult, colors: &ColorScheme) {
    let is_verbose = result.display_options.verbose;

    if is_verbose {
        println!("\n---\n");
    }

    match &result.outcome.path {
        Some(path) => {
            display_successful_path(path, &result, colors);
        }
        None => {
            println!(
                "{} {} and {}",
                colors.error("❌ No path found between"),
                colors.node(&result.source.to_string()),
                colors.node(&result.target.to_string())
            );
        }
    }

    if is_verbose {
        display_search_statistics(&result, colors);
    }
}

fn display_successful_path(path: &[NodeId], result: &SearchResult, colors: &ColorScheme) {
    let hop_count = path.len() - 1;

    if result.display_options.verbose {
        println!(
            "{} Found path with {} hops:\n",
            colors.success("✅"),
            colors.number(&hop_count.to_string())
        );
    }

    println!("{}", format_path_flow(path, colors));

    if !result.display_options.quiet && !result.display_options.verbose {
        println!("({} hops)", colors.number(&format_number(hop_count)));
    }
}

pub fn format_path_flow(path: &[NodeId], colors: &ColorScheme) -> String {
    let separator = format!(" {} ", colors.arrow("→"));
    path.iter()
        .map(|node| colors.node(&node.to_string()).to_string())
        .collect::<Vec<_>>()
        .join(&separator)
}

fn display_search_statistics(result: &SearchResult, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Explored {} nodes in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(result.outcome.nodes_explored)),
        colors.number(&format!("{:.3}", result.outcome.elapsed_secs))
    );

    for stats in &result.outcome.peer_stats {
        println!("   {}", format_peer_stats(stats, colors));
    }
}

fn format_peer_stats(stats: &PeerStats, colors: &ColorScheme) -> String {
    format!(
        "from {}: {} nodes, {} edges, {} reports",
        colors.node(&stats.start.to_string()),
        colors.number(&format_number(stats.nodes_visited)),
        colors.number(&format_number(stats.edges_examined)),
        colors.number(&format_number(stats.reports_sent))
    )
}
