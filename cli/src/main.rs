use clap::Parser;
use pargraph::colors::ColorScheme;
use pargraph::display::{display_search_info, display_search_results};
use pargraph::json_output::{create_json_output, print_json_output};
use pargraph::{Args, PargraphApp, SearchRequest, execute_search};
use std::error::Error;
use tracing_subscriber::EnvFilter;

fn main() {
    let search_args = Args::parse();
    init_tracing();

    let colors = ColorScheme::new(!search_args.no_color);

    if let Err(error) = run(search_args, &colors) {
        eprintln!("{}", colors.error(&format!("❌ Error: {}", error)));
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn run(search_args: Args, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
    let app = PargraphApp::new(search_args.graph.clone())?;
    let show_progress = !search_args.json && !search_args.quiet;
    let graph = app.load_graph(search_args.graph_format(), show_progress)?;

    let search_request = SearchRequest::new(search_args);
    let json_mode = search_request.search_args.json;

    if search_request.search_args.verbose && !json_mode {
        display_search_info(&search_request, &graph, colors);
    }

    let search_result = execute_search(search_request, &graph)?;

    if json_mode {
        print_json_output(&create_json_output(&search_result));
    } else {
        display_search_results(search_result, colors);
    }

    Ok(())
}
