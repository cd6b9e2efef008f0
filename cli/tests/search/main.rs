use clap::Parser;
use pargraph::{Args, PargraphApp, SearchRequest, execute_search, format_number};
use pargraph_core::{Graph, GraphFormat};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_app_rejects_missing_graph_file() {
    let result = PargraphApp::new(Some(PathBuf::from("/no/such/graph.gr")));
    assert!(result.is_err());
}

#[test]
fn test_app_loads_dimacs_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "p sp 3 2").unwrap();
    writeln!(file, "a 1 2 10").unwrap();
    writeln!(file, "a 2 3 10").unwrap();
    file.flush().unwrap();

    let app = PargraphApp::new(Some(file.path().to_path_buf())).unwrap();
    let graph = app.load_graph(GraphFormat::Dimacs, false).unwrap();

    assert_eq!(graph.edge_count(), 2);
    assert!(graph.has_edge(2, 3));
}

#[test]
fn test_app_surfaces_malformed_tokens() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "a 1 two").unwrap();
    file.flush().unwrap();

    let app = PargraphApp::new(Some(file.path().to_path_buf())).unwrap();
    let error = app.load_graph(GraphFormat::Dimacs, false).unwrap_err();

    assert!(error.to_string().contains("line 1"));
}

#[test]
fn test_format_number() {
    assert_eq!(format_number(0), "0");
    assert_eq!(format_number(123), "123");
    assert_eq!(format_number(1000), "1,000");
    assert_eq!(format_number(65536), "65,536");
    assert_eq!(format_number(1234567), "1,234,567");
}

#[test]
fn test_execute_search_under_debug_logging() {
    let graph = Graph::from_edges([(1, 2), (2, 3), (3, 4), (1, 5)]);

    for algorithm in ["bidirectional", "unidirectional"] {
        let args = Args::try_parse_from(["pargraph", "1", "4", "-a", algorithm, "-c", "1"]).unwrap();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();

        let result = tracing::subscriber::with_default(subscriber, || {
            execute_search(SearchRequest::new(args), &graph)
        })
        .unwrap();

        assert_eq!(result.outcome.path, Some(vec![1, 2, 3, 4]));
        assert_eq!((result.source, result.target), (1, 4));
    }
}

#[test]
fn test_execute_search_reports_missing_path() {
    let graph = Graph::from_edges([(1, 2), (3, 4)]);
    let args = Args::try_parse_from(["pargraph", "1", "4"]).unwrap();

    let result = execute_search(SearchRequest::new(args), &graph).unwrap();

    assert!(!result.outcome.found());
    assert_eq!(result.outcome.hop_count(), None);
}
