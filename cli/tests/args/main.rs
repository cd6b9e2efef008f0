use clap::Parser;
use pargraph::Args;
use pargraph_core::{Algorithm, GraphFormat};
use std::path::PathBuf;

#[test]
fn test_two_integer_arguments() {
    let args = Args::try_parse_from(["pargraph", "12", "34"]).unwrap();

    assert_eq!(args.source, 12);
    assert_eq!(args.target, 34);
    assert_eq!(args.graph, None);
    assert_eq!(args.graph_format(), GraphFormat::Dimacs);
    assert_eq!(args.search_algorithm(), Algorithm::Bidirectional);
    assert_eq!(args.search_config().channel_capacity, 64 * 1024);
}

#[test]
fn test_non_integer_argument_is_usage_error() {
    let error = Args::try_parse_from(["pargraph", "12", "north"]).unwrap_err();
    assert_eq!(error.exit_code(), 2);

    assert!(Args::try_parse_from(["pargraph", "-3", "4"]).is_err());
}

#[test]
fn test_wrong_argument_count_is_usage_error() {
    assert!(Args::try_parse_from(["pargraph", "12"]).is_err());
    assert!(Args::try_parse_from(["pargraph", "1", "2", "3"]).is_err());
}

#[test]
fn test_options() {
    let args = Args::try_parse_from([
        "pargraph",
        "1",
        "4",
        "--graph",
        "graphs/diamond.txt",
        "--format",
        "adjacency",
        "--algorithm",
        "unidirectional",
        "--channel-capacity",
        "0",
        "--json",
    ])
    .unwrap();

    assert_eq!(args.graph, Some(PathBuf::from("graphs/diamond.txt")));
    assert_eq!(args.graph_format(), GraphFormat::AdjacencyList);
    assert_eq!(args.search_algorithm(), Algorithm::Unidirectional);
    assert_eq!(args.search_config().channel_capacity, 1); // Clamped to a single slot
    assert!(args.json);
}

#[test]
fn test_unknown_format_is_rejected() {
    assert!(Args::try_parse_from(["pargraph", "1", "2", "--format", "csv"]).is_err());
}
