use pargraph_core::{GraphFormat, LoadError, load_graph, load_graph_str};
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_invalid_dimacs_token_reports_position() {
    let error = load_graph_str("c header\na 1 x 3\n", GraphFormat::Dimacs).unwrap_err();

    match error {
        LoadError::InvalidToken { line, token, value } => {
            assert_eq!(line, 2);
            assert_eq!(token, 2);
            assert_eq!(value, "x");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_dimacs_token() {
    let error = load_graph_str("a 1\n", GraphFormat::Dimacs).unwrap_err();
    assert!(matches!(error, LoadError::MissingToken { line: 1, token: 2 }));
}

#[test]
fn test_negative_ids_are_rejected() {
    let error = load_graph_str("1 -2\n", GraphFormat::AdjacencyList).unwrap_err();
    assert!(matches!(error, LoadError::InvalidToken { line: 1, token: 1, .. }));
}

#[test]
fn test_error_message_names_line() {
    let error = load_graph_str("4 2 3\n2 two\n", GraphFormat::AdjacencyList).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Could not parse token 1 at line 2 as a node id: \"two\""
    );
}

#[test]
fn test_empty_file_gives_empty_graph() {
    let file = NamedTempFile::new().unwrap();

    let graph = load_graph(file.path(), GraphFormat::Dimacs).unwrap();

    assert!(graph.is_empty());
}

#[test]
fn test_missing_file_is_io_error() {
    let error = load_graph(Path::new("/definitely/not/here.gr"), GraphFormat::Dimacs).unwrap_err();
    assert!(matches!(error, LoadError::Io(_)));
}
