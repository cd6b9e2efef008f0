use pargraph_core::{GraphFormat, load_graph, load_graph_str};
use std::io::Write;
use tempfile::NamedTempFile;

const SMALL_DIMACS: &str = "\
c 9th DIMACS Implementation Challenge: Shortest Paths
c tiny test graph
p sp 4 5
a 1 2 803
a 2 1 803
a 2 4 158
a 1 3 774
a 3 4 1000
";

#[test]
fn test_dimacs_reads_arc_lines_only() {
    let graph = load_graph_str(SMALL_DIMACS, GraphFormat::Dimacs).unwrap();

    assert_eq!(graph.edge_count(), 5);
    assert_eq!(graph.neighbors(1), &[2, 3]);
    assert_eq!(graph.neighbors(2), &[1, 4]);
    assert!(graph.neighbors(4).is_empty());
}

#[test]
fn test_dimacs_weight_column_is_optional() {
    let graph = load_graph_str("a 7 8\n", GraphFormat::Dimacs).unwrap();
    assert!(graph.has_edge(7, 8));
}

#[test]
fn test_dimacs_file_round_trip_through_mmap() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SMALL_DIMACS.as_bytes()).unwrap();
    file.flush().unwrap();

    let graph = load_graph(file.path(), GraphFormat::Dimacs).unwrap();

    assert_eq!(graph.node_count(), 3);
    assert!(graph.has_edge(3, 4));
}

#[test]
fn test_dimacs_without_trailing_newline() {
    let graph = load_graph_str("p sp 2 1\na 1 2 5", GraphFormat::Dimacs).unwrap();
    assert!(graph.has_edge(1, 2));
}
