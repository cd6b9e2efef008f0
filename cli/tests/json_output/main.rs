use clap::Parser;
use pargraph::json_output::create_json_output;
use pargraph::{Args, SearchRequest, execute_search};
use pargraph_core::Graph;

fn search(graph: &Graph, argv: &[&str]) -> serde_json::Value {
    let args = Args::try_parse_from(argv).unwrap();
    let result = execute_search(SearchRequest::new(args), graph).unwrap();
    serde_json::to_value(create_json_output(&result)).unwrap()
}

fn diamond() -> Graph {
    Graph::from_edges([(1, 2), (2, 4), (3, 4), (4, 2), (4, 3), (1, 3)])
}

#[test]
fn test_json_output_for_found_path() {
    let json = search(&diamond(), &["pargraph", "1", "4", "--json"]);

    assert_eq!(json["query"]["source"], 1);
    assert_eq!(json["query"]["target"], 4);
    assert_eq!(json["query"]["options"]["algorithm"], "bidirectional");
    assert_eq!(json["query"]["options"]["format"], "dimacs");
    assert_eq!(json["result"]["found"], true);
    assert_eq!(json["result"]["hops"], 2);
    assert_eq!(json["result"]["path"].as_array().unwrap().len(), 3);
    assert_eq!(json["stats"]["peers"].as_array().unwrap().len(), 2);
}

#[test]
fn test_json_output_without_path_omits_path_fields() {
    let json = search(&diamond(), &["pargraph", "4", "1", "--json"]);

    assert_eq!(json["result"]["found"], false);
    assert!(json["result"].get("path").is_none());
    assert!(json["result"].get("hops").is_none());
}

#[test]
fn test_json_output_for_unidirectional_search() {
    let json = search(&diamond(), &["pargraph", "1", "3", "-a", "unidirectional"]);

    assert_eq!(json["query"]["options"]["algorithm"], "unidirectional");
    assert_eq!(json["result"]["path"], serde_json::json!([1, 3]));
    assert_eq!(json["stats"]["peers"][0]["start"], 1);
}
