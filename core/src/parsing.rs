use crate::error::LoadError;
use crate::graph::{Graph, NodeId};
use memmap2::Mmap;
use serde::{Deserialize, Serialize};
use std::{fs::File, path::Path};

/// On-disk layouts the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphFormat {
    /// 9th DIMACS implementation challenge: `a <from> <to> [weight]` per edge,
    /// every other line ignored.
    #[default]
    Dimacs,
    /// `<node> <neighbor> <neighbor> ...` per line.
    #[serde(rename = "adjacency")]
    AdjacencyList,
}

impl GraphFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphFormat::Dimacs => "dimacs",
            GraphFormat::AdjacencyList => "adjacency",
        }
    }
}

impl From<&str> for GraphFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "adjacency" | "adjacency-list" | "adj" => GraphFormat::AdjacencyList,
            _ => GraphFormat::Dimacs,
        }
    }
}

impl From<String> for GraphFormat {
    fn from(s: String) -> Self {
        GraphFormat::from(s.as_str())
    }
}

pub fn load_graph(graph_path: &Path, format: GraphFormat) -> Result<Graph, LoadError> {
    let file = File::open(graph_path)?;
    if file.metadata()?.len() == 0 {
        return Ok(Graph::new());
    }

    let graph_data = unsafe { Mmap::map(&file)? };
    let text = std::str::from_utf8(&graph_data)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    let graph = load_graph_str(text, format)?;
    tracing::info!(
        path = %graph_path.display(),
        format = format.as_str(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

pub fn load_graph_str(text: &str, format: GraphFormat) -> Result<Graph, LoadError> {
    match format {
        GraphFormat::Dimacs => parse_dimacs(text),
        GraphFormat::AdjacencyList => parse_adjacency_list(text),
    }
}

fn parse_dimacs(text: &str) -> Result<Graph, LoadError> {
    let mut graph = Graph::new();

    for (line_index, line) in text.lines().enumerate() {
        if !line.starts_with('a') {
            continue;
        }
        let line_number = line_index + 1;
        let mut tokens = line.split_whitespace();
        tokens.next();

        let from = parse_node_token(tokens.next(), line_number, 1)?;
        let to = parse_node_token(tokens.next(), line_number, 2)?;
        graph.add_edge(from, to);
    }

    Ok(graph)
}

fn parse_adjacency_list(text: &str) -> Result<Graph, LoadError> {
    let mut graph = Graph::new();

    for (line_index, line) in text.lines().enumerate() {
        let line_number = line_index + 1;
        let mut tokens = line.split_whitespace();

        let Some(first) = tokens.next() else {
            continue;
        };
        let node = parse_node_token(Some(first), line_number, 0)?;
        graph.add_node(node);

        for (offset, token) in tokens.enumerate() {
            let neighbor = parse_node_token(Some(token), line_number, offset + 1)?;
            graph.add_edge(node, neighbor);
        }
    }

    Ok(graph)
}

fn parse_node_token(token: Option<&str>, line: usize, position: usize) -> Result<NodeId, LoadError> {
    let value = token.ok_or(LoadError::MissingToken {
        line,
        token: position,
    })?;

    value.parse::<NodeId>().map_err(|_| LoadError::InvalidToken {
        line,
        token: position,
        value: value.to_string(),
    })
}
