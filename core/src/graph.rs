use rustc_hash::FxHashMap;

pub type NodeId = u32;

/// Adjacency lists keyed by node id. Neighbor order is preserved as loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: FxHashMap<NodeId, Vec<NodeId>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut graph = Self::new();
        for (from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }

    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.adjacency.entry(from).or_default().push(to);
    }

    /// Registers a node with no outgoing edges if it is not already present.
    pub fn add_node(&mut self, node: NodeId) {
        self.adjacency.entry(node).or_default();
    }

    /// Unknown nodes have no neighbors.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.neighbors(from).contains(&to)
    }

    /// Number of nodes with an adjacency entry.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Builds the in-edge view: `b -> a` for every edge `a -> b`.
    ///
    /// Walking the reversed graph from the target visits exactly the nodes that can
    /// reach the target in the original graph.
    pub fn reversed(&self) -> Self {
        let mut reversed = Self {
            adjacency: FxHashMap::with_capacity_and_hasher(self.adjacency.len(), Default::default()),
        };
        for (&from, neighbors) in &self.adjacency {
            reversed.add_node(from);
            for &to in neighbors {
                reversed.add_edge(to, from);
            }
        }
        reversed
    }
}
