use super::utils::{ParentMap, PeerStats, SearchOutcome, reconstruct_path};
use crate::error::SearchError;
use crate::graph::{Graph, NodeId};
use rustc_hash::{FxHashMap, FxHashSet};
use std::{collections::VecDeque, time::Instant};

struct BfsState {
    queue: VecDeque<NodeId>,
    visited: FxHashSet<NodeId>,
    parent_map: ParentMap,
    edges_examined: usize,
}

impl BfsState {
    fn new(start: NodeId) -> Self {
        let mut queue = VecDeque::new();
        let mut visited = FxHashSet::default();

        queue.push_back(start);
        visited.insert(start);

        Self {
            queue,
            visited,
            parent_map: ParentMap::default(),
            edges_examined: 0,
        }
    }

    fn visit_neighbor(&mut self, neighbor: NodeId, current: NodeId) {
        self.edges_examined += 1;
        if self.visited.insert(neighbor) {
            self.parent_map.insert(neighbor, current);
            self.queue.push_back(neighbor);
        }
    }
}

/// Single-direction breadth-first search from `start` to `target`.
pub fn bfs_find_path(graph: &Graph, start: NodeId, target: NodeId) -> Result<SearchOutcome, SearchError> {
    let search_timer = Instant::now();
    let mut bfs_state = BfsState::new(start);
    let mut path = None;

    while let Some(current_node) = bfs_state.queue.pop_front() {
        if current_node == target {
            let mut found = reconstruct_path(&bfs_state.parent_map, target, start)?;
            found.reverse();
            path = Some(found);
            break;
        }

        for &neighbor in graph.neighbors(current_node) {
            bfs_state.visit_neighbor(neighbor, current_node);
        }
    }

    let stats = PeerStats {
        start,
        nodes_visited: bfs_state.visited.len(),
        edges_examined: bfs_state.edges_examined,
        reports_sent: 0,
    };

    Ok(SearchOutcome {
        path,
        nodes_explored: stats.nodes_visited,
        elapsed_secs: search_timer.elapsed().as_secs_f64(),
        peer_stats: vec![stats],
    })
}

/// Hop distance from `start` to every node it can reach.
pub fn hop_distances(graph: &Graph, start: NodeId) -> FxHashMap<NodeId, usize> {
    let mut distances = FxHashMap::default();
    let mut queue = VecDeque::from([start]);
    distances.insert(start, 0);

    while let Some(current_node) = queue.pop_front() {
        let next_distance = distances[&current_node] + 1;
        for &neighbor in graph.neighbors(current_node) {
            if !distances.contains_key(&neighbor) {
                distances.insert(neighbor, next_distance);
                queue.push_back(neighbor);
            }
        }
    }

    distances
}
