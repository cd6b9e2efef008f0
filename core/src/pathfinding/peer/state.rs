use super::{Report, Verdict};
use crate::graph::{Graph, NodeId};
use crate::pathfinding::utils::{ParentMap, PeerStats};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Everything one search direction owns. Nothing in here is shared with the partner;
/// the partner only ever sees the `Report`s queued in `outbox`.
pub struct PeerState {
    start: NodeId,
    queue: VecDeque<NodeId>,
    hops: FxHashMap<NodeId, u32>,
    pub visited: FxHashSet<NodeId>,
    pub parent_map: ParentMap,
    partner_hops: FxHashMap<NodeId, u32>,
    partner_level: Option<u32>,
    partner_exhausted: bool,
    reported_level: Option<u32>,
    best_meeting: Option<(NodeId, u32)>,
    outbox: VecDeque<Report>,
    edges_examined: usize,
    reports_sent: usize,
}

impl PeerState {
    pub fn new(start: NodeId) -> Self {
        let mut queue = VecDeque::new();
        let mut hops = FxHashMap::default();
        let mut outbox = VecDeque::new();

        queue.push_back(start);
        hops.insert(start, 0);
        outbox.push_back(Report::Reached {
            node: start,
            hops: 0,
        });

        Self {
            start,
            queue,
            hops,
            visited: FxHashSet::default(),
            parent_map: FxHashMap::default(),
            partner_hops: FxHashMap::default(),
            partner_level: None,
            partner_exhausted: false,
            reported_level: None,
            best_meeting: None,
            outbox,
            edges_examined: 0,
            reports_sent: 0,
        }
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn has_frontier(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Hop distance at the head of the frontier. Every node at or below it has been
    /// discovered. `None` once the frontier is exhausted.
    fn own_level(&self) -> Option<u32> {
        self.queue
            .front()
            .and_then(|node| self.hops.get(node).copied())
    }

    pub fn absorb(&mut self, report: Report) {
        match report {
            Report::Reached { node, hops } => {
                self.partner_hops.entry(node).or_insert(hops);
                if let Some(&own_hops) = self.hops.get(&node) {
                    self.consider_meeting(node, own_hops + hops);
                }
            }
            Report::LevelComplete(level) => {
                self.partner_level = Some(self.partner_level.map_or(level, |known| known.max(level)));
            }
            Report::Exhausted => self.partner_exhausted = true,
        }
    }

    /// Keeps the cheapest overlap; ties go to whichever was found first.
    fn consider_meeting(&mut self, node: NodeId, cost: u32) {
        if self.best_meeting.is_none_or(|(_, best_cost)| cost < best_cost) {
            self.best_meeting = Some((node, cost));
        }
    }

    /// A verdict this peer can prove on its own, if any.
    ///
    /// A candidate is final once its cost is at most `own_level + partner_level`: any
    /// path of that length has a node this peer has discovered and the partner has
    /// already reported. Exhaustion on either side makes the known candidates
    /// complete, so no candidate at that point means no path.
    pub fn conclusion(&self) -> Option<Verdict> {
        let settled = || match self.best_meeting {
            Some((node, _)) => Verdict::Meet(node),
            None => Verdict::NoPath,
        };

        if self.partner_exhausted {
            return Some(settled());
        }

        let partner_level = self.partner_level?;
        let Some(own_level) = self.own_level() else {
            return Some(settled());
        };

        match self.best_meeting {
            Some((node, cost)) if cost <= own_level.saturating_add(partner_level) => {
                Some(Verdict::Meet(node))
            }
            _ => None,
        }
    }

    /// Expands the node at the head of the frontier.
    pub fn expand_next(&mut self, graph: &Graph) {
        let Some(current) = self.queue.pop_front() else {
            return;
        };
        let current_hops = self.hops.get(&current).copied().unwrap_or_default();

        if self.reported_level.is_none_or(|level| current_hops > level) {
            self.reported_level = Some(current_hops);
            self.outbox.push_back(Report::LevelComplete(current_hops));
        }

        for &neighbor in graph.neighbors(current) {
            self.edges_examined += 1;
            self.visit_neighbor(neighbor, current, current_hops + 1);
        }
        self.visited.insert(current);

        if self.queue.is_empty() {
            self.outbox.push_back(Report::Exhausted);
        }
    }

    fn visit_neighbor(&mut self, neighbor: NodeId, current: NodeId, neighbor_hops: u32) {
        if self.hops.contains_key(&neighbor) {
            return;
        }
        self.hops.insert(neighbor, neighbor_hops);
        self.parent_map.insert(neighbor, current);
        self.queue.push_back(neighbor);
        self.outbox.push_back(Report::Reached {
            node: neighbor,
            hops: neighbor_hops,
        });

        if let Some(&partner_hops) = self.partner_hops.get(&neighbor) {
            self.consider_meeting(neighbor, neighbor_hops + partner_hops);
        }
    }

    pub fn peek_report(&self) -> Option<Report> {
        self.outbox.front().copied()
    }

    pub fn report_sent(&mut self) {
        if self.outbox.pop_front().is_some() {
            self.reports_sent += 1;
        }
    }

    /// The partner is gone; nothing queued can be delivered any more.
    pub fn drop_reports(&mut self) {
        self.outbox.clear();
    }

    pub fn stats(&self) -> PeerStats {
        PeerStats {
            start: self.start,
            nodes_visited: self.visited.len(),
            edges_examined: self.edges_examined,
            reports_sent: self.reports_sent,
        }
    }
}
