mod state;

use super::utils::{PeerStats, reconstruct_path};
use crate::error::SearchError;
use crate::graph::{Graph, NodeId};
use crossbeam_channel::{Receiver, Select, Sender, TryRecvError, TrySendError};
use state::PeerState;

/// What a peer tells its partner, in the order it happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    /// First discovery of `node`, `hops` edges away from the sender's start.
    Reached { node: NodeId, hops: u32 },
    /// Every node within this many hops of the sender's start has been reported.
    LevelComplete(u32),
    /// The sender's frontier is empty; all of its reachable nodes were reported.
    Exhausted,
}

/// The single decision both peers end on. Posted once into the shared slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Meet(NodeId),
    NoPath,
}

/// Channel ends owned by one peer.
pub struct PeerLinks {
    pub outbound: Sender<Report>,
    pub inbound: Receiver<Report>,
    pub verdict_tx: Sender<Verdict>,
    pub verdict_rx: Receiver<Verdict>,
}

#[derive(Debug)]
pub struct PeerResult {
    /// Meeting point first, the peer's start last.
    pub half_path: Option<Vec<NodeId>>,
    pub stats: PeerStats,
}

/// Runs one search direction from `start` until a verdict exists.
///
/// Each round handles, in priority order: a verdict posted by the partner, one
/// partner report, a verdict this peer can prove itself, and finally one unit of
/// expansion. The peer only blocks once its frontier is empty, and then waits on the
/// verdict slot, the partner's reports and its own pending sends together.
pub fn run_peer(start: NodeId, graph: &Graph, links: PeerLinks) -> Result<PeerResult, SearchError> {
    let mut state = PeerState::new(start);
    tracing::debug!(start, "search peer started");

    loop {
        if let Ok(verdict) = links.verdict_rx.try_recv() {
            return finish(state, verdict);
        }

        match links.inbound.try_recv() {
            Ok(report) => state.absorb(report),
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                // A partner only leaves after a verdict has been posted.
                return match links.verdict_rx.try_recv() {
                    Ok(verdict) => finish(state, verdict),
                    Err(_) => Err(SearchError::PeerLost { start }),
                };
            }
        }

        if let Some(verdict) = state.conclusion() {
            let verdict = post_verdict(&links, verdict, start)?;
            return finish(state, verdict);
        }

        flush_reports(&mut state, &links.outbound);

        if state.has_frontier() {
            state.expand_next(graph);
        } else {
            wait_for_progress(&state, &links);
        }
    }
}

/// First writer wins: if the slot is taken, the partner decided first and its
/// verdict is the one to build from.
fn post_verdict(links: &PeerLinks, verdict: Verdict, start: NodeId) -> Result<Verdict, SearchError> {
    match links.verdict_tx.try_send(verdict) {
        Ok(()) => {
            tracing::debug!(start, ?verdict, "verdict posted");
            Ok(verdict)
        }
        Err(TrySendError::Full(_)) => links
            .verdict_rx
            .recv()
            .map_err(|_| SearchError::PeerLost { start }),
        Err(TrySendError::Disconnected(_)) => Err(SearchError::PeerLost { start }),
    }
}

fn flush_reports(state: &mut PeerState, outbound: &Sender<Report>) {
    while let Some(report) = state.peek_report() {
        match outbound.try_send(report) {
            Ok(()) => state.report_sent(),
            Err(TrySendError::Full(_)) => break,
            Err(TrySendError::Disconnected(_)) => {
                state.drop_reports();
                break;
            }
        }
    }
}

/// Blocks until a verdict or report arrives, or a pending report can be sent.
fn wait_for_progress(state: &PeerState, links: &PeerLinks) {
    let mut select = Select::new();
    select.recv(&links.verdict_rx);
    select.recv(&links.inbound);
    if state.peek_report().is_some() {
        select.send(&links.outbound);
    }
    select.ready();
}

fn finish(state: PeerState, verdict: Verdict) -> Result<PeerResult, SearchError> {
    let half_path = match verdict {
        Verdict::Meet(meeting_point) => Some(reconstruct_path(
            &state.parent_map,
            meeting_point,
            state.start(),
        )?),
        Verdict::NoPath => None,
    };

    let stats = state.stats();
    tracing::debug!(
        start = stats.start,
        visited = stats.nodes_visited,
        edges = stats.edges_examined,
        reports = stats.reports_sent,
        "search peer finished"
    );

    Ok(PeerResult { half_path, stats })
}
