use super::peer::{PeerLinks, PeerResult, Verdict, run_peer};
use super::utils::{SearchOutcome, join_half_paths};
use crate::error::SearchError;
use crate::graph::{Graph, NodeId};
use crate::search_config::SearchConfig;
use crossbeam_channel::{Receiver, bounded, select};
use std::{thread, time::Instant};

type PeerReply = Result<PeerResult, SearchError>;

/// Fewest-hops path from `source` to `target`, found by two concurrent breadth-first
/// searches that meet in the middle.
///
/// The source peer walks `graph` forwards; the target peer walks a reversed copy, so
/// every returned path follows the graph's edge directions. `Ok` with `path: None`
/// means the target is unreachable.
pub fn bidirectional_bfs(
    graph: &Graph,
    source: NodeId,
    target: NodeId,
    config: &SearchConfig,
) -> Result<SearchOutcome, SearchError> {
    let search_timer = Instant::now();
    let reverse_graph = graph.reversed();
    let capacity = config.channel_capacity.max(1);

    let (verdict_tx, verdict_rx) = bounded::<Verdict>(1);
    let (source_reports_tx, source_reports_rx) = bounded(capacity);
    let (target_reports_tx, target_reports_rx) = bounded(capacity);
    let (source_reply_tx, source_reply_rx) = bounded::<PeerReply>(1);
    let (target_reply_tx, target_reply_rx) = bounded::<PeerReply>(1);

    let source_links = PeerLinks {
        outbound: source_reports_tx,
        inbound: target_reports_rx,
        verdict_tx: verdict_tx.clone(),
        verdict_rx: verdict_rx.clone(),
    };
    let target_links = PeerLinks {
        outbound: target_reports_tx,
        inbound: source_reports_rx,
        verdict_tx,
        verdict_rx,
    };

    let reverse_graph = &reverse_graph;
    let (source_result, target_result) = thread::scope(|scope| {
        scope.spawn(move || {
            let _ = source_reply_tx.send(run_peer(source, graph, source_links));
        });
        scope.spawn(move || {
            let _ = target_reply_tx.send(run_peer(target, reverse_graph, target_links));
        });

        race_peers(&source_reply_rx, &target_reply_rx, source, target)
    })?;

    // The scope has joined both peers, so a result skipped by the race is already
    // waiting in its channel.
    let source_result = match source_result {
        Some(result) => Some(result),
        None => late_reply(&source_reply_rx, source)?,
    };
    let target_result = match target_result {
        Some(result) => Some(result),
        None => late_reply(&target_reply_rx, target)?,
    };

    let path = match (&source_result, &target_result) {
        (
            Some(PeerResult {
                half_path: Some(source_half),
                ..
            }),
            Some(PeerResult {
                half_path: Some(target_half),
                ..
            }),
        ) => Some(join_half_paths(source_half.clone(), target_half)),
        _ => None,
    };

    let peer_stats: Vec<_> = [source_result, target_result]
        .into_iter()
        .flatten()
        .map(|result| result.stats)
        .collect();
    let nodes_explored = peer_stats.iter().map(|stats| stats.nodes_visited).sum();
    let elapsed_secs = search_timer.elapsed().as_secs_f64();

    tracing::debug!(
        source,
        target,
        found = path.is_some(),
        nodes_explored,
        elapsed_secs,
        "bidirectional search finished"
    );

    Ok(SearchOutcome {
        path,
        nodes_explored,
        elapsed_secs,
        peer_stats,
    })
}

/// Collects the reply of a peer the race did not wait for. A failure there is
/// still a failure of the search.
fn late_reply(rx: &Receiver<PeerReply>, start: NodeId) -> Result<Option<PeerResult>, SearchError> {
    match rx.try_recv() {
        Ok(reply) => reply.map(Some).inspect_err(|error| {
            tracing::warn!(start, %error, "search peer failed after the verdict");
        }),
        Err(_) => Ok(None),
    }
}

/// Waits for whichever peer answers first. A "no path" answer ends the race
/// immediately; otherwise the second half-path is awaited.
fn race_peers(
    source_rx: &Receiver<PeerReply>,
    target_rx: &Receiver<PeerReply>,
    source: NodeId,
    target: NodeId,
) -> Result<(Option<PeerResult>, Option<PeerResult>), SearchError> {
    let receive = |rx: &Receiver<PeerReply>, start: NodeId| -> PeerReply {
        rx.recv().map_err(|_| SearchError::PeerLost { start })?
    };

    select! {
        recv(source_rx) -> reply => {
            let first = reply.map_err(|_| SearchError::PeerLost { start: source })??;
            if first.half_path.is_none() {
                return Ok((Some(first), None));
            }
            let second = receive(target_rx, target)?;
            Ok((Some(first), Some(second)))
        }
        recv(target_rx) -> reply => {
            let first = reply.map_err(|_| SearchError::PeerLost { start: target })??;
            if first.half_path.is_none() {
                return Ok((None, Some(first)));
            }
            let second = receive(source_rx, source)?;
            Ok((Some(second), Some(first)))
        }
    }
}
