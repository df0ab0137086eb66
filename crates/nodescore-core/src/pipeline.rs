//! End-to-end scoring: evaluate → aggregate → rank → normalize.
//!
//! The input snapshot is only borrowed. Callers get back a fresh snapshot
//! with the same edges and the same node set, each node carrying a freshly
//! computed `score` and `rank`. Nothing from a previous run leaks through:
//! a node that no criterion scores ends up with neither annotation.
//!
//! Node order in the result follows the ranking (best first, unranked last)
//! and is not part of the contract.

use tracing::{debug, info, instrument};

use crate::aggregate::aggregate;
use crate::config::ScoringConfig;
use crate::criteria::Criterion;
use crate::model::Snapshot;
use crate::normalize::{DEFAULT_RANK_CEILING, normalize_ranks};
use crate::rank::rank_nodes;

/// Score and rank `snapshot` with the default rank ceiling.
///
/// An empty `criteria` slice resets every node (see [`reset_scores`]).
#[must_use]
pub fn score_nodes(snapshot: &Snapshot, criteria: &[Criterion]) -> Snapshot {
    score_with_ceiling(snapshot, criteria, DEFAULT_RANK_CEILING)
}

/// Score and rank `snapshot`, normalizing ranks into
/// `[1, config.rank_ceiling]`.
///
/// `config.criteria` is not consulted; the caller decides which criteria
/// apply.
#[must_use]
pub fn score_nodes_with(
    snapshot: &Snapshot,
    criteria: &[Criterion],
    config: &ScoringConfig,
) -> Snapshot {
    score_with_ceiling(snapshot, criteria, config.rank_ceiling)
}

/// Clear `score` and `rank` on every node. Edges are returned unchanged.
#[must_use]
pub fn reset_scores(snapshot: &Snapshot) -> Snapshot {
    let nodes = snapshot
        .nodes
        .iter()
        .cloned()
        .map(|mut node| {
            node.clear_annotations();
            node
        })
        .collect();

    Snapshot {
        nodes,
        edges: snapshot.edges.clone(),
    }
}

#[instrument(skip(snapshot), fields(nodes = snapshot.nodes.len(), edges = snapshot.edge_count()))]
fn score_with_ceiling(snapshot: &Snapshot, criteria: &[Criterion], ceiling: u32) -> Snapshot {
    if criteria.is_empty() {
        debug!("no criteria requested; resetting scores");
        return reset_scores(snapshot);
    }

    let mut combined = aggregate(snapshot, criteria);

    let scored = snapshot
        .nodes
        .iter()
        .cloned()
        .map(|mut node| {
            node.rank = None;
            node.score = combined.remove(&node.id);
            node
        })
        .collect();

    let nodes = normalize_ranks(rank_nodes(scored), ceiling);

    info!(
        ranked = nodes.iter().filter(|n| n.rank.is_some()).count(),
        total = nodes.len(),
        "snapshot scored"
    );

    Snapshot {
        nodes,
        edges: snapshot.edges.clone(),
    }
}
