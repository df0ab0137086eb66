//! Multi-criteria aggregation.
//!
//! Folds per-criterion [`ScoreMap`]s into one combined score per node, in the
//! caller's criterion order. A present score is added to the node's running
//! total (or starts it); an absent score contributes nothing. Nodes that no
//! criterion scored stay out of the combined map and therefore go unranked.

use tracing::{debug, instrument};

use crate::criteria::{Criterion, evaluate_on};
use crate::graph::SnapshotGraph;
use crate::model::{ScoreMap, Snapshot};

/// Combine the scores of every criterion in `criteria`.
///
/// Each criterion's evaluation only reads the snapshot, so the order of
/// evaluation does not matter; the fold runs in `criteria` order so that
/// floating-point sums are reproducible. An empty `criteria` slice yields an
/// empty map (the pipeline treats that case as a reset before getting here).
#[must_use]
#[instrument(skip(snapshot), fields(nodes = snapshot.nodes.len()))]
pub fn aggregate(snapshot: &Snapshot, criteria: &[Criterion]) -> ScoreMap {
    let graph = SnapshotGraph::from_snapshot(snapshot);
    let mut combined = ScoreMap::with_capacity(snapshot.nodes.len());

    for &criterion in criteria {
        let scores = evaluate_on(snapshot, graph.as_ref(), criterion);
        fold_into(&mut combined, scores);
    }

    debug!(criteria = criteria.len(), scored = combined.len(), "scores aggregated");
    combined
}

fn fold_into(combined: &mut ScoreMap, scores: ScoreMap) {
    for (id, score) in scores {
        *combined.entry(id).or_insert(0.0) += score;
    }
}
