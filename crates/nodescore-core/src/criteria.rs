//! Scoring criteria and their evaluators.
//!
//! # Overview
//!
//! A [`Criterion`] names one structural metric. [`evaluate`] turns a snapshot
//! into a [`ScoreMap`] of raw per-node scores in `[0, 1]` for that metric.
//!
//! # Edge-degree criteria
//!
//! ```text
//! score(v) = matching_edges(v) / total_edges
//! ```
//!
//! `InboundEdges` counts edges targeting `v`, `OutboundEdges` counts edges
//! sourced at `v`. Nodes with no matching edge get no score at all (not
//! `0.0`), and an absent or empty edge collection yields an empty map, so no
//! division is ever attempted on a zero total.

use std::fmt;
use std::str::FromStr;

use petgraph::Direction;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::ScoreError;
use crate::graph::SnapshotGraph;
use crate::model::{ScoreMap, Snapshot};

/// A structural metric that produces a per-node raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Criterion {
    /// Share of all edges that target the node.
    InboundEdges,
    /// Share of all edges that originate at the node.
    OutboundEdges,
}

impl Criterion {
    /// Every known criterion, in declaration order.
    pub const ALL: [Self; 2] = [Self::InboundEdges, Self::OutboundEdges];

    /// Stable tag used on the wire and in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InboundEdges => "InboundEdges",
            Self::OutboundEdges => "OutboundEdges",
        }
    }

    const fn direction(self) -> Direction {
        match self {
            Self::InboundEdges => Direction::Incoming,
            Self::OutboundEdges => Direction::Outgoing,
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Criterion {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "inboundedges" | "inbound" | "in" => Ok(Self::InboundEdges),
            "outboundedges" | "outbound" | "out" => Ok(Self::OutboundEdges),
            _ => Err(ScoreError::UnknownCriterion(s.to_string())),
        }
    }
}

/// Compute raw scores for one criterion.
///
/// The result contains an entry only for nodes of the snapshot's node list
/// that have at least one matching edge; every value lies in `(0, 1]`.
#[must_use]
#[instrument(skip(snapshot), fields(nodes = snapshot.nodes.len()))]
pub fn evaluate(snapshot: &Snapshot, criterion: Criterion) -> ScoreMap {
    let graph = SnapshotGraph::from_snapshot(snapshot);
    evaluate_on(snapshot, graph.as_ref(), criterion)
}

/// Evaluate against a prebuilt graph view so several criteria share one
/// graph. `graph` is `None` when the edge collection is absent.
pub(crate) fn evaluate_on(
    snapshot: &Snapshot,
    graph: Option<&SnapshotGraph>,
    criterion: Criterion,
) -> ScoreMap {
    let Some(graph) = graph else {
        debug!(%criterion, "edge collection absent; no scores");
        return ScoreMap::new();
    };

    match criterion {
        Criterion::InboundEdges | Criterion::OutboundEdges => {
            score_by_edges(snapshot, graph, criterion.direction())
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn score_by_edges(snapshot: &Snapshot, graph: &SnapshotGraph, direction: Direction) -> ScoreMap {
    let total_edges = graph.edge_count();
    let mut scores = ScoreMap::with_capacity(snapshot.nodes.len());
    if total_edges == 0 {
        return scores;
    }

    let total = total_edges as f64;
    for node in &snapshot.nodes {
        let count = graph.degree(&node.id, direction);
        if count > 0 {
            scores.insert(node.id.clone(), count as f64 / total);
        }
    }

    debug!(total_edges, scored = scores.len(), "edge criterion evaluated");
    scores
}
