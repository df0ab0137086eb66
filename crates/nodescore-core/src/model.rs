//! Graph snapshot types shared with the rendering layer.
//!
//! A [`Snapshot`] is an ordered list of [`Node`]s and an optional ordered list
//! of [`Edge`]s. Everything the scoring core does not own (labels, layout
//! hints, traffic data, ...) rides along in the flattened `attributes` map and
//! is written back untouched.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Present per-node scores keyed by node ID.
///
/// A node without an entry has no score: it is excluded from the
/// contribution, which is not the same as contributing `0.0`.
pub type ScoreMap = HashMap<String, f64>;

/// A graph node as seen by the scoring core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier within a snapshot.
    pub id: String,
    /// Combined score across the requested criteria, if any applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Normalized dense rank (1 is the most important node).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    /// Any other node data, preserved as-is.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Node {
    /// Create an unscored, unranked node with no extra attributes.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            score: None,
            rank: None,
            attributes: Map::new(),
        }
    }

    /// Drop any score and rank annotation.
    pub const fn clear_annotations(&mut self) {
        self.score = None;
        self.rank = None;
    }
}

/// A directed edge `source → target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Edge {
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            attributes: Map::new(),
        }
    }
}

/// A read-only view of the graph handed over by the caller.
///
/// `edges: None` means the edge collection is absent altogether, which is
/// distinct from `Some(vec![])`. Neither produces any score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<Edge>>,
}

impl Snapshot {
    /// Build a snapshot from node IDs and `(source, target)` pairs.
    #[must_use]
    pub fn from_pairs(nodes: &[&str], edges: &[(&str, &str)]) -> Self {
        Self {
            nodes: nodes.iter().map(|id| Node::new(*id)).collect(),
            edges: Some(edges.iter().map(|(s, t)| Edge::new(*s, *t)).collect()),
        }
    }

    /// Number of edges, or `None` when the edge collection is absent.
    #[must_use]
    pub fn edge_count(&self) -> Option<usize> {
        self.edges.as_ref().map(Vec::len)
    }

    /// Look up a node by ID.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
