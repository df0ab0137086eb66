//! Directed graph view over a [`Snapshot`].
//!
//! # Overview
//!
//! Criterion evaluation needs per-node edge counts in either direction. This
//! module loads the snapshot's nodes and edges into a [`petgraph`] `DiGraph`
//! once, so each criterion becomes a degree query.
//!
//! ## Edge Direction
//!
//! An edge `A → B` in the graph is the snapshot edge `source: A, target: B`.
//! Inbound edges of `B` are therefore the edges that target it.
//!
//! ## Out-of-contract input
//!
//! Edges that reference IDs missing from the node list are not rejected: the
//! missing endpoint is added as a graph node so the edge is still counted.
//! Parallel edges and self-loops are kept; each one counts once toward the
//! degree of each endpoint.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
};
use tracing::{instrument, trace};

use crate::model::Snapshot;

/// A petgraph view over a snapshot's nodes and edges.
#[derive(Debug)]
pub struct SnapshotGraph {
    /// Directed graph: nodes = node IDs, edges = snapshot edges.
    pub graph: DiGraph<String, ()>,
    /// Mapping from node ID to petgraph `NodeIndex`.
    pub node_map: HashMap<String, NodeIndex>,
}

impl SnapshotGraph {
    /// Returns `None` when the snapshot's edge collection is absent.
    ///
    /// All snapshot nodes are included, even those with no edges, so degree
    /// queries see the full node set.
    #[must_use]
    #[instrument(skip(snapshot), fields(nodes = snapshot.nodes.len()))]
    pub fn from_snapshot(snapshot: &Snapshot) -> Option<Self> {
        let edges = snapshot.edges.as_ref()?;

        let mut graph = DiGraph::<String, ()>::with_capacity(snapshot.nodes.len(), edges.len());
        let mut node_map: HashMap<String, NodeIndex> =
            HashMap::with_capacity(snapshot.nodes.len());

        for node in &snapshot.nodes {
            node_map
                .entry(node.id.clone())
                .or_insert_with(|| graph.add_node(node.id.clone()));
        }

        for edge in edges {
            let source_idx = *node_map.entry(edge.source.clone()).or_insert_with(|| {
                trace!(id = %edge.source, "edge source not in node list");
                graph.add_node(edge.source.clone())
            });
            let target_idx = *node_map.entry(edge.target.clone()).or_insert_with(|| {
                trace!(id = %edge.target, "edge target not in node list");
                graph.add_node(edge.target.clone())
            });
            graph.add_edge(source_idx, target_idx, ());
        }

        Some(Self { graph, node_map })
    }

    /// Return the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of edges touching `id` in `direction`.
    ///
    /// `Direction::Incoming` counts edges targeting the node,
    /// `Direction::Outgoing` counts edges it is the source of. Unknown IDs
    /// have degree 0.
    #[must_use]
    pub fn degree(&self, id: &str, direction: Direction) -> usize {
        self.node_map
            .get(id)
            .map_or(0, |&idx| self.graph.edges_directed(idx, direction).count())
    }
}
