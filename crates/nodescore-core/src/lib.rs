#![forbid(unsafe_code)]
//! nodescore-core library.
//!
//! Scores the nodes of a directed graph snapshot by structural criteria and
//! turns the scores into dense ranks scaled for display.
//!
//! ## Pipeline
//!
//! ```text
//! Snapshot + [Criterion]
//!        ↓  criteria::evaluate()      per-criterion raw scores in [0, 1]
//!        ↓  aggregate::aggregate()    summed per node, absent = no contribution
//!        ↓  rank::rank_nodes()        stable sort, dense tie-aware ranks
//!        ↓  normalize::normalize_ranks()  rescaled into [1, 100]
//! Snapshot (same edges, annotated nodes)
//! ```
//!
//! ```rust
//! use nodescore_core::{Criterion, Snapshot, score_nodes};
//!
//! let snap = Snapshot::from_pairs(&["A", "B", "C"], &[("A", "B"), ("A", "C"), ("B", "C")]);
//! let scored = score_nodes(&snap, &[Criterion::InboundEdges]);
//! assert_eq!(scored.node("C").and_then(|n| n.rank), Some(1));
//! assert_eq!(scored.node("A").and_then(|n| n.rank), None);
//! ```
//!
//! # Conventions
//!
//! - **Errors**: The pipeline is infallible. Criterion parsing and
//!   configuration return [`ScoreError`]; file loading uses `anyhow::Result`.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod aggregate;
pub mod config;
pub mod criteria;
pub mod error;
pub mod graph;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod rank;

pub use aggregate::aggregate;
pub use config::{ScoringConfig, load_config};
pub use criteria::{Criterion, evaluate};
pub use error::ScoreError;
pub use model::{Edge, Node, ScoreMap, Snapshot};
pub use normalize::{DEFAULT_RANK_CEILING, normalize_ranks};
pub use pipeline::{reset_scores, score_nodes, score_nodes_with};
pub use rank::rank_nodes;
