//! Rank normalization into the display range.
//!
//! # Overview
//!
//! Dense ranks run from 1 to however many distinct scores exist. The renderer
//! wants a bounded scale, so ranks are rescaled linearly into
//! `[1, min(max_rank, ceiling)]` (the ceiling defaults to
//! [`DEFAULT_RANK_CEILING`]):
//!
//! ```text
//! normalized = 1 + ceil((rank - 1) * (upper - 1) / (max_rank - 1))
//! ```
//!
//! Rounding up keeps results integral and never under-counts the top rank.
//! The arithmetic is done in integers, so the ceiling is exact. Rank groups
//! and their relative order survive; when `max_rank` is within the ceiling
//! the mapping is the identity.

use tracing::{debug, instrument};

use crate::model::Node;

/// Upper bound of the normalized rank scale.
pub const DEFAULT_RANK_CEILING: u32 = 100;

/// Rescale assigned ranks into `[1, min(max_rank, ceiling)]`.
///
/// Only nodes that carry a rank are touched; unranked nodes pass through
/// unchanged and node order is preserved. `max_rank` is the largest rank
/// present, so the result does not depend on ranked nodes forming a prefix.
/// A `ceiling` of 0 is treated as 1.
#[must_use]
#[instrument(skip(nodes), fields(nodes = nodes.len()))]
pub fn normalize_ranks(mut nodes: Vec<Node>, ceiling: u32) -> Vec<Node> {
    // Ranks always start at 1 when anything was ranked at all.
    let min_rank: u32 = 1;
    let Some(max_rank) = nodes.iter().filter_map(|n| n.rank).max() else {
        return nodes;
    };

    let lower: u32 = 1;
    let upper = max_rank.min(ceiling.max(lower));
    debug!(max_rank, upper, "normalizing ranks");

    for node in &mut nodes {
        let Some(rank) = node.rank else {
            continue;
        };

        // All ranked nodes tied: nothing to spread out.
        if max_rank == min_rank {
            node.rank = Some(min_rank);
            continue;
        }

        let offset = u64::from(rank.saturating_sub(min_rank)) * u64::from(upper - lower);
        let span = u64::from(max_rank - min_rank);
        let scaled = u32::try_from(offset.div_ceil(span)).unwrap_or(upper - lower);
        node.rank = Some(lower + scaled);
    }

    nodes
}
