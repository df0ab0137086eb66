//! Dense, tie-aware ranking by combined score.
//!
//! # Algorithm
//!
//! 1. Stable-sort nodes by score descending; unscored nodes go last and keep
//!    their relative input order.
//! 2. Walk the sorted list with `current_rank = 1`. Each scored node strictly
//!    below the previous score bumps the rank by one; equal scores share it.
//!
//! Ranks therefore start at 1 and never skip a number (`0.8, 0.5, 0.5, 0.1`
//! ranks as `1, 2, 2, 3`). Unscored nodes receive no rank.

use std::cmp::Ordering;

use tracing::{debug, instrument};

use crate::model::Node;

/// Order two optional scores: higher first, absent last.
fn by_score_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort `nodes` by score and assign dense ranks.
///
/// Returns the nodes in ranked order: every ranked node precedes every
/// unranked one, and ranks are non-decreasing along the returned sequence.
/// Fields other than `rank` are left as they were.
#[must_use]
#[instrument(skip(nodes), fields(nodes = nodes.len()))]
pub fn rank_nodes(mut nodes: Vec<Node>) -> Vec<Node> {
    nodes.sort_by(|a, b| by_score_desc(a.score, b.score));

    let mut current_rank: u32 = 1;
    let mut previous_score: Option<f64> = None;

    for node in &mut nodes {
        let Some(score) = node.score else {
            node.rank = None;
            continue;
        };

        if previous_score.is_some_and(|prev| score < prev) {
            current_rank += 1;
        }

        node.rank = Some(current_rank);
        previous_score = Some(score);
    }

    debug!(
        max_rank = previous_score.map(|_| current_rank),
        "nodes ranked"
    );
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(id: &str, score: Option<f64>) -> Node {
        let mut node = Node::new(id);
        node.score = score;
        node
    }

    fn ids(nodes: &[Node]) -> Vec<&str> {
        nodes.iter().map(|n| n.id.as_str()).collect()
    }

    fn ranks(nodes: &[Node]) -> Vec<Option<u32>> {
        nodes.iter().map(|n| n.rank).collect()
    }

    #[test]
    fn empty_input() {
        assert!(rank_nodes(Vec::new()).is_empty());
    }

    #[test]
    fn distinct_scores_rank_descending() {
        let nodes = vec![
            scored("low", Some(0.1)),
            scored("high", Some(0.9)),
            scored("mid", Some(0.5)),
        ];
        let ranked = rank_nodes(nodes);
        assert_eq!(ids(&ranked), vec!["high", "mid", "low"]);
        assert_eq!(ranks(&ranked), vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn ties_share_rank_without_gaps() {
        let nodes = vec![
            scored("a", Some(0.8)),
            scored("b", Some(0.5)),
            scored("c", Some(0.5)),
            scored("d", Some(0.1)),
        ];
        let ranked = rank_nodes(nodes);
        assert_eq!(ranks(&ranked), vec![Some(1), Some(2), Some(2), Some(3)]);
    }

    #[test]
    fn ties_keep_input_order() {
        let nodes = vec![
            scored("z", Some(0.5)),
            scored("y", Some(0.5)),
            scored("x", Some(0.5)),
        ];
        let ranked = rank_nodes(nodes);
        assert_eq!(ids(&ranked), vec!["z", "y", "x"]);
        assert_eq!(ranks(&ranked), vec![Some(1), Some(1), Some(1)]);
    }

    #[test]
    fn unscored_nodes_sort_last_and_stay_unranked() {
        let nodes = vec![
            scored("none-1", None),
            scored("a", Some(0.2)),
            scored("none-2", None),
            scored("b", Some(0.7)),
        ];
        let ranked = rank_nodes(nodes);
        assert_eq!(ids(&ranked), vec!["b", "a", "none-1", "none-2"]);
        assert_eq!(ranks(&ranked), vec![Some(1), Some(2), None, None]);
    }

    #[test]
    fn stale_rank_on_unscored_node_is_dropped() {
        let mut stale = scored("stale", None);
        stale.rank = Some(4);
        let ranked = rank_nodes(vec![stale]);
        assert_eq!(ranked[0].rank, None);
    }

    #[test]
    fn all_unscored() {
        let ranked = rank_nodes(vec![scored("a", None), scored("b", None)]);
        assert_eq!(ids(&ranked), vec!["a", "b"]);
        assert_eq!(ranks(&ranked), vec![None, None]);
    }

    #[test]
    fn other_fields_untouched() {
        let mut node = scored("a", Some(0.4));
        node.attributes
            .insert("label".into(), serde_json::Value::from("reviews"));
        let ranked = rank_nodes(vec![node]);
        assert_eq!(ranked[0].score, Some(0.4));
        assert_eq!(ranked[0].attributes["label"], "reviews");
    }
}
