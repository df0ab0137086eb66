use std::collections::HashMap;

use nodescore_core::{Criterion, Snapshot, evaluate, score_nodes};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Snapshot with 1..=`max_nodes` uniquely named nodes and up to `max_edges`
/// edges between them (self-loops and parallel edges included).
fn arb_snapshot(max_nodes: usize, max_edges: usize) -> impl Strategy<Value = Snapshot> {
    (1..=max_nodes).prop_flat_map(move |n| {
        prop::collection::vec((0..n, 0..n), 0..=max_edges).prop_map(move |pairs| {
            let ids: Vec<String> = (0..n).map(|i| format!("n{i}")).collect();
            let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
            let edges: Vec<(&str, &str)> = pairs
                .iter()
                .map(|&(s, t)| (id_refs[s], id_refs[t]))
                .collect();
            Snapshot::from_pairs(&id_refs, &edges)
        })
    })
}

fn arb_criteria() -> impl Strategy<Value = Vec<Criterion>> {
    prop::collection::vec(
        prop_oneof![Just(Criterion::InboundEdges), Just(Criterion::OutboundEdges)],
        0..4,
    )
}

/// Nodes of a scoring result, best rank first, unranked last.
fn by_rank(snapshot: &Snapshot) -> Vec<(Option<f64>, Option<u32>)> {
    let mut pairs: Vec<_> = snapshot.nodes.iter().map(|n| (n.score, n.rank)).collect();
    pairs.sort_by_key(|&(_, rank)| rank.unwrap_or(u32::MAX));
    pairs
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(512))]

    #[test]
    fn empty_criteria_clear_everything(snap in arb_snapshot(12, 30)) {
        let first = score_nodes(&snap, &Criterion::ALL);
        let reset = score_nodes(&first, &[]);

        prop_assert!(reset.nodes.iter().all(|n| n.score.is_none() && n.rank.is_none()));
        prop_assert_eq!(&reset.edges, &snap.edges);
    }

    #[test]
    fn edge_shares_sum_to_one(snap in arb_snapshot(12, 30)) {
        prop_assume!(snap.edge_count().unwrap_or(0) > 0);

        for criterion in Criterion::ALL {
            let scores = evaluate(&snap, criterion);
            let total: f64 = scores.values().sum();
            prop_assert!((total - 1.0).abs() < 1e-9, "{criterion}: sum = {total}");
            prop_assert!(scores.values().all(|s| *s > 0.0 && *s <= 1.0));
        }
    }

    #[test]
    fn ranks_follow_scores(snap in arb_snapshot(15, 40), criteria in arb_criteria()) {
        let out = score_nodes(&snap, &criteria);
        let ordered = by_rank(&out);

        for pair in ordered.windows(2) {
            let (score_a, rank_a) = pair[0];
            let (score_b, rank_b) = pair[1];
            if let (Some(sa), Some(sb), Some(ra), Some(rb)) = (score_a, score_b, rank_a, rank_b) {
                prop_assert!(sa >= sb);
                if sa == sb {
                    prop_assert_eq!(ra, rb, "equal scores share a rank");
                } else {
                    prop_assert!(ra <= rb);
                }
            }
        }
    }

    #[test]
    fn unscored_means_unranked(snap in arb_snapshot(15, 40), criteria in arb_criteria()) {
        let out = score_nodes(&snap, &criteria);
        for node in &out.nodes {
            prop_assert_eq!(node.score.is_some(), node.rank.is_some(), "node {}", node.id);
        }
    }

    #[test]
    fn normalized_ranks_in_bounds(snap in arb_snapshot(40, 200), criteria in arb_criteria()) {
        let out = score_nodes(&snap, &criteria);
        let ranks: Vec<u32> = out.nodes.iter().filter_map(|n| n.rank).collect();
        if let Some(&max) = ranks.iter().max() {
            prop_assert!(ranks.iter().all(|&r| (1..=100).contains(&r)));
            prop_assert!(ranks.contains(&1), "top rank is always 1");
            prop_assert!(max <= 100);
        }

        let distinct: std::collections::BTreeSet<u64> = out
            .nodes
            .iter()
            .filter_map(|n| n.score.map(f64::to_bits))
            .collect();
        if distinct.len() == 1 {
            prop_assert!(ranks.iter().all(|&r| r == 1), "all tied → rank 1");
        }
    }

    #[test]
    fn rescoring_is_idempotent(snap in arb_snapshot(15, 40), criteria in arb_criteria()) {
        let first = score_nodes(&snap, &criteria);
        let second = score_nodes(&first, &criteria);

        let annotations = |s: &Snapshot| -> HashMap<String, (Option<u64>, Option<u32>)> {
            s.nodes
                .iter()
                .map(|n| (n.id.clone(), (n.score.map(f64::to_bits), n.rank)))
                .collect()
        };
        prop_assert_eq!(annotations(&first), annotations(&second));
    }

    #[test]
    fn node_identity_set_preserved(snap in arb_snapshot(15, 40), criteria in arb_criteria()) {
        let out = score_nodes(&snap, &criteria);

        let mut before: Vec<_> = snap.nodes.iter().map(|n| n.id.clone()).collect();
        let mut after: Vec<_> = out.nodes.iter().map(|n| n.id.clone()).collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
        prop_assert_eq!(&out.edges, &snap.edges);
    }
}
