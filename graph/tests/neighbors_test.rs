use fedispace_core::model::{Edge, InstanceGraph};
use graph::{rank_neighbors, MentionGraph, Neighbor};
use proptest::prelude::*;

fn sample_edges() -> Vec<Edge> {
    vec![
        Edge::new("mastodon.social", "pawoo.net", 0.012),
        Edge::new("mastodon.social", "mstdn.jp", 0.031),
        Edge::new("pleroma.site", "mastodon.social", 0.2),
        Edge::new("mstdn.jp", "pawoo.net", 0.5),
        Edge::new("friends.nico", "mastodon.social", 0.031),
    ]
}

#[test]
fn test_documented_example() {
    let edges = vec![Edge::new("a", "b", 0.5), Edge::new("c", "a", 0.9)];
    assert_eq!(
        rank_neighbors(&edges, "a"),
        vec![
            Neighbor {
                neighbor_id: "c".into(),
                weight: 0.9
            },
            Neighbor {
                neighbor_id: "b".into(),
                weight: 0.5
            },
        ]
    );
    assert!(rank_neighbors(&[], "a").is_empty());
}

#[test]
fn test_index_matches_scan() {
    let edges = sample_edges();
    let graph = MentionGraph::from_edges(&edges);

    for id in ["mastodon.social", "pawoo.net", "mstdn.jp", "pleroma.site", "unknown"] {
        assert_eq!(graph.ranked_neighbors(id), rank_neighbors(&edges, id));
    }

    let ids: Vec<_> = graph
        .ranked_neighbors("mastodon.social")
        .into_iter()
        .map(|n| n.neighbor_id)
        .collect();
    assert_eq!(ids, vec!["pleroma.site", "mstdn.jp", "friends.nico", "pawoo.net"]);
}

#[test]
fn test_ranking_from_backend_graph_json() {
    let json = r#"{
        "nodes": [{"id": "a"}, {"id": "b"}, {"id": "c"}],
        "edges": [
            {"source": "a", "target": "b", "size": 0.1},
            {"source": "b", "target": "c", "size": 0.7}
        ]
    }"#;
    let instance_graph: InstanceGraph = serde_json::from_str(json).unwrap();
    let graph = MentionGraph::from(&instance_graph);

    let ranked = graph.ranked_neighbors("b");
    assert_eq!(ranked[0].neighbor_id, "c");
    assert_eq!(ranked[1].neighbor_id, "a");
}

#[test]
fn test_input_is_not_mutated() {
    let edges = sample_edges();
    let before = edges.clone();
    let _ = rank_neighbors(&edges, "mastodon.social");
    assert_eq!(edges, before);
}

fn arb_edges() -> impl Strategy<Value = Vec<Edge>> {
    let ids = prop::sample::select(vec!["a", "b", "c", "d", "e", "f"]);
    prop::collection::vec((ids.clone(), ids, 0.0f64..1.0), 0..40).prop_map(|raw| {
        raw.into_iter()
            .filter(|(s, t, _)| s != t)
            .map(|(s, t, w)| Edge::new(s, t, w))
            .collect()
    })
}

proptest! {
    #[test]
    fn ranking_is_sorted_and_excludes_focal(edges in arb_edges()) {
        let ranked = rank_neighbors(&edges, "a");

        let incident = edges.iter().filter(|e| e.touches("a")).count();
        prop_assert_eq!(ranked.len(), incident);
        prop_assert!(ranked.windows(2).all(|w| w[0].weight >= w[1].weight));
        prop_assert!(ranked.iter().all(|n| n.neighbor_id != "a"));
    }

    #[test]
    fn ranking_is_idempotent(edges in arb_edges()) {
        prop_assert_eq!(rank_neighbors(&edges, "b"), rank_neighbors(&edges, "b"));
        let graph = MentionGraph::from_edges(&edges);
        prop_assert_eq!(graph.ranked_neighbors("b"), rank_neighbors(&edges, "b"));
    }
}
