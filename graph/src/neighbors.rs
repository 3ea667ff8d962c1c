use fedispace_core::model::Edge;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// An instance adjacent to the focal instance, with the mention ratio of the
/// edge joining them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Neighbor {
    pub neighbor_id: String,
    pub weight: f64,
}

/// Neighbors of `focal_id` ordered by descending weight. Equal weights keep
/// the order their edges had in `edges`.
pub fn rank_neighbors(edges: &[Edge], focal_id: &str) -> Vec<Neighbor> {
    let mut neighbors: Vec<Neighbor> = edges
        .iter()
        .filter_map(|edge| {
            edge.other_end(focal_id).map(|other| Neighbor {
                neighbor_id: other.to_string(),
                weight: edge.weight,
            })
        })
        .collect();

    sort_by_weight_desc(&mut neighbors);
    neighbors
}

pub(crate) fn sort_by_weight_desc(neighbors: &mut [Neighbor]) {
    // stable
    neighbors.sort_by(|a, b| by_weight_desc(a.weight, b.weight));
}

/// `-0.0` and `0.0` tie; NaN weights sort after every number.
fn by_weight_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}
