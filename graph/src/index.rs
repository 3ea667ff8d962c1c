use crate::neighbors::{sort_by_weight_desc, Neighbor};
use fedispace_core::model::{Edge, InstanceGraph};
use std::collections::HashMap;

/// Undirected adjacency index over mention edges. Each instance's neighbor
/// list keeps the order its edges were added in, so ranking from the index
/// matches [`crate::rank_neighbors`] over the same edge list.
#[derive(Debug, Clone, Default)]
pub struct MentionGraph {
    adjacency: HashMap<String, Vec<Neighbor>>,
    edge_count: usize,
}

impl MentionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_edges<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> Self {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(&edge.source, &edge.target, edge.weight);
        }
        tracing::debug!(
            instances = graph.instance_count(),
            edges = graph.edge_count,
            "built mention graph"
        );
        graph
    }

    pub fn add_edge(&mut self, source: &str, target: &str, weight: f64) {
        self.adjacency
            .entry(source.to_string())
            .or_default()
            .push(Neighbor {
                neighbor_id: target.to_string(),
                weight,
            });
        if source != target {
            self.adjacency
                .entry(target.to_string())
                .or_default()
                .push(Neighbor {
                    neighbor_id: source.to_string(),
                    weight,
                });
        }
        self.edge_count += 1;
    }

    /// Neighbors in insertion order.
    pub fn neighbors(&self, id: &str) -> &[Neighbor] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn ranked_neighbors(&self, id: &str) -> Vec<Neighbor> {
        let mut neighbors = self.neighbors(id).to_vec();
        sort_by_weight_desc(&mut neighbors);
        neighbors
    }

    pub fn degree(&self, id: &str) -> usize {
        self.neighbors(id).len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    pub fn instance_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl From<&InstanceGraph> for MentionGraph {
    fn from(graph: &InstanceGraph) -> Self {
        Self::from_edges(&graph.edges)
    }
}
