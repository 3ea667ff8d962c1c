use serde::{Deserialize, Serialize};

/// A mention relationship between two instances. Stored with a direction but
/// read as undirected. The backend names the weight `size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    #[serde(alias = "size")]
    pub weight: f64,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    pub fn touches(&self, id: &str) -> bool {
        self.source == id || self.target == id
    }

    /// The endpoint opposite `id`, or `None` when the edge is not incident.
    pub fn other_end(&self, id: &str) -> Option<&str> {
        if self.source == id {
            Some(&self.target)
        } else if self.target == id {
            Some(&self.source)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InstanceGraph {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peer {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub user_count: Option<u64>,
    #[serde(default)]
    pub status_count: Option<u64>,
    #[serde(default)]
    pub domain_count: Option<u64>,
    #[serde(default)]
    pub peers: Option<Vec<Peer>>,
    /// Naive UTC timestamp as sent by the backend (no zone suffix).
    #[serde(default)]
    pub last_updated: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultInstance {
    pub name: String,
    #[serde(default)]
    pub user_count: Option<u64>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_accepts_backend_size_field() {
        let edge: Edge =
            serde_json::from_str(r#"{"source": "a.social", "target": "b.social", "size": 0.25}"#)
                .unwrap();
        assert_eq!(edge, Edge::new("a.social", "b.social", 0.25));
    }

    #[test]
    fn test_edge_other_end() {
        let edge = Edge::new("a", "b", 1.0);
        assert_eq!(edge.other_end("a"), Some("b"));
        assert_eq!(edge.other_end("b"), Some("a"));
        assert_eq!(edge.other_end("c"), None);
        assert!(edge.touches("b"));
        assert!(!edge.touches("c"));
    }

    #[test]
    fn test_instance_details_camel_case() {
        let json = r#"{
            "name": "mastodon.social",
            "userCount": 120,
            "statusCount": 4000,
            "domainCount": 12,
            "peers": [{"name": "a.social"}],
            "lastUpdated": "2019-07-01T12:00:00",
            "status": "success"
        }"#;
        let details: InstanceDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.user_count, Some(120));
        assert_eq!(details.domain_count, Some(12));
        assert_eq!(details.peers.unwrap()[0].name, "a.social");
        assert!(details.description.is_none());
    }
}
