//! Decides what the instance sidebar shows for the currently selected
//! instance: a placeholder state or a tabbed panel of details, ranked
//! neighbors and known peers.
//!
//! Descriptions are passed through untouched. Sanitizing instance-supplied
//! HTML is the renderer's job.

use chrono::{DateTime, Utc};
use fedispace_core::config::DisplayConfig;
use fedispace_core::model::{InstanceDetails, InstanceGraph};
use graph::rank_neighbors;
use serde::Serialize;

use crate::time::{from_now, parse_backend_timestamp};

pub const UNKNOWN: &str = "Unknown";

pub const MENTION_RATIO_HELP: &str = "The mention ratio is the average of how many times the two \
     instances mention each other per status. A mention ratio of 1 would mean that every single \
     status contained a mention of a user on the other instance.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
}

pub const NO_INSTANCE_SELECTED: Notice = Notice {
    title: "No instance selected",
    description: "Select an instance from the graph or the top-right dropdown to see its details.",
};

pub const PERSONAL_INSTANCE: Notice = Notice {
    title: "No data",
    description: "This instance has fewer than 5 users and was not crawled.",
};

pub const MISSING_DATA: Notice = Notice {
    title: "No data",
    description: "This instance could not be crawled. Either it was down or it's an instance \
                  type we don't support yet.",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SidebarTab {
    Description,
    Details,
    Neighbors,
    Peers,
}

impl SidebarTab {
    pub fn title(self) -> &'static str {
        match self {
            SidebarTab::Description => "Description",
            SidebarTab::Details => "Details",
            SidebarTab::Neighbors => "Neighbors",
            SidebarTab::Peers => "Known peers",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborRow {
    pub instance: String,
    pub mention_ratio: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstancePanel {
    pub heading: String,
    /// `https://` link to the instance, absent when no name is selected.
    pub link: Option<String>,
    pub tabs: Vec<SidebarTab>,
    pub description: Option<String>,
    pub details: Vec<DetailRow>,
    pub neighbors: Vec<NeighborRow>,
    pub peers: Vec<String>,
    pub peers_caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SidebarView {
    Loading,
    Empty(Notice),
    PersonalInstance(Notice),
    MissingData(Notice),
    Ready(InstancePanel),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SidebarInput<'a> {
    pub instance_name: Option<&'a str>,
    pub details: Option<&'a InstanceDetails>,
    pub is_loading: bool,
    pub graph: Option<&'a InstanceGraph>,
}

pub struct Sidebar {
    weight_precision: usize,
}

impl Sidebar {
    pub fn new(display: &DisplayConfig) -> Self {
        Self {
            weight_precision: display.weight_precision,
        }
    }

    pub fn view(&self, input: &SidebarInput<'_>, now: DateTime<Utc>) -> SidebarView {
        if input.is_loading {
            return SidebarView::Loading;
        }
        let Some(details) = input.details else {
            return SidebarView::Empty(NO_INSTANCE_SELECTED);
        };
        if details.status.to_lowercase().contains("personalinstance") {
            return SidebarView::PersonalInstance(PERSONAL_INSTANCE);
        }
        if details.status != "success" {
            return SidebarView::MissingData(MISSING_DATA);
        }

        SidebarView::Ready(self.panel(input, details, now))
    }

    fn panel(
        &self,
        input: &SidebarInput<'_>,
        details: &InstanceDetails,
        now: DateTime<Utc>,
    ) -> InstancePanel {
        let description = details
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        let mut tabs = Vec::with_capacity(4);
        if description.is_some() {
            tabs.push(SidebarTab::Description);
        }
        let details_rows = if has_stats(details) {
            tabs.push(SidebarTab::Details);
            detail_rows(details, now)
        } else {
            Vec::new()
        };
        tabs.push(SidebarTab::Neighbors);
        tabs.push(SidebarTab::Peers);

        let peers: Vec<String> = details
            .peers
            .iter()
            .flatten()
            .map(|peer| peer.name.clone())
            .collect();

        InstancePanel {
            heading: input
                .instance_name
                .unwrap_or(NO_INSTANCE_SELECTED.title)
                .to_string(),
            link: input.instance_name.map(|name| format!("https://{}", name)),
            tabs,
            description,
            details: details_rows,
            neighbors: self.neighbor_rows(input),
            peers_caption: match (input.instance_name, peers.is_empty()) {
                (Some(name), false) => Some(format!(
                    "All the instances, past and present, that {} knows about.",
                    name
                )),
                _ => None,
            },
            peers,
        }
    }

    fn neighbor_rows(&self, input: &SidebarInput<'_>) -> Vec<NeighborRow> {
        let (Some(graph), Some(name)) = (input.graph, input.instance_name) else {
            return Vec::new();
        };
        rank_neighbors(&graph.edges, name)
            .into_iter()
            .map(|neighbor| NeighborRow {
                instance: neighbor.neighbor_id,
                mention_ratio: format!("{:.*}", self.weight_precision, neighbor.weight),
            })
            .collect()
    }
}

fn has_stats(details: &InstanceDetails) -> bool {
    details.version.as_deref().is_some_and(|v| !v.is_empty())
        || [details.user_count, details.status_count, details.domain_count]
            .iter()
            .any(|count| count.is_some_and(|c| c > 0))
}

fn detail_rows(details: &InstanceDetails, now: DateTime<Utc>) -> Vec<DetailRow> {
    vec![
        DetailRow {
            label: "Version",
            value: details
                .version
                .clone()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| UNKNOWN.to_string()),
        },
        DetailRow {
            label: "Users",
            value: count_or_unknown(details.user_count),
        },
        DetailRow {
            label: "Statuses",
            value: count_or_unknown(details.status_count),
        },
        DetailRow {
            label: "Known peers",
            value: count_or_unknown(details.domain_count),
        },
        DetailRow {
            label: "Last updated",
            value: last_updated(details.last_updated.as_deref(), now),
        },
    ]
}

// Zero counts come from failed crawls, not empty instances.
fn count_or_unknown(count: Option<u64>) -> String {
    match count {
        Some(c) if c > 0 => c.to_string(),
        _ => UNKNOWN.to_string(),
    }
}

fn last_updated(raw: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(raw) = raw else {
        return UNKNOWN.to_string();
    };
    match parse_backend_timestamp(raw) {
        Ok(then) => from_now(then, now),
        Err(err) => {
            tracing::warn!(%err, "ignoring instance last-updated timestamp");
            UNKNOWN.to_string()
        }
    }
}
