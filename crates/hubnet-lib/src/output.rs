use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

use serde::Serialize;

use crate::city::CityRoute;
use crate::network::{GroupedHubsByCity, HubNetwork};
use crate::routing::RoutePlan;

/// Presentation style for the textual renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    PlainText,
    RichText,
}

/// Serialisable view of a built hub graph.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BuildResult {
    pub graph: BTreeMap<String, BTreeSet<String>>,
    pub grouped_hubs_by_city: GroupedHubsByCity,
}

impl BuildResult {
    pub fn from_network(network: &HubNetwork) -> Self {
        Self {
            graph: network.graph.to_sorted_map(),
            grouped_hubs_by_city: network.grouped_hubs_by_city.clone(),
        }
    }

    pub fn render(&self, mode: RenderMode) -> String {
        let mut buffer = String::new();
        match mode {
            RenderMode::PlainText => {
                let _ = writeln!(buffer, "Graph ({} hubs):", self.graph.len());
                for (hub, neighbours) in &self.graph {
                    let _ = writeln!(buffer, "  {hub}: {}", join(neighbours, ", "));
                }
                let _ = writeln!(buffer, "Hubs by city:");
                for (city, hubs) in &self.grouped_hubs_by_city {
                    let _ = writeln!(buffer, "  {city}: {}", join(hubs, ", "));
                }
            }
            RenderMode::RichText => {
                let _ = writeln!(buffer, "**Graph** ({} hubs)", self.graph.len());
                for (hub, neighbours) in &self.graph {
                    let _ = writeln!(buffer, "* **{hub}** → {}", join(neighbours, ", "));
                }
                let _ = writeln!(buffer, "**Hubs by city**");
                for (city, hubs) in &self.grouped_hubs_by_city {
                    let _ = writeln!(buffer, "* _{city}_: {}", join(hubs, ", "));
                }
            }
        }
        buffer
    }
}

/// Serialisable view of a hub-to-hub route search.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AllPathsResult {
    pub all_paths: Vec<Vec<String>>,
    pub shortest_path: Option<Vec<String>>,
}

impl From<&RoutePlan> for AllPathsResult {
    fn from(plan: &RoutePlan) -> Self {
        Self {
            all_paths: plan.all_paths.clone(),
            shortest_path: plan.shortest_path.clone(),
        }
    }
}

impl AllPathsResult {
    pub fn render(&self, mode: RenderMode) -> String {
        let mut buffer = String::new();
        let Some(shortest) = &self.shortest_path else {
            let _ = writeln!(buffer, "No route found");
            return buffer;
        };

        let hops = shortest.len().saturating_sub(1);
        match mode {
            RenderMode::PlainText => {
                let _ = writeln!(
                    buffer,
                    "Shortest: {} ({hops} hops)",
                    join(shortest, " -> ")
                );
                let _ = writeln!(buffer, "All routes ({}):", self.all_paths.len());
                for (index, path) in self.all_paths.iter().enumerate() {
                    let _ = writeln!(buffer, "{:>3}: {}", index + 1, join(path, " -> "));
                }
            }
            RenderMode::RichText => {
                let _ = writeln!(
                    buffer,
                    "**Shortest**: _{}_ ({hops} hops)",
                    join(shortest, " → ")
                );
                for (index, path) in self.all_paths.iter().enumerate() {
                    let _ = writeln!(buffer, "* {:>2}. {}", index + 1, join(path, " → "));
                }
            }
        }
        buffer
    }
}

/// Render the outcome of a city-level search.
pub fn render_city_route(route: Option<&CityRoute>, mode: RenderMode) -> String {
    let mut buffer = String::new();
    let Some(route) = route else {
        let _ = writeln!(buffer, "No route found");
        return buffer;
    };

    match mode {
        RenderMode::PlainText => {
            let _ = writeln!(
                buffer,
                "City route: {} ({} hops)",
                join(&route.path, " -> "),
                route.hop_count()
            );
            for stop in &route.hubs {
                if stop.code.is_empty() {
                    let _ = writeln!(buffer, "  {}", stop.name);
                } else {
                    let _ = writeln!(buffer, "  {} [{}]", stop.name, stop.code);
                }
            }
        }
        RenderMode::RichText => {
            let _ = writeln!(
                buffer,
                "**City route**: _{}_ ({} hops)",
                join(&route.path, " → "),
                route.hop_count()
            );
            for stop in &route.hubs {
                if stop.code.is_empty() {
                    let _ = writeln!(buffer, "* **{}**", stop.name);
                } else {
                    let _ = writeln!(buffer, "* **{}** `{}`", stop.name, stop.code);
                }
            }
        }
    }
    buffer
}

fn join<'a>(items: impl IntoIterator<Item = &'a String>, separator: &str) -> String {
    items
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}
