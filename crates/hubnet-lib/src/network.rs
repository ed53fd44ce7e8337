//! Hub-level connectivity graph.
//!
//! Every hub becomes a node keyed by its display name. Consecutive hubs on a
//! route are linked, and every hub is additionally linked to its city's
//! central hub when the city has one.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use crate::graph::{AdjacencyBuilder, Graph, GraphMode};
use crate::snapshot::{Hub, Snapshot};

/// Hub names grouped under their city label.
pub type GroupedHubsByCity = BTreeMap<String, Vec<String>>;

/// Counters collected while assembling a [`HubNetwork`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Route edges added between consecutive hubs.
    pub route_edges: usize,
    /// Consecutive pairs dropped because a hub reference did not resolve.
    pub skipped_pairs: usize,
    /// Edges derived from central-hub membership.
    pub central_edges: usize,
}

/// Output of [`build_hub_network`].
#[derive(Debug, Clone)]
pub struct HubNetwork {
    pub graph: Graph<String>,
    pub grouped_hubs_by_city: GroupedHubsByCity,
    pub report: BuildReport,
}

/// Build the hub graph from a snapshot.
///
/// Unresolvable hub references only drop the pair they appear in; the rest of
/// the route is still linked. Building twice from the same snapshot yields the
/// same adjacency sets.
pub fn build_hub_network(snapshot: &Snapshot) -> HubNetwork {
    let mut builder = AdjacencyBuilder::new(GraphMode::Hub);
    let mut report = BuildReport::default();

    for hub in &snapshot.hubs {
        builder.add_node(hub.name.clone());
    }

    let index = snapshot.hub_index();
    for route in &snapshot.routes {
        for pair in route.hubs.windows(2) {
            let (Some(current), Some(next)) =
                (index.get(pair[0].as_str()), index.get(pair[1].as_str()))
            else {
                report.skipped_pairs += 1;
                debug!(
                    route = %route.name,
                    from = %pair[0],
                    to = %pair[1],
                    "skipping route pair with unresolved hub reference"
                );
                continue;
            };

            if builder.add_edge(current.name.clone(), next.name.clone()) {
                report.route_edges += 1;
            }
        }
    }

    for (city, central_hub) in central_hubs(snapshot) {
        for hub in snapshot.hubs.iter().filter(|hub| hub.city == city) {
            if hub.name == central_hub.name {
                continue;
            }
            if builder.add_edge(central_hub.name.clone(), hub.name.clone()) {
                report.central_edges += 1;
            }
        }
    }

    if report.skipped_pairs > 0 {
        warn!(
            skipped_pairs = report.skipped_pairs,
            "ignored route pairs referencing unknown hubs"
        );
    }

    let graph = builder.build();
    debug!(
        mode = ?graph.mode(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        route_edges = report.route_edges,
        central_edges = report.central_edges,
        "built hub graph"
    );

    HubNetwork {
        graph,
        grouped_hubs_by_city: group_hubs_by_city(snapshot),
        report,
    }
}

/// Group hub names by city, keeping feed order within each city.
pub fn group_hubs_by_city(snapshot: &Snapshot) -> GroupedHubsByCity {
    let mut grouped = GroupedHubsByCity::new();
    for hub in &snapshot.hubs {
        grouped
            .entry(hub.city.clone())
            .or_default()
            .push(hub.name.clone());
    }
    grouped
}

/// Central hub per city. The first flagged hub in feed order wins.
fn central_hubs(snapshot: &Snapshot) -> BTreeMap<&str, &Hub> {
    let mut centrals: BTreeMap<&str, &Hub> = BTreeMap::new();
    let mut extra: HashMap<&str, usize> = HashMap::new();

    for hub in snapshot.hubs.iter().filter(|hub| hub.is_central) {
        if centrals.contains_key(hub.city.as_str()) {
            *extra.entry(hub.city.as_str()).or_default() += 1;
            continue;
        }
        centrals.insert(hub.city.as_str(), hub);
    }

    for (city, count) in extra {
        warn!(
            city,
            ignored = count,
            kept = %centrals[city].name,
            "city has more than one central hub"
        );
    }

    centrals
}
