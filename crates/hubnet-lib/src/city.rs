//! City-level reachability (legacy compatibility mode).
//!
//! Nodes are city labels. Two cities are adjacent when some route moves
//! between hubs located in them. There is no central-hub step here: hubs in
//! the same city are not cross-linked.

use serde::Serialize;
use tracing::debug;

use crate::graph::{AdjacencyBuilder, Graph, GraphMode};
use crate::path::find_route;
use crate::snapshot::Snapshot;

/// Code reported for a city on the path that has no hub record.
const MISSING_HUB_CODE: &str = "N/A";

/// One step of a city path: the city label and the code of a hub located
/// there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HubStop {
    pub name: String,
    pub code: String,
}

/// Minimum-hop city path together with one representative hub code per step.
///
/// `hubs` runs parallel to `path` and every entry is named after its city.
/// The source entry carries an empty code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityRoute {
    pub path: Vec<String>,
    pub hubs: Vec<HubStop>,
}

impl CityRoute {
    /// Number of city-to-city hops.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Build the city graph from the routes in `snapshot`.
///
/// Only cities touched by at least one resolvable route pair become nodes.
pub fn build_city_graph(snapshot: &Snapshot) -> Graph<String> {
    let mut builder = AdjacencyBuilder::new(GraphMode::City);
    let index = snapshot.hub_index();
    let mut skipped_pairs = 0usize;

    for route in &snapshot.routes {
        for pair in route.hubs.windows(2) {
            let (Some(current), Some(next)) =
                (index.get(pair[0].as_str()), index.get(pair[1].as_str()))
            else {
                skipped_pairs += 1;
                continue;
            };
            builder.add_edge(current.city.clone(), next.city.clone());
        }
    }

    let graph = builder.build();
    debug!(
        mode = ?graph.mode(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        skipped_pairs,
        "built city graph"
    );
    graph
}

/// Find a minimum-hop path between two cities.
///
/// Returns `None` when either city is absent from `graph` or the cities are
/// not connected. Each entered city takes the code of the first hub in
/// `snapshot` located there, regardless of which route produced the hop.
pub fn find_city_route(
    snapshot: &Snapshot,
    graph: &Graph<String>,
    source: &str,
    destination: &str,
) -> Option<CityRoute> {
    let path = find_route(graph, source, destination)?;

    let mut hubs = Vec::with_capacity(path.len());
    hubs.push(HubStop {
        name: source.to_string(),
        code: String::new(),
    });
    hubs.extend(path.iter().skip(1).map(|city| HubStop {
        name: city.clone(),
        code: snapshot
            .first_hub_in_city(city)
            .map_or_else(|| MISSING_HUB_CODE.to_string(), |hub| hub.code.clone()),
    }));

    Some(CityRoute { path, hubs })
}
