use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::city::{build_city_graph, find_city_route, CityRoute};
use crate::error::Result;
use crate::graph::Graph;
use crate::network::{build_hub_network, HubNetwork};
use crate::path::{find_all_paths, shortest_path};
use crate::snapshot::NetworkFeed;

/// Why a route search produced the result it did.
///
/// Callers see an empty path list either way; the distinction is kept for
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteOutcome {
    /// At least one path was found.
    Found,
    /// The source or destination is not a node of the graph.
    UnknownEndpoint,
    /// Both endpoints exist but no path joins them.
    Disconnected,
}

impl fmt::Display for RouteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteOutcome::Found => "found",
            RouteOutcome::UnknownEndpoint => "unknown_endpoint",
            RouteOutcome::Disconnected => "disconnected",
        };
        f.write_str(value)
    }
}

/// Hub-to-hub route query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub source: String,
    pub destination: String,
}

impl RouteRequest {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// Every simple path between two hubs plus the shortest of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePlan {
    pub outcome: RouteOutcome,
    pub all_paths: Vec<Vec<String>>,
    pub shortest_path: Option<Vec<String>>,
}

impl RoutePlan {
    /// Hops on the shortest path, if any.
    pub fn hop_count(&self) -> Option<usize> {
        self.shortest_path
            .as_ref()
            .map(|path| path.len().saturating_sub(1))
    }
}

/// Enumerate all routes between two hubs of an already built graph.
pub fn plan_routes(graph: &Graph<String>, request: &RouteRequest) -> RoutePlan {
    let all_paths = find_all_paths(graph, request.source.as_str(), request.destination.as_str());
    let shortest = shortest_path(&all_paths).cloned();

    let outcome = if shortest.is_some() {
        RouteOutcome::Found
    } else if !graph.contains(request.source.as_str())
        || !graph.contains(request.destination.as_str())
    {
        RouteOutcome::UnknownEndpoint
    } else {
        RouteOutcome::Disconnected
    };

    debug!(
        source = %request.source,
        destination = %request.destination,
        paths = all_paths.len(),
        %outcome,
        "planned hub routes"
    );

    RoutePlan {
        outcome,
        all_paths,
        shortest_path: shortest,
    }
}

/// Fetch a fresh snapshot from `feed` and build the hub network from it.
///
/// Feed failures are returned as errors; they never turn into an empty graph.
pub fn rebuild_network<F>(feed: &F) -> Result<HubNetwork>
where
    F: NetworkFeed + ?Sized,
{
    let snapshot = feed.snapshot()?;
    Ok(build_hub_network(&snapshot))
}

/// Fetch a fresh snapshot, build the hub network and plan routes on it.
pub fn find_routes<F>(feed: &F, request: &RouteRequest) -> Result<(HubNetwork, RoutePlan)>
where
    F: NetworkFeed + ?Sized,
{
    let network = rebuild_network(feed)?;
    let plan = plan_routes(&network.graph, request);
    Ok((network, plan))
}

/// Fetch a fresh snapshot and run the legacy city-level search on it.
pub fn find_city_route_in_feed<F>(
    feed: &F,
    source: &str,
    destination: &str,
) -> Result<Option<CityRoute>>
where
    F: NetworkFeed + ?Sized,
{
    let snapshot = feed.snapshot()?;
    let graph = build_city_graph(&snapshot);
    Ok(find_city_route(&snapshot, &graph, source, destination))
}
