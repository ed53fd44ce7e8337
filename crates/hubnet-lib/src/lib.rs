//! hubnet library entry points.
//!
//! This crate loads shipping-hub datasets (JSON snapshots or SQLite), builds
//! undirected connectivity graphs at hub and city granularity, and answers
//! reachability queries over them. Higher-level consumers (the CLI) should
//! only depend on the functions exported here instead of reimplementing
//! behavior.
//!

#![deny(warnings)]

pub mod city;
pub mod dataset;
pub mod db;
pub mod error;
pub mod graph;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;
pub mod snapshot;

#[cfg(test)]
mod test_helpers;

pub use city::{build_city_graph, find_city_route, CityRoute, HubStop};
pub use dataset::{
    default_dataset_path, load_snapshot, open_feed, resolve_dataset_path, DatasetFormat, JsonFeed,
    DATASET_ENV_VAR,
};
pub use db::{create_schema, load_snapshot_sqlite, SqliteFeed};
pub use error::{Error, Result};
pub use graph::{AdjacencyBuilder, Graph, GraphMode};
pub use network::{build_hub_network, group_hubs_by_city, BuildReport, GroupedHubsByCity, HubNetwork};
pub use output::{render_city_route, AllPathsResult, BuildResult, RenderMode};
pub use path::{find_all_paths, find_route, shortest_path};
pub use routing::{
    find_city_route_in_feed, find_routes, plan_routes, rebuild_network, RouteOutcome, RoutePlan,
    RouteRequest,
};
pub use snapshot::{Hub, HubId, NetworkFeed, Route, Snapshot};
