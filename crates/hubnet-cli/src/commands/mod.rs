//! Handlers for the CLI subcommands.
//!
//! Every handler loads a fresh snapshot from the dataset, builds the graph it
//! needs and prints the result. Nothing is cached between invocations.

pub mod city;
pub mod graph;
pub mod routes;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use hubnet_lib::{open_feed, resolve_dataset_path, Snapshot};

/// Resolve the dataset location and fetch a validated snapshot from it.
pub fn load_dataset(target: Option<&Path>) -> Result<Snapshot> {
    let path = resolve_dataset_path(target).context("failed to locate the hub dataset")?;
    let snapshot = open_feed(&path)
        .snapshot()
        .with_context(|| format!("failed to load dataset from {}", path.display()))?;
    debug!(
        hubs = snapshot.hubs.len(),
        routes = snapshot.routes.len(),
        "dataset loaded"
    );
    Ok(snapshot)
}
