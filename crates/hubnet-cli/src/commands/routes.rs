//! Routes command handler for enumerating paths between two hubs.

use std::path::Path;

use anyhow::{Context, Result};

use hubnet_lib::{build_hub_network, plan_routes, AllPathsResult, RouteOutcome, RouteRequest};

use crate::commands::load_dataset;
use crate::output::{render_json, warn_unknown, OutputFormat};

/// Handle the routes subcommand.
///
/// Lists every simple path between the two hubs and the shortest of them.
/// Unknown hub names produce a warning and an empty result.
pub fn handle_routes_command(
    target: Option<&Path>,
    format: OutputFormat,
    from: &str,
    to: &str,
) -> Result<()> {
    let snapshot = load_dataset(target)?;
    let network = build_hub_network(&snapshot);
    let plan = plan_routes(&network.graph, &RouteRequest::new(from, to));

    if plan.outcome == RouteOutcome::UnknownEndpoint {
        for name in [from, to] {
            if !network.graph.contains(name) {
                warn_unknown("hub", name, &snapshot.fuzzy_hub_matches(name, 3));
            }
        }
    }

    let result = AllPathsResult::from(&plan);
    match format.render_mode() {
        Some(mode) => print!("{}", result.render(mode)),
        None => render_json(&result).context("failed to write JSON output")?,
    }
    Ok(())
}
