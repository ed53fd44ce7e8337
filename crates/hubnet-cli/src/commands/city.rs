//! City-route command handler for the legacy city-level search.

use std::path::Path;

use anyhow::{Context, Result};

use hubnet_lib::{build_city_graph, find_city_route, render_city_route};

use crate::commands::load_dataset;
use crate::output::{render_json, warn_unknown, warn_unrouted_city, OutputFormat};

/// Handle the city-route subcommand.
///
/// Finds a minimum-hop path between two cities and names one hub per city
/// along the way. Prints `null` in JSON mode when no path exists.
pub fn handle_city_route_command(
    target: Option<&Path>,
    format: OutputFormat,
    from: &str,
    to: &str,
) -> Result<()> {
    let snapshot = load_dataset(target)?;
    let graph = build_city_graph(&snapshot);

    let known = snapshot.cities();
    for city in [from, to] {
        if graph.contains(city) {
            continue;
        }
        if known.contains(&city) {
            warn_unrouted_city(city);
        } else {
            warn_unknown("city", city, &snapshot.fuzzy_city_matches(city, 3));
        }
    }

    let route = find_city_route(&snapshot, &graph, from, to);
    match format.render_mode() {
        Some(mode) => print!("{}", render_city_route(route.as_ref(), mode)),
        None => render_json(&route).context("failed to write JSON output")?,
    }
    Ok(())
}
