//! Graph command handler for printing the hub connectivity graph.

use std::path::Path;

use anyhow::{Context, Result};

use hubnet_lib::{build_hub_network, BuildResult};

use crate::commands::load_dataset;
use crate::output::{render_json, OutputFormat};

/// Handle the graph subcommand.
///
/// Rebuilds the hub graph from the dataset and prints it together with the
/// hubs grouped by city.
pub fn handle_graph_command(target: Option<&Path>, format: OutputFormat) -> Result<()> {
    let snapshot = load_dataset(target)?;
    let network = build_hub_network(&snapshot);
    let result = BuildResult::from_network(&network);

    match format.render_mode() {
        Some(mode) => print!("{}", result.render(mode)),
        None => render_json(&result).context("failed to write JSON output")?,
    }
    Ok(())
}
