use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use hubnet_cli::commands::city::handle_city_route_command;
use hubnet_cli::commands::graph::handle_graph_command;
use hubnet_cli::commands::routes::handle_routes_command;
use hubnet_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Shipping hub network utilities")]
struct Cli {
    /// Override the dataset file path (JSON snapshot or SQLite database).
    #[arg(long, global = true, env = "HUBNET_DATASET")]
    dataset: Option<PathBuf>,

    /// Output format for command results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the hub connectivity graph and the hubs grouped by city.
    Graph,
    /// List every simple path between two hubs and the shortest one.
    Routes {
        /// Starting hub name.
        #[arg(long = "from")]
        from: String,
        /// Destination hub name.
        #[arg(long = "to")]
        to: String,
    },
    /// Find a minimum-hop route between two cities.
    CityRoute {
        /// Starting city.
        #[arg(long = "from")]
        from: String,
        /// Destination city.
        #[arg(long = "to")]
        to: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let dataset = cli.dataset.as_deref();

    match cli.command {
        Command::Graph => handle_graph_command(dataset, cli.format),
        Command::Routes { from, to } => handle_routes_command(dataset, cli.format, &from, &to),
        Command::CityRoute { from, to } => {
            handle_city_route_command(dataset, cli.format, &from, &to)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
