use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use metroroute_lib::{plan_path, PathRequest, PathType, StationId};

mod network;

use network::Network;

#[derive(Parser, Debug)]
#[command(author, version, about = "Transit network topology and path planning utilities")]
struct Cli {
    /// Path to the network description file (JSON).
    #[arg(long)]
    network: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the ordered stations of one line.
    Stations {
        /// Line name as given in the network file.
        #[arg(long)]
        line: String,
    },
    /// Compute the best path between two stations.
    Path {
        /// Departure station name.
        #[arg(long = "from")]
        from: String,
        /// Arrival station name.
        #[arg(long = "to")]
        to: String,
        /// Optimization criterion.
        #[arg(long = "by", value_enum, default_value = "distance")]
        by: Criterion,
    },
}

/// Optimization criterion accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Criterion {
    Distance,
    Duration,
}

impl From<Criterion> for PathType {
    fn from(criterion: Criterion) -> Self {
        match criterion {
            Criterion::Distance => PathType::Distance,
            Criterion::Duration => PathType::Duration,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let network = load_network(&cli.network)?;

    match cli.command {
        Command::Stations { line } => handle_stations(&network, &line),
        Command::Path { from, to, by } => handle_path(&network, &from, &to, by.into()),
    }
}

fn load_network(path: &Path) -> Result<Network> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read network file {}", path.display()))?;
    Network::from_json(&raw)
        .with_context(|| format!("failed to load network from {}", path.display()))
}

fn handle_stations(network: &Network, line: &str) -> Result<()> {
    let Some(topology) = network.line(line) else {
        bail!("unknown line: {line}");
    };

    println!("{line}:");
    for station_id in topology.linearize() {
        println!("- {}", display_station(network, station_id));
    }
    Ok(())
}

fn handle_path(network: &Network, from: &str, to: &str, path_type: PathType) -> Result<()> {
    let source = network
        .station_id(from)
        .with_context(|| format!("unknown station: {from}"))?;
    let target = network
        .station_id(to)
        .with_context(|| format!("unknown station: {to}"))?;

    let request = PathRequest::new(source, target, path_type);
    let plan = plan_path(network.topologies(), &request)?;

    println!("Best {} path from {} to {}:", plan.path_type, from, to);
    for station_id in &plan.stations {
        println!("- {}", display_station(network, *station_id));
    }
    println!("total distance: {}", plan.distance);
    println!("total duration: {}", plan.duration);
    Ok(())
}

fn display_station(network: &Network, station_id: StationId) -> String {
    let name = network.station_name(station_id).unwrap_or("<unknown>");
    format!("{name} ({station_id})")
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
