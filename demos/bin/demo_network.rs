//! Network File Demo
//!
//! Simulates a network read from a JSON or YAML description, or one of the
//! built-in motifs, and prints the profile as text or JSON.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;

use qgrn::{NetworkDescription, Pipeline, SimulationConfig};
use qgrn_demos::networks::by_name;
use qgrn_demos::{init_logging, print_header, print_profile, print_result, print_section};

#[derive(Parser, Debug)]
#[command(name = "demo-network")]
#[command(about = "Simulate a network from a description file")]
struct Args {
    /// Network description (.json, .yaml or .yml)
    #[arg(short, long, conflicts_with = "motif")]
    network: Option<PathBuf>,

    /// Built-in motif: toggle, repressilator, ffl
    #[arg(short, long, default_value = "ffl")]
    motif: String,

    /// Simulation configuration (.json, .yaml or .yml)
    #[arg(short, long, env = "QGRN_CONFIG")]
    config: Option<PathBuf>,

    /// Skip sampling and print the exact profile
    #[arg(long)]
    exact: bool,

    /// Print the profile as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn is_yaml(path: &std::path::Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    )
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let graph = match &args.network {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let description = if is_yaml(path) {
                NetworkDescription::from_yaml(&text)?
            } else {
                NetworkDescription::from_json(&text)?
            };
            description.build()?
        }
        None => match by_name(&args.motif) {
            Some(graph) => graph?,
            None => bail!("unknown motif '{}'", args.motif),
        },
    };

    let config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            if is_yaml(path) {
                SimulationConfig::from_yaml(&text)?
            } else {
                SimulationConfig::from_json(&text)?
            }
        }
        None => SimulationConfig::default(),
    };

    info!(
        genes = graph.num_genes(),
        edges = graph.num_edges(),
        cyclic = graph.has_cycle(),
        shots = config.run.shots,
        "Loaded network"
    );

    let pipeline = Pipeline::simulator(config)?;
    let profile = if args.exact {
        pipeline.exact(&graph)?
    } else {
        pipeline.simulate(&graph)?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    print_header("Network Simulation");
    print_result("Genes", graph.ordering());
    print_result("Edges", graph.num_edges());
    print_section(if args.exact { "Exact profile" } else { "Sampled profile" });
    print_profile(&profile);
    Ok(())
}
