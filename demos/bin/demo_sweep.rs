//! Edge Weight Sweep Demo
//!
//! Shows the monotone weight → expression mapping: the target's marginal as
//! one activating (or repressing) edge is strengthened from 0 to 1.

use anyhow::Result;
use clap::Parser;

use qgrn::{Pipeline, RegulatoryGraph, Sign, SimulationConfig};
use qgrn_demos::{bar, create_progress_bar, init_logging, print_header, print_section, print_success};

#[derive(Parser, Debug)]
#[command(name = "demo-sweep")]
#[command(about = "Sweep one edge weight and watch the target respond")]
struct Args {
    /// Number of sweep points
    #[arg(short, long, default_value = "11")]
    points: u32,

    /// Source gene's initial "on" probability
    #[arg(long, default_value = "0.8")]
    source: f64,

    /// Target gene's initial "on" probability
    #[arg(long, default_value = "0.5")]
    target: f64,

    /// Sweep a repressing edge instead
    #[arg(long)]
    repress: bool,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let sign = if args.repress {
        Sign::Repressing
    } else {
        Sign::Activating
    };
    print_header(&format!("Weight Sweep ({sign})"));

    let pipeline = Pipeline::simulator(SimulationConfig::default())?;
    let points = args.points.max(2);
    let pb = create_progress_bar(u64::from(points), "simulating");

    let mut rows = Vec::with_capacity(points as usize);
    for i in 0..points {
        let weight = f64::from(i) / f64::from(points - 1);
        let graph = RegulatoryGraph::builder()
            .gene("src", args.source)
            .gene("dst", args.target)
            .edge("src", "dst", sign, weight)
            .build()?;
        let profile = pipeline.exact(&graph)?;
        rows.push((weight, profile.probability("dst").unwrap_or_default()));
        pb.inc(1);
    }
    pb.finish_and_clear();

    print_section("Target expression");
    for (weight, p) in rows {
        println!("  w={weight:.2}  {}  {p:.4}", bar(p, 40));
    }

    println!();
    print_success("Sweep complete");
    Ok(())
}
