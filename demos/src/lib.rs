//! qgrn Demo Suite
//!
//! Small, well-known regulatory motifs run through the full pipeline:
//!
//! - **Toggle switch**: two mutually repressing genes
//! - **Repressilator**: a three-gene repression ring (Elowitz & Leibler)
//! - **Feed-forward loop**: coherent type-1 FFL
//! - **Weight sweep**: target expression as one edge weight grows
//!
//! Every binary takes `-v` flags for log verbosity; `RUST_LOG` overrides them.

pub mod networks;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use qgrn::ExpressionProfile;
use tracing_subscriber::EnvFilter;

/// Install a `tracing` subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Create a progress bar for demo operations.
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(template) = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
    ) {
        pb.set_style(template.progress_chars("#>-"));
    }
    pb.set_message(message.to_string());
    pb
}

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").blue(), message);
}

/// Horizontal bar for a probability in `[0, 1]`.
pub fn bar(p: f64, width: usize) -> String {
    // Rounded cell count, bounded by `width`.
    let filled = ((p.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "·".repeat(width - filled))
}

/// Print per-gene marginals and the joint summary.
pub fn print_profile(profile: &ExpressionProfile) {
    for (gene, p) in profile.iter() {
        println!(
            "  {:>10} {} {p:.4}",
            style(gene).bold(),
            style(bar(p, 30)).cyan(),
        );
    }
    println!();
    print_result("Most probable state", profile.most_probable_state());
    print_result("Entropy", format!("{:.4} bits", profile.entropy()));
    print_result("Distinct states", profile.distinct_states());
}
