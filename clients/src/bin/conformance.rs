//! `quad-diagram-conformance`: Runs the quad-diagram conformance suite.
//!
//! Maps every built-in fixture and checks determinism, structural
//! invariants, inferred-graph isolation, classification, SHACL findings,
//! parallel-edge layout and collapse visibility.
//!
//! **Usage:**
//! ```
//! quad-diagram-conformance [--json]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use quad_diagram_conformance::run_all;
use tracing_subscriber::EnvFilter;

/// Run the quad-diagram conformance suite.
#[derive(Parser)]
#[command(
    name = "quad-diagram-conformance",
    about = "Validate diagram mapping against its conformance fixtures"
)]
struct Args {
    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let report = run_all()?;
    let summary = report.summary();

    if args.json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{out}");
    } else {
        println!("quad-diagram Conformance Report");
        println!("===============================");
        println!();

        for result in &report.results {
            println!("[{}] {}: {}", result.severity.tag(), result.validator, result.message);
            for detail in &result.details {
                println!("       {}", detail);
            }
        }

        println!();
        println!(
            "Summary: {} passed, {} warnings, {} failed",
            summary.passed, summary.warnings, summary.failed
        );
    }

    if summary.failed > 0 {
        eprintln!(
            "Conformance FAILED: {} check(s) did not pass.",
            summary.failed
        );
        process::exit(1);
    }

    if !args.json {
        println!("Conformance PASSED.");
    }
    Ok(())
}
