//! Determinism validator.
//!
//! Maps every fixture twice and requires identical diagrams, both as values
//! and as serialized JSON.

use anyhow::{Context, Result};

use crate::report::{ConformanceReport, TestResult};
use crate::tests::fixtures;
use crate::validators::{id, load, map_fixture};

const CHECK: &str = "mapping/determinism";

/// Runs the determinism check on every fixture.
///
/// # Errors
///
/// Returns an error if a fixture does not parse or a diagram fails to serialize.
pub fn validate() -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    for fixture in &fixtures::ALL {
        let quads = load(fixture)?;
        let first = map_fixture(fixture, &quads);
        let second = map_fixture(fixture, &quads);

        let first_json = serde_json::to_string(&first).context("Failed to serialize diagram")?;
        let second_json = serde_json::to_string(&second).context("Failed to serialize diagram")?;

        if first == second && first_json == second_json {
            report.push(TestResult::pass(
                id(CHECK, fixture),
                format!(
                    "Repeated mapping is identical ({} nodes, {} edges)",
                    first.nodes.len(),
                    first.edges.len()
                ),
            ));
        } else {
            report.push(TestResult::fail(
                id(CHECK, fixture),
                "Repeated mapping of the same quads produced different diagrams",
            ));
        }
    }

    Ok(report)
}
