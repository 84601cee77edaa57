//! Collapse validator.
//!
//! For every node with outgoing edges, collapses it at threshold 1 and
//! checks that:
//! - Hidden nodes are targets of the collapsed node's non-kept relations
//! - Applying the changes reaches a fixed point
//! - Expanding again restores the original visibility
//!
//! The `hub` fixture additionally has an exact expected hidden set.

use std::collections::{BTreeSet, HashSet};

use anyhow::Result;
use quad_diagram::{hidden_by_collapse, visibility_changes, Diagram};

use crate::report::{ConformanceReport, TestResult};
use crate::tests::fixtures;
use crate::validators::{id, load, map_fixture};

const THRESHOLD: usize = 1;

/// Runs the collapse checks on every fixture.
///
/// # Errors
///
/// Returns an error if a fixture does not parse.
pub fn validate() -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    for fixture in &fixtures::ALL {
        let quads = load(fixture)?;
        let diagram = map_fixture(fixture, &quads);
        report.push(TestResult::expect_none(
            id("view/collapse/round-trip", fixture),
            "Collapse hides only fan-out targets and expands back cleanly",
            "Collapse visibility violated",
            round_trip_failures(&diagram),
        ));
    }

    if let Some(hub) = fixtures::by_name("hub") {
        let quads = load(hub)?;
        let diagram = map_fixture(hub, &quads);
        let ns = "http://example.org/hub/";
        let hidden: BTreeSet<String> = hidden_by_collapse(&format!("{ns}hub"), &diagram.edges, THRESHOLD)
            .into_iter()
            .map(str::to_string)
            .collect();
        let expected: BTreeSet<String> = ["m1", "m2", "m3"]
            .iter()
            .map(|l| format!("{ns}{l}"))
            .collect();
        report.push(if hidden == expected {
            TestResult::pass(
                id("view/collapse/leaf-rule", hub),
                "Leaves are hidden, the bridge and the kept target stay visible",
            )
        } else {
            TestResult::fail_with_details(
                id("view/collapse/leaf-rule", hub),
                "Unexpected hidden set for hub",
                hidden.into_iter().collect(),
            )
        });
    }

    Ok(report)
}

fn round_trip_failures(diagram: &Diagram) -> Vec<String> {
    let sources: BTreeSet<&str> = diagram.edges.iter().map(|e| e.source.as_str()).collect();
    let mut failures = Vec::new();

    for collapsed in sources {
        let targets: HashSet<&str> = diagram
            .edges_from(collapsed)
            .map(|e| e.target.as_str())
            .collect();
        for hidden in hidden_by_collapse(collapsed, &diagram.edges, THRESHOLD) {
            if hidden == collapsed || !targets.contains(hidden) {
                failures.push(format!("{collapsed}: hid non-target {hidden}"));
            }
        }

        let mut nodes = diagram.nodes.clone();
        let mut edges = diagram.edges.clone();
        let changes = visibility_changes(&nodes, &edges, &[collapsed], THRESHOLD);
        changes.apply(&mut nodes, &mut edges);
        if !visibility_changes(&nodes, &edges, &[collapsed], THRESHOLD).is_empty() {
            failures.push(format!("{collapsed}: applying changes is not a fixed point"));
        }

        let expand = visibility_changes::<&str>(&nodes, &edges, &[], THRESHOLD);
        expand.apply(&mut nodes, &mut edges);
        if nodes != diagram.nodes || edges != diagram.edges {
            failures.push(format!("{collapsed}: expanding did not restore visibility"));
        }
    }
    failures
}
