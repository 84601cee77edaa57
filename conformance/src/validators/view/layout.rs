//! Layout validator.
//!
//! Recomputes parallel-edge shifts and connectivity independently of the
//! mapper and compares them with the mapped diagram of every fixture.

use std::collections::{BTreeMap, HashMap, HashSet};

use anyhow::Result;
use quad_diagram::layout::{shift_for_index, PARALLEL_EDGE_STEP};
use quad_diagram::Diagram;

use crate::report::{ConformanceReport, TestResult};
use crate::tests::fixtures;
use crate::validators::{id, load, map_fixture};

/// Runs the layout checks on every fixture.
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
            id("view/layout/shifts", fixture),
            "Parallel edges fan out in id order",
            "Edge shifts differ from the id-ranked sequence",
            shift_mismatches(&diagram),
        ));
        report.push(TestResult::expect_none(
            id("view/layout/connectivity", fixture),
            "Connectivity counts distinct neighbours",
            "Connectivity differs from distinct neighbour count",
            connectivity_mismatches(&diagram),
        ));
    }

    if let Some(hub) = fixtures::by_name("hub") {
        let quads = load(hub)?;
        let diagram = map_fixture(hub, &quads);
        let mut shifts: Vec<i32> = diagram
            .edges
            .iter()
            .filter(|e| e.source.ends_with("/hub") && e.target.ends_with("/root"))
            .map(|e| e.shift)
            .collect();
        shifts.sort_unstable();
        let expected = [-PARALLEL_EDGE_STEP, 0, PARALLEL_EDGE_STEP];
        report.push(if shifts == expected {
            TestResult::pass(id("view/layout/fan", hub), "Three parallel edges get -1, 0, +1 steps")
        } else {
            TestResult::fail_with_details(
                id("view/layout/fan", hub),
                "Unexpected shifts between hub and root",
                vec![format!("{shifts:?}")],
            )
        });
    }

    Ok(report)
}

fn shift_mismatches(diagram: &Diagram) -> Vec<String> {
    let mut groups: BTreeMap<(&str, &str), Vec<(&str, i32)>> = BTreeMap::new();
    for edge in &diagram.edges {
        groups
            .entry((edge.source.as_str(), edge.target.as_str()))
            .or_default()
            .push((edge.id.as_str(), edge.shift));
    }
    let mut out = Vec::new();
    for members in groups.values_mut() {
        members.sort_unstable();
        for (rank, &(edge_id, shift)) in members.iter().enumerate() {
            let expected = shift_for_index(rank);
            if shift != expected {
                out.push(format!("{edge_id}: {shift} (expected {expected})"));
            }
        }
    }
    out
}

fn connectivity_mismatches(diagram: &Diagram) -> Vec<String> {
    let mut neighbours: HashMap<&str, HashSet<&str>> = HashMap::new();
    for edge in &diagram.edges {
        neighbours.entry(edge.source.as_str()).or_default().insert(edge.target.as_str());
        neighbours.entry(edge.target.as_str()).or_default().insert(edge.source.as_str());
    }
    diagram
        .nodes
        .iter()
        .filter_map(|n| {
            let expected = neighbours.get(n.iri.as_str()).map_or(0, HashSet::len);
            (n.connectivity != expected)
                .then(|| format!("{}: {} (expected {expected})", n.iri, n.connectivity))
        })
        .collect()
}
