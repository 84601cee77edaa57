//! Inferred-partition validator.
//!
//! Isolation: mapping a fixture with and without its inferred graph yields
//! the same node keys and edge ids. Folding: every inferred quad whose
//! subject is a node shows up in that node's annotations.

use std::collections::HashSet;

use anyhow::Result;
use quad_diagram::partition::{graph_role, GraphRole};
use quad_diagram::{Diagram, Quad};

use crate::report::{ConformanceReport, TestResult};
use crate::tests::fixtures;
use crate::validators::{id, load, map_fixture};

/// Runs the isolation and folding checks on every fixture.
///
/// # Errors
///
/// Returns an error if a fixture does not parse.
pub fn validate() -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    for fixture in &fixtures::ALL {
        let quads = load(fixture)?;
        let (inferred, rest): (Vec<Quad>, Vec<Quad>) = quads
            .iter()
            .cloned()
            .partition(|q| graph_role(q.graph.as_deref()) == GraphRole::Inferred);
        if inferred.is_empty() {
            continue;
        }

        let full = map_fixture(fixture, &quads);
        let data_only = map_fixture(fixture, &rest);

        report.push(TestResult::expect_none(
            id("mapping/inferred/isolation", fixture),
            "Inferred quads add no node keys or edge ids",
            "Inferred quads changed the node or edge sets",
            key_differences(&data_only, &full),
        ));
        report.push(TestResult::expect_none(
            id("mapping/inferred/folding", fixture),
            format!("{} inferred quads checked for folding", inferred.len()),
            "Inferred facts missing from annotations",
            unfolded(&full, &inferred),
        ));
    }

    Ok(report)
}

fn key_differences(base: &Diagram, grown: &Diagram) -> Vec<String> {
    let keys = |d: &Diagram| -> HashSet<String> { d.nodes.iter().map(|n| n.iri.clone()).collect() };
    let ids = |d: &Diagram| -> HashSet<String> { d.edges.iter().map(|e| e.id.clone()).collect() };

    let (base_keys, grown_keys) = (keys(base), keys(grown));
    let (base_ids, grown_ids) = (ids(base), ids(grown));
    let mut out: Vec<String> = grown_keys
        .symmetric_difference(&base_keys)
        .map(|k| format!("node {k}"))
        .chain(grown_ids.symmetric_difference(&base_ids).map(|e| format!("edge {e}")))
        .collect();
    out.sort();
    out
}

fn unfolded(diagram: &Diagram, inferred: &[Quad]) -> Vec<String> {
    inferred
        .iter()
        .filter_map(|q| {
            let node = diagram.node(q.subject.value())?;
            let present = node
                .annotation_properties
                .iter()
                .any(|a| a.property == q.predicate.value() && a.value == q.object.value());
            (!present).then(|| {
                format!(
                    "{} {} {}",
                    q.subject.value(),
                    q.predicate.value(),
                    q.object.value()
                )
            })
        })
        .collect()
}
