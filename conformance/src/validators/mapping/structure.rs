//! Structural validator.
//!
//! Checks invariants every mapped diagram must satisfy:
//! - Node keys and edge ids are unique
//! - Every edge endpoint is a node
//! - No node carries the same (property, value) annotation twice
//! - Every blank node in the diagram is an edge endpoint

use std::collections::HashSet;

use anyhow::Result;
use quad_diagram::Diagram;

use crate::report::{ConformanceReport, TestResult};
use crate::tests::fixtures;
use crate::validators::{id, load, map_fixture};

/// Runs the structural checks on every fixture.
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
            id("mapping/structure/unique-keys", fixture),
            "Node keys and edge ids are unique",
            "Duplicate node keys or edge ids",
            duplicate_keys(&diagram),
        ));
        report.push(TestResult::expect_none(
            id("mapping/structure/closed-edges", fixture),
            "Every edge endpoint is a node",
            "Edges reference missing nodes",
            dangling_edges(&diagram),
        ));
        report.push(TestResult::expect_none(
            id("mapping/structure/dedup", fixture),
            "Annotation lists are de-duplicated",
            "Repeated (property, value) annotations",
            repeated_annotations(&diagram),
        ));
        report.push(TestResult::expect_none(
            id("mapping/structure/blank-nodes", fixture),
            "Every blank node in the diagram is connected",
            "Blank nodes present without an edge",
            orphan_blank_nodes(&diagram),
        ));
    }

    Ok(report)
}

fn duplicate_keys(diagram: &Diagram) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut dups: Vec<String> = diagram
        .nodes
        .iter()
        .filter(|n| !seen.insert(n.iri.as_str()))
        .map(|n| format!("node {}", n.iri))
        .collect();
    let mut seen = HashSet::new();
    dups.extend(
        diagram
            .edges
            .iter()
            .filter(|e| !seen.insert(e.id.as_str()))
            .map(|e| format!("edge {}", e.id)),
    );
    dups
}

fn dangling_edges(diagram: &Diagram) -> Vec<String> {
    let keys: HashSet<&str> = diagram.nodes.iter().map(|n| n.iri.as_str()).collect();
    diagram
        .edges
        .iter()
        .filter(|e| !keys.contains(e.source.as_str()) || !keys.contains(e.target.as_str()))
        .map(|e| e.id.clone())
        .collect()
}

fn repeated_annotations(diagram: &Diagram) -> Vec<String> {
    let mut out = Vec::new();
    for node in &diagram.nodes {
        let mut seen = HashSet::new();
        for a in &node.annotation_properties {
            if !seen.insert((a.property.as_str(), a.value.as_str())) {
                out.push(format!("{}: {} = {}", node.iri, a.property, a.value));
            }
        }
    }
    out
}

fn orphan_blank_nodes(diagram: &Diagram) -> Vec<String> {
    let endpoints: HashSet<&str> = diagram
        .edges
        .iter()
        .flat_map(|e| [e.source.as_str(), e.target.as_str()])
        .collect();
    diagram
        .nodes
        .iter()
        .filter(|n| n.iri.starts_with("_:") && !endpoints.contains(n.iri.as_str()))
        .map(|n| n.iri.clone())
        .collect()
}
