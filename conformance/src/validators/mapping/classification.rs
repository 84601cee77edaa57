//! Classification validator.
//!
//! Runs fixture-specific expectations on the edge-versus-annotation
//! decision, blank-node promotion and TBox classification:
//! - `people`: ABox nodes, literal folding, blank-node promotion rules
//! - `ontology`: TBox whitelist, late type declarations, TBox propagation

use anyhow::Result;
use quad_diagram::model::iris;
use quad_diagram::{Diagram, DiagramEdge};

use crate::report::{ConformanceReport, TestResult};
use crate::tests::fixtures::{self, Fixture};
use crate::validators::{id, load, map_fixture};

const CHECK: &str = "mapping/classification";

const PEOPLE: &str = "http://example.org/people/";
const VOCAB: &str = "http://example.org/vocab/";

/// Runs the classification checks.
///
/// # Errors
///
/// Returns an error if a fixture does not parse.
pub fn validate() -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    for name in ["people", "ontology"] {
        let Some(fixture) = fixtures::by_name(name) else {
            report.push(TestResult::fail(
                format!("{CHECK}/{name}"),
                "Fixture is not registered",
            ));
            continue;
        };
        let quads = load(fixture)?;
        let diagram = map_fixture(fixture, &quads);
        let failures = match name {
            "people" => check_people(&diagram),
            _ => check_ontology(&diagram),
        };
        report.push(summarize(fixture, failures));
    }

    Ok(report)
}

fn summarize(fixture: &Fixture, failures: Vec<String>) -> TestResult {
    TestResult::expect_none(
        id(CHECK, fixture),
        "Edge, annotation and TBox decisions match expectations",
        "Classification expectations violated",
        failures,
    )
}

fn expect(failures: &mut Vec<String>, holds: bool, what: &str) {
    if !holds {
        failures.push(what.to_string());
    }
}

fn edges_with(diagram: &Diagram, property: String) -> impl Iterator<Item = &DiagramEdge> {
    diagram.edges.iter().filter(move |e| e.property_uri == property)
}

fn check_people(diagram: &Diagram) -> Vec<String> {
    let iri = |local: &str| format!("{PEOPLE}{local}");
    let mut failures = Vec::new();

    let alice = diagram.node(&iri("alice"));
    expect(&mut failures, alice.is_some(), "alice is a node");
    if let Some(alice) = alice {
        expect(&mut failures, !alice.is_tbox, "alice is ABox");
        expect(
            &mut failures,
            alice.class_type.as_deref() == Some(iri("Person").as_str()),
            "alice's class type skips owl:NamedIndividual",
        );
        expect(&mut failures, alice.label.as_deref() == Some("Alice"), "alice is labelled");
        let age = alice
            .annotation_properties
            .iter()
            .find(|a| a.property == iri("age"));
        expect(
            &mut failures,
            age.is_some_and(|a| {
                a.value == "34" && a.type_.as_deref() == Some(&*format!("{}integer", iris::XSD))
            }),
            "datatype literal folds with its datatype",
        );
        expect(
            &mut failures,
            alice
                .annotation_properties
                .iter()
                .any(|a| a.property == iri("homepage") && a.type_.is_none()),
            "annotation-kind IRI object folds as a plain value",
        );
        expect(
            &mut failures,
            alice
                .annotation_properties
                .iter()
                .any(|a| a.property == iri("tag") && a.value.starts_with("_:")),
            "unreferenced blank node under an annotation folds as its label",
        );
    }

    expect(
        &mut failures,
        edges_with(diagram, iri("knows")).count() == 3,
        "knows draws three edges",
    );
    expect(
        &mut failures,
        edges_with(diagram, iri("worksFor")).all(|e| e.target == iri("acme")),
        "worksFor points at acme",
    );

    let address: Vec<_> = edges_with(diagram, iri("address")).collect();
    expect(&mut failures, address.len() == 1, "address draws one edge");
    if let Some(edge) = address.first() {
        expect(&mut failures, edge.target.starts_with("_:"), "address targets a blank node");
        expect(
            &mut failures,
            diagram.node(&edge.target).is_some_and(|n| !n.is_placeholder),
            "promoted blank node is an explicit subject",
        );
    }
    expect(
        &mut failures,
        diagram.nodes.iter().filter(|n| n.iri.starts_with("_:")).count() == 1,
        "only the address blank node becomes a node",
    );
    expect(
        &mut failures,
        diagram
            .node(&iri("carol"))
            .is_some_and(|n| n.is_placeholder && n.rdf_types.is_empty()),
        "carol is a placeholder",
    );
    failures
}

fn check_ontology(diagram: &Diagram) -> Vec<String> {
    let iri = |local: &str| format!("{VOCAB}{local}");
    let mut failures = Vec::new();
    let tbox = |key: &str| diagram.node(key).is_some_and(|n| n.is_tbox);

    for local in ["Agent", "Person", "knows", "age"] {
        expect(&mut failures, tbox(&iri(local)), &format!("{local} is TBox"));
    }
    expect(
        &mut failures,
        tbox(&iri("Thing")),
        "untyped subClassOf target inherits TBox",
    );
    expect(
        &mut failures,
        diagram
            .node(&iri("Person"))
            .is_some_and(|n| n.class_type.as_deref() == Some(iris::OWL_CLASS)),
        "Person's class type is owl:Class",
    );
    expect(
        &mut failures,
        diagram
            .node(&format!("{}integer", iris::XSD))
            .is_some_and(|n| n.is_tbox && n.is_placeholder),
        "range target is a TBox placeholder",
    );

    let restriction = diagram
        .edges
        .iter()
        .find(|e| e.source == iri("Person") && e.target.starts_with("_:"));
    expect(&mut failures, restriction.is_some(), "restriction blank node is promoted");
    if let Some(edge) = restriction {
        expect(&mut failures, tbox(&edge.target), "typed restriction inherits TBox");
        expect(
            &mut failures,
            diagram
                .node(&edge.target)
                .is_some_and(|n| n.class_type.as_deref() == Some(iris::OWL_RESTRICTION)),
            "restriction keeps its declared type",
        );
        expect(
            &mut failures,
            diagram
                .edges
                .iter()
                .any(|e| e.source == edge.target && e.target == iri("Person")),
            "restriction links back to Person",
        );
    }
    expect(
        &mut failures,
        diagram
            .edges
            .iter()
            .filter(|e| e.source == iri("Person") && e.target == iri("Agent"))
            .count()
            == 1,
        "subClassOf draws an edge",
    );
    failures
}
