//! SHACL findings validator.
//!
//! Maps the `reasoning` fixture and checks that validation results reach
//! their focus nodes by severity, that reasoner-only resources never become
//! nodes and that unrelated graphs are ignored.

use anyhow::Result;
use quad_diagram::model::iris;

use crate::report::{ConformanceReport, TestResult};
use crate::tests::fixtures;
use crate::validators::{id, load, map_fixture};

const CHECK: &str = "mapping/validation";
const NS: &str = "http://example.org/reasoning/";

/// Runs the SHACL findings checks.
///
/// # Errors
///
/// Returns an error if the fixture does not parse.
pub fn validate() -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let Some(fixture) = fixtures::by_name("reasoning") else {
        report.push(TestResult::fail(CHECK, "Fixture 'reasoning' is not registered"));
        return Ok(report);
    };

    let quads = load(fixture)?;
    let diagram = map_fixture(fixture, &quads);
    let iri = |local: &str| format!("{NS}{local}");
    let mut failures = Vec::new();
    let mut expect = |holds: bool, what: &str| {
        if !holds {
            failures.push(what.to_string());
        }
    };

    let dana = diagram.node(&iri("dana"));
    expect(
        dana.is_some_and(|n| {
            n.has_reasoning_error
                && n.reasoning_errors == ["salary must be non-negative"]
                && !n.has_reasoning_warning
        }),
        "violation attaches to dana as an error",
    );
    expect(
        dana.is_some_and(|n| {
            n.rdf_types == [iri("Employee")]
                && n
                    .annotation_properties
                    .iter()
                    .any(|a| a.property == iris::RDF_TYPE && a.value == iri("Person"))
        }),
        "inferred type folds as an annotation",
    );
    expect(
        diagram.node(&iri("eli")).is_some_and(|n| {
            n.reasoning_warnings == ["no salary recorded"] && n.reasoning_errors.is_empty()
        }),
        "warning attaches to eli and info severity is dropped",
    );
    for local in ["ghost", "result1", "result2", "result3", "ignored"] {
        expect(
            diagram.node(&iri(local)).is_none(),
            &format!("{local} is not a node"),
        );
    }
    expect(diagram.edges.len() == 1, "only the asserted manages edge is drawn");

    report.push(TestResult::expect_none(
        id(CHECK, fixture),
        "Validation results and reasoner output attach to existing nodes",
        "Validation expectations violated",
        failures,
    ));
    Ok(report)
}
