//! quad-diagram conformance suite.
//!
//! Maps a fixed set of TriG fixtures and checks the properties every
//! diagram must satisfy, independently of the unit tests of the mapper.
//!
//! # Conformance Scope
//!
//! | Area | Property |
//! |------|----------|
//! | Mapping | Idempotence, unique keys, closed edges, de-duplicated annotations |
//! | Inferred graphs | No new keys, facts folded onto existing nodes |
//! | Classification | Edge vs. annotation, blank-node promotion, TBox propagation |
//! | SHACL | Findings attached to focus nodes by severity |
//! | Layout | Parallel-edge shifts, connectivity |
//! | Collapse | Leaf rule, fixed point, expand restores visibility |
//!
//! # Entry Point
//!
//! ```no_run
//! use quad_diagram_conformance::run_all;
//!
//! let report = run_all().expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod tests;
pub mod validators;

pub use report::{ConformanceReport, Severity, Summary, TestResult};

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Mapping determinism
/// 2. Structural invariants
/// 3. Inferred-graph isolation and folding
/// 4. Classification expectations
/// 5. SHACL findings
/// 6. Parallel-edge layout and connectivity
/// 7. Collapse visibility
///
/// # Errors
///
/// Returns an error only if a fixture fails to parse or serialize.
pub fn run_all() -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    // 1-5. Mapping
    report.extend(validators::mapping::determinism::validate()?);
    report.extend(validators::mapping::structure::validate()?);
    report.extend(validators::mapping::inferred::validate()?);
    report.extend(validators::mapping::classification::validate()?);
    report.extend(validators::mapping::validation::validate()?);

    // 6-7. View
    report.extend(validators::view::layout::validate()?);
    report.extend(validators::view::collapse::validate()?);

    tracing::debug!(results = report.results.len(), "conformance run complete");
    Ok(report)
}
