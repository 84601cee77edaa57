//! SHACL validation-result extraction.
//!
//! Reasoner output may contain `sh:ValidationResult` individuals. Their
//! messages are grouped by `sh:focusNode` so node assembly can attach them
//! as reasoning errors (`sh:Violation`) or warnings (`sh:Warning`).

use std::collections::{HashMap, HashSet};

use crate::model::{iris, Quad};

/// Message used when a result carries no `sh:resultMessage`.
pub const DEFAULT_RESULT_MESSAGE: &str = "Validation failed";

/// Messages attached to one focus node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    /// Messages of results with severity `sh:Violation`.
    pub errors: Vec<String>,
    /// Messages of results with severity `sh:Warning`.
    pub warnings: Vec<String>,
}

/// Validation findings keyed by focus node.
#[derive(Debug, Default)]
pub struct ValidationIndex {
    by_focus: HashMap<String, Findings>,
}

impl ValidationIndex {
    /// Returns the findings for `focus`, if any.
    #[must_use]
    pub fn findings(&self, focus: &str) -> Option<&Findings> {
        self.by_focus.get(focus)
    }

    /// Number of focus nodes with at least one finding.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_focus.len()
    }

    /// Returns true when no result matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_focus.is_empty()
    }
}

enum Severity {
    Violation,
    Warning,
}

/// Scans both partitions for validation results.
#[must_use]
pub fn extract(data: &[&Quad], inferred: &[&Quad]) -> ValidationIndex {
    let all = || data.iter().chain(inferred.iter()).copied();

    let mut seen = HashSet::new();
    let results: Vec<&str> = all()
        .filter(|q| {
            q.predicate.value() == iris::RDF_TYPE && q.object.value() == iris::SH_VALIDATION_RESULT
        })
        .map(|q| q.subject.value())
        .filter(|s| seen.insert(*s))
        .collect();

    let mut index = ValidationIndex::default();
    for result in results {
        let mut focus = None;
        let mut message = None;
        let mut severity = None;
        for quad in all().filter(|q| q.subject.value() == result) {
            match quad.predicate.value() {
                iris::SH_FOCUS_NODE => {
                    focus.get_or_insert(quad.object.value());
                }
                iris::SH_RESULT_MESSAGE => {
                    message.get_or_insert(quad.object.value());
                }
                iris::SH_RESULT_SEVERITY => {
                    severity.get_or_insert(quad.object.value());
                }
                _ => {}
            }
        }

        let severity = match severity {
            Some(iris::SH_VIOLATION) => Severity::Violation,
            Some(iris::SH_WARNING) => Severity::Warning,
            _ => continue,
        };
        let Some(focus) = focus else {
            continue;
        };
        let message = message.unwrap_or(DEFAULT_RESULT_MESSAGE).to_string();

        let findings = index.by_focus.entry(focus.to_string()).or_default();
        let bucket = match severity {
            Severity::Violation => &mut findings.errors,
            Severity::Warning => &mut findings.warnings,
        };
        if !bucket.contains(&message) {
            bucket.push(message);
        }
    }
    index
}
