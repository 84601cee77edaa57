//! Conformance report types: check results, severities and aggregation.

use serde::Serialize;

/// Outcome class of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The property holds.
    Pass,
    /// Suspicious but not a violation of a mapping property.
    Warning,
    /// A mapping property is violated.
    Failure,
}

impl Severity {
    /// Fixed-width tag used by the text report.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        }
    }
}

/// A single conformance check result.
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    /// Validator and fixture, e.g. `mapping/structure/people`.
    pub validator: String,
    /// Human-readable outcome.
    pub message: String,
    /// Severity of the result.
    pub severity: Severity,
    /// Offending keys or ids, one per line.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl TestResult {
    fn new(validator: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
            severity,
            details: Vec::new(),
        }
    }

    /// Creates a passing result.
    pub fn pass(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Pass)
    }

    /// Creates a failure result.
    pub fn fail(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Failure)
    }

    /// Creates a failure result listing the offending items.
    pub fn fail_with_details(
        validator: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            details,
            ..Self::fail(validator, message)
        }
    }

    /// Creates a warning result.
    pub fn warn(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Warning)
    }

    /// Passes when `offenders` is empty, fails with them as details otherwise.
    pub fn expect_none(
        validator: impl Into<String>,
        holds: impl Into<String>,
        violated: impl Into<String>,
        offenders: Vec<String>,
    ) -> Self {
        if offenders.is_empty() {
            Self::pass(validator, holds)
        } else {
            Self::fail_with_details(validator, violated, offenders)
        }
    }

    /// Returns true if this result represents a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Pass, warning and failure counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Checks that passed.
    pub passed: usize,
    /// Checks that warned.
    pub warnings: usize,
    /// Checks that failed.
    pub failed: usize,
}

/// Aggregated report from all validators.
#[derive(Debug, Default, Serialize)]
pub struct ConformanceReport {
    /// Every result, in validator order.
    pub results: Vec<TestResult>,
}

impl ConformanceReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result.
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// Appends every result of `other`.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Counts results by severity.
    #[must_use]
    pub fn summary(&self) -> Summary {
        self.results
            .iter()
            .fold(Summary::default(), |mut acc, r| {
                match r.severity {
                    Severity::Pass => acc.passed += 1,
                    Severity::Warning => acc.warnings += 1,
                    Severity::Failure => acc.failed += 1,
                }
                acc
            })
    }

    /// Returns the count of failed checks.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.summary().failed
    }

    /// Returns true if no check failed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}
