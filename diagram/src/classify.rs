//! Predicate classification, memoised for one mapping call.

use std::collections::HashMap;

use crate::model::{MapOptions, PredicateKind, PredicateKindResolver, SchemaEntry};

/// Per-call classification context.
///
/// Seeded from the schema synopsis when the call starts and dropped when
/// it returns, so a changed synopsis is always picked up by the next call.
pub struct Classifier<'a> {
    memo: HashMap<String, PredicateKind>,
    labels: HashMap<&'a str, &'a str>,
    fallback: Option<PredicateKindResolver<'a>>,
}

impl<'a> Classifier<'a> {
    /// Builds a classifier from the synopsis in `options`.
    ///
    /// Properties are seeded before classes; the first entry for an IRI
    /// wins, both for its kind and its label.
    #[must_use]
    pub fn new(options: &MapOptions<'a>) -> Self {
        let mut memo = HashMap::new();
        let mut labels = HashMap::new();
        let entries: Vec<&'a SchemaEntry> = options
            .available_properties
            .iter()
            .chain(options.available_classes.iter())
            .collect();
        for entry in entries {
            if entry.iri.is_empty() {
                continue;
            }
            memo.entry(entry.iri.clone())
                .or_insert(entry.kind.unwrap_or(PredicateKind::Unknown));
            if let Some(label) = entry.label.as_deref().filter(|l| !l.is_empty()) {
                labels.entry(entry.iri.as_str()).or_insert(label);
            }
        }
        Self {
            memo,
            labels,
            fallback: options.predicate_kind_override,
        }
    }

    /// Resolves the kind of `predicate`, caching the answer for later triples.
    pub fn classify(&mut self, predicate: &str) -> PredicateKind {
        if let Some(kind) = self.memo.get(predicate) {
            return *kind;
        }
        let kind = match self.fallback {
            Some(resolve) => resolve(predicate),
            None => PredicateKind::Annotation,
        };
        self.memo.insert(predicate.to_string(), kind);
        kind
    }

    /// Returns the synopsis label for `iri`, if any.
    #[must_use]
    pub fn label(&self, iri: &str) -> Option<&'a str> {
        self.labels.get(iri).copied()
    }
}
