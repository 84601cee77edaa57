//! Type pre-scan and schema/instance (TBox/ABox) classification.

use std::collections::{HashMap, HashSet};

use crate::model::{iris, Quad, Term};

/// `subject → rdf:type objects` collected from the data partition before
/// any node is built.
#[derive(Debug, Default)]
pub struct TypeIndex<'q> {
    types: HashMap<&'q str, HashSet<&'q str>>,
}

impl<'q> TypeIndex<'q> {
    /// Collects declared types in one pass over `data`.
    #[must_use]
    pub fn scan(data: &[&'q Quad]) -> Self {
        let mut types: HashMap<&'q str, HashSet<&'q str>> = HashMap::new();
        for quad in data {
            let typed = quad.predicate.value() == iris::RDF_TYPE;
            if typed && !matches!(quad.object, Term::Literal(_)) {
                types
                    .entry(quad.subject.value())
                    .or_default()
                    .insert(quad.object.value());
            }
        }
        Self { types }
    }

    /// Returns true if `subject` was declared with any TBox type.
    #[must_use]
    pub fn declares_tbox(&self, subject: &str) -> bool {
        self.types
            .get(subject)
            .is_some_and(|set| set.iter().any(|t| is_tbox_type(t)))
    }
}

/// Returns true for the fixed set of schema-level types.
#[must_use]
pub fn is_tbox_type(iri: &str) -> bool {
    iris::TBOX_TYPES.contains(&iri)
}

/// TBox flag from the union of pre-scanned types and types already on the node.
#[must_use]
pub fn is_tbox(index: &TypeIndex<'_>, subject: &str, recorded: &[String]) -> bool {
    index.declares_tbox(subject) || recorded.iter().any(|t| is_tbox_type(t))
}

/// First type that is not `owl:NamedIndividual`, else the primary type.
#[must_use]
pub fn class_type(rdf_types: &[String]) -> Option<&str> {
    rdf_types
        .iter()
        .find(|t| t.as_str() != iris::OWL_NAMED_INDIVIDUAL)
        .or_else(|| rdf_types.first())
        .map(String::as_str)
}
