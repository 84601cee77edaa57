//! TriG documents the conformance validators map.
//!
//! Each fixture pairs a document with the property synopsis the mapper is
//! given for it, so edge-versus-annotation decisions are reproducible.

mod hub;
mod ontology;
mod people;
mod reasoning;

pub use hub::HUB;
pub use ontology::ONTOLOGY;
pub use people::PEOPLE;
pub use reasoning::REASONING;

use quad_diagram::{PredicateKind, SchemaEntry};

/// A fixture document and its synopsis.
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    /// Short name used in validator identifiers.
    pub name: &'static str,
    /// TriG source.
    pub trig: &'static str,
    /// Known properties and their declared kinds.
    pub properties: &'static [(&'static str, Option<PredicateKind>)],
}

impl Fixture {
    /// Builds the synopsis passed as `available_properties`.
    #[must_use]
    pub fn synopsis(&self) -> Vec<SchemaEntry> {
        self.properties
            .iter()
            .map(|&(iri, kind)| SchemaEntry {
                iri: iri.to_string(),
                label: None,
                kind,
            })
            .collect()
    }
}

const OBJECT: Option<PredicateKind> = Some(PredicateKind::Object);
const DATATYPE: Option<PredicateKind> = Some(PredicateKind::Datatype);
const ANNOTATION: Option<PredicateKind> = Some(PredicateKind::Annotation);

/// Every fixture, in a fixed order.
pub static ALL: [Fixture; 4] = [
    Fixture {
        name: "people",
        trig: PEOPLE,
        properties: &[
            ("http://example.org/people/knows", OBJECT),
            ("http://example.org/people/worksFor", OBJECT),
            ("http://example.org/people/age", DATATYPE),
            ("http://example.org/people/homepage", ANNOTATION),
            ("http://example.org/people/address", None),
        ],
    },
    Fixture {
        name: "ontology",
        trig: ONTOLOGY,
        properties: &[
            ("http://www.w3.org/2000/01/rdf-schema#subClassOf", None),
            ("http://www.w3.org/2000/01/rdf-schema#domain", OBJECT),
            ("http://www.w3.org/2000/01/rdf-schema#range", OBJECT),
            ("http://www.w3.org/2002/07/owl#onProperty", OBJECT),
            ("http://www.w3.org/2002/07/owl#someValuesFrom", OBJECT),
        ],
    },
    Fixture {
        name: "reasoning",
        trig: REASONING,
        properties: &[
            ("http://example.org/reasoning/manages", OBJECT),
            ("http://example.org/reasoning/managedBy", OBJECT),
            ("http://example.org/reasoning/colleagueOf", OBJECT),
            ("http://example.org/reasoning/salary", DATATYPE),
        ],
    },
    Fixture {
        name: "hub",
        trig: HUB,
        properties: &[
            ("http://example.org/hub/owner", OBJECT),
            ("http://example.org/hub/member", OBJECT),
            ("http://example.org/hub/partOf", OBJECT),
            ("http://example.org/hub/sponsor", OBJECT),
        ],
    },
];

/// Looks up a fixture by name.
#[must_use]
pub fn by_name(name: &str) -> Option<&'static Fixture> {
    ALL.iter().find(|f| f.name == name)
}
