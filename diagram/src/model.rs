//! Core diagram model types.
//!
//! Input types ([`Term`], [`Quad`], [`SchemaEntry`]) are normalised once at
//! the API boundary; output types ([`DiagramNode`], [`DiagramEdge`],
//! [`Diagram`]) serialise to the camelCase JSON shape the renderer consumes.
//! The top-level entry point is [`map_quads_to_diagram`](crate::map_quads_to_diagram).

use serde::{Deserialize, Serialize};

use crate::present::{Palette, PrefixRegistry};

/// A literal term: lexical value plus optional datatype and language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    /// Lexical form.
    pub value: String,
    /// Full datatype IRI, when the source supplied one.
    pub datatype: Option<String>,
    /// Language tag, when the source supplied one.
    pub language: Option<String>,
}

/// A canonical RDF term.
///
/// Blank-node labels always carry the `_:` prefix so that a blank node is
/// keyed identically whether the source tagged it explicitly or not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// An IRI.
    NamedNode(String),
    /// A blank node, stored as `_:label`.
    BlankNode(String),
    /// A literal.
    Literal(Literal),
    /// A term of a kind the engine does not model (variables, quoted
    /// triples, ...), carried as its raw string value.
    Other(String),
}

impl Term {
    /// Creates a named-node term.
    pub fn named(iri: impl Into<String>) -> Self {
        Term::NamedNode(iri.into())
    }

    /// Creates a blank-node term, adding the `_:` prefix if absent.
    pub fn blank(label: impl AsRef<str>) -> Self {
        let label = label.as_ref();
        if label.starts_with("_:") {
            Term::BlankNode(label.to_string())
        } else {
            Term::BlankNode(format!("_:{label}"))
        }
    }

    /// Creates a plain literal with no datatype or language.
    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal(Literal {
            value: value.into(),
            datatype: None,
            language: None,
        })
    }

    /// Creates a literal with an explicit datatype IRI.
    pub fn typed_literal(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Term::Literal(Literal {
            value: value.into(),
            datatype: Some(datatype.into()),
            language: None,
        })
    }

    /// Creates a language-tagged literal.
    pub fn lang_literal(value: impl Into<String>, language: impl Into<String>) -> Self {
        Term::Literal(Literal {
            value: value.into(),
            datatype: None,
            language: Some(language.into()),
        })
    }

    /// Returns the term's string value (IRI, `_:label`, lexical form, or raw value).
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Term::NamedNode(v) | Term::BlankNode(v) | Term::Other(v) => v,
            Term::Literal(lit) => &lit.value,
        }
    }

    /// Returns true for literal terms.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }
}

/// A quad as consumed by the mapper. The graph name is `None` for the
/// default graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quad {
    /// Subject term.
    pub subject: Term,
    /// Predicate term.
    pub predicate: Term,
    /// Object term.
    pub object: Term,
    /// Provenance graph name.
    pub graph: Option<String>,
}

impl Quad {
    /// Creates a quad.
    pub fn new(subject: Term, predicate: Term, object: Term, graph: Option<&str>) -> Self {
        Self {
            subject,
            predicate,
            object,
            graph: graph.map(str::to_string),
        }
    }
}

/// Whether a predicate draws an edge, folds into an attribute, or is undetermined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredicateKind {
    /// `owl:AnnotationProperty`; folded into node attributes.
    Annotation,
    /// `owl:ObjectProperty`; relates two resources and draws an edge.
    Object,
    /// `owl:DatatypeProperty`; relates a resource to a literal.
    Datatype,
    /// Known to the synopsis but with no declared kind.
    Unknown,
}

impl PredicateKind {
    /// Returns true if a non-literal object under this kind becomes an edge.
    #[must_use]
    pub fn draws_edge(self) -> bool {
        matches!(self, PredicateKind::Object | PredicateKind::Unknown)
    }
}

/// A schema synopsis entry for a known property or class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaEntry {
    /// Full IRI.
    #[serde(alias = "key")]
    pub iri: String,
    /// Human-readable label.
    #[serde(default)]
    pub label: Option<String>,
    /// Declared kind, if any.
    #[serde(default)]
    pub kind: Option<PredicateKind>,
}

impl SchemaEntry {
    /// Creates an entry with the given IRI and no label or kind.
    pub fn new(iri: impl Into<String>) -> Self {
        Self {
            iri: iri.into(),
            label: None,
            kind: None,
        }
    }

    /// Sets the declared kind.
    #[must_use]
    pub fn with_kind(mut self, kind: PredicateKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Resolver consulted for predicates the synopsis does not mention.
pub type PredicateKindResolver<'a> = &'a dyn Fn(&str) -> PredicateKind;

/// Options for one mapping call. Everything is borrowed for the duration
/// of the call and never mutated.
#[derive(Clone, Copy, Default)]
pub struct MapOptions<'a> {
    /// Known properties.
    pub available_properties: &'a [SchemaEntry],
    /// Known classes.
    pub available_classes: &'a [SchemaEntry],
    /// Namespace-prefix table used for display forms.
    pub registry: Option<&'a PrefixRegistry>,
    /// Namespace colour palette.
    pub palette: Option<&'a Palette>,
    /// Replaces the "unknown predicates are annotations" default.
    pub predicate_kind_override: Option<PredicateKindResolver<'a>>,
}

impl std::fmt::Debug for MapOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapOptions")
            .field("available_properties", &self.available_properties.len())
            .field("available_classes", &self.available_classes.len())
            .field("registry", &self.registry.is_some())
            .field("palette", &self.palette.is_some())
            .field(
                "predicate_kind_override",
                &self.predicate_kind_override.is_some(),
            )
            .finish()
    }
}

/// A folded property assertion on a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyValue {
    /// Predicate IRI.
    pub property: String,
    /// Object value (lexical form, IRI, or blank label).
    pub value: String,
    /// Literal datatype or `rdf:langString`; `None` for non-literal values.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
}

/// A node of the diagram, keyed by subject IRI or blank-node label.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramNode {
    /// Subject IRI or `_:label`.
    pub iri: String,
    /// Declared types in first-seen order; the first is primary.
    pub rdf_types: Vec<String>,
    /// Last `rdfs:label` seen.
    pub label: Option<String>,
    /// First type that is not `owl:NamedIndividual`, else the primary type.
    pub class_type: Option<String>,
    /// Synopsis label of [`class_type`](Self::class_type).
    pub class_label: Option<String>,
    /// Prefixed form of the IRI, or the raw IRI.
    pub display_prefixed: String,
    /// Local name of the IRI.
    pub display_short: String,
    /// Palette colour, when one matches.
    pub color: Option<String>,
    /// Literal-valued subset of the annotation list.
    pub literal_properties: Vec<PropertyValue>,
    /// Folded property assertions, de-duplicated by (property, value).
    pub annotation_properties: Vec<PropertyValue>,
    /// Schema-level (TBox) node.
    #[serde(rename = "isTBox")]
    pub is_tbox: bool,
    /// SHACL violation messages targeting this node.
    pub reasoning_errors: Vec<String>,
    /// SHACL warning messages targeting this node.
    pub reasoning_warnings: Vec<String>,
    /// `!reasoning_errors.is_empty()`.
    pub has_reasoning_error: bool,
    /// `!reasoning_warnings.is_empty()`.
    pub has_reasoning_warning: bool,
    /// Created only as an edge endpoint, never an explicit subject.
    #[serde(rename = "__isPlaceholder")]
    pub is_placeholder: bool,
    /// Number of distinct neighbouring nodes.
    pub connectivity: usize,
    /// Visibility flag owned by the caller; always `false` from the mapper.
    pub hidden: bool,
}

/// A directed edge of the diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramEdge {
    /// Deterministic id derived from (source, target, property).
    pub id: String,
    /// Source node key.
    pub source: String,
    /// Target node key.
    pub target: String,
    /// Predicate IRI.
    pub property_uri: String,
    /// Synopsis label, else the prefixed IRI.
    pub property_label: Option<String>,
    /// Prefixed predicate IRI, or the raw IRI.
    pub property_prefixed: String,
    /// Rendering offset separating parallel edges.
    pub shift: i32,
    /// Visibility flag owned by the caller; always `false` from the mapper.
    pub hidden: bool,
}

/// The result of one mapping call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Diagram {
    /// Nodes: explicit subjects in first-seen order, then placeholders.
    pub nodes: Vec<DiagramNode>,
    /// Edges in emission order.
    pub edges: Vec<DiagramEdge>,
}

impl Diagram {
    /// Looks up a node by key. Returns `None` if not found.
    #[must_use]
    pub fn node(&self, iri: &str) -> Option<&DiagramNode> {
        self.nodes.iter().find(|n| n.iri == iri)
    }

    /// Returns the edges leaving `source`.
    pub fn edges_from<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a DiagramEdge> {
        self.edges.iter().filter(move |e| e.source == source)
    }
}

/// Standard IRI constants used by the mapper.
pub mod iris {
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// SHACL namespace.
    pub const SH: &str = "http://www.w3.org/ns/shacl#";

    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdf:Property`.
    pub const RDF_PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";
    /// `rdf:langString`.
    pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
    /// `rdfs:label`.
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    /// `rdfs:Class`.
    pub const RDFS_CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";
    /// `owl:Class`.
    pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    /// `owl:ObjectProperty`.
    pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    /// `owl:DatatypeProperty`.
    pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
    /// `owl:AnnotationProperty`.
    pub const OWL_ANNOTATION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AnnotationProperty";
    /// `owl:NamedIndividual`.
    pub const OWL_NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
    /// `owl:Restriction`.
    pub const OWL_RESTRICTION: &str = "http://www.w3.org/2002/07/owl#Restriction";

    /// `sh:ValidationResult`.
    pub const SH_VALIDATION_RESULT: &str = "http://www.w3.org/ns/shacl#ValidationResult";
    /// `sh:focusNode`.
    pub const SH_FOCUS_NODE: &str = "http://www.w3.org/ns/shacl#focusNode";
    /// `sh:resultMessage`.
    pub const SH_RESULT_MESSAGE: &str = "http://www.w3.org/ns/shacl#resultMessage";
    /// `sh:resultSeverity`.
    pub const SH_RESULT_SEVERITY: &str = "http://www.w3.org/ns/shacl#resultSeverity";
    /// `sh:Violation`.
    pub const SH_VIOLATION: &str = "http://www.w3.org/ns/shacl#Violation";
    /// `sh:Warning`.
    pub const SH_WARNING: &str = "http://www.w3.org/ns/shacl#Warning";

    /// Types whose instances are schema-level (TBox) nodes.
    pub const TBOX_TYPES: [&str; 6] = [
        OWL_CLASS,
        RDFS_CLASS,
        RDF_PROPERTY,
        OWL_OBJECT_PROPERTY,
        OWL_DATATYPE_PROPERTY,
        OWL_ANNOTATION_PROPERTY,
    ];
}
