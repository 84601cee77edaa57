//! Maps batches of RDF quads onto a node/edge diagram model.
//!
//! The `quad-diagram` crate turns the contents of a live triple store into
//! the nodes and edges a graph renderer draws, and decides which nodes a
//! "collapse" request hides. Both entry points are pure functions: no I/O,
//! no shared state, and identical input always yields identical output.
//!
//! # Entry Point
//!
//! ```
//! use quad_diagram::{map_quads_to_diagram, MapOptions, Quad, SchemaEntry, Term};
//!
//! let knows = "http://example.org/knows";
//! let quads = vec![Quad::new(
//!     Term::named("http://example.org/alice"),
//!     Term::named(knows),
//!     Term::named("http://example.org/bob"),
//!     Some("urn:vg:data"),
//! )];
//! let properties = vec![SchemaEntry::new(knows)];
//! let options = MapOptions {
//!     available_properties: &properties,
//!     ..MapOptions::default()
//! };
//! let diagram = map_quads_to_diagram(&quads, &options);
//! assert_eq!(diagram.nodes.len(), 2);
//! assert_eq!(diagram.edges.len(), 1);
//! ```
//!
//! # Collapse
//!
//! ```
//! # use quad_diagram::{map_quads_to_diagram, MapOptions};
//! # let diagram = map_quads_to_diagram(&[], &MapOptions::default());
//! let changes = quad_diagram::visibility_changes(&diagram.nodes, &diagram.edges, &["http://example.org/alice"], 1);
//! assert!(changes.is_empty());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod builder;
pub mod classify;
pub mod collapse;
pub mod inferred;
pub mod layout;
#[cfg(feature = "turtle")]
pub mod loader;
pub mod model;
pub mod normalize;
pub mod partition;
pub mod present;
pub mod tbox;
pub mod validation;

pub use collapse::{hidden_by_collapse, visibility_changes, HiddenChange, VisibilityChanges};
pub use model::{
    Diagram, DiagramEdge, DiagramNode, Literal, MapOptions, PredicateKind, PropertyValue, Quad,
    SchemaEntry, Term,
};
pub use present::{Palette, PrefixError, PrefixRegistry};

use builder::{Arena, Builder, EdgeRecord, NodeRecord};
use classify::Classifier;
use tbox::TypeIndex;
use validation::ValidationIndex;

/// Maps one batch of quads onto a diagram.
///
/// Quads from data graphs (or the default graph) build nodes and edges;
/// quads from inferred graphs only add annotations to nodes that already
/// exist; quads from any other graph are ignored. Malformed quads are
/// dropped silently.
#[must_use]
pub fn map_quads_to_diagram(quads: &[Quad], options: &MapOptions<'_>) -> Diagram {
    let parts = partition::partition(quads);
    let types = TypeIndex::scan(&parts.data);
    let findings = validation::extract(&parts.data, &parts.inferred);
    let mut classifier = Classifier::new(options);

    let (mut arena, edge_records) =
        Builder::new(&mut classifier, &types, &parts.data).build(&parts.data);
    let folded = inferred::fold_inferred(&mut arena, &parts.inferred);

    let mut edges: Vec<DiagramEdge> = edge_records
        .iter()
        .map(|record| assemble_edge(record, &arena, &classifier, options))
        .collect();
    layout::assign_parallel_shifts(&mut edges);

    let connectivity = layout::connectivity(&edges);
    let nodes: Vec<DiagramNode> = arena
        .output_order()
        .into_iter()
        .map(|idx| {
            let record = arena.node(idx);
            let degree = connectivity.get(record.iri.as_str()).copied().unwrap_or(0);
            assemble_node(record, degree, &findings, &classifier, options)
        })
        .collect();

    tracing::debug!(
        quads = quads.len(),
        data = parts.data.len(),
        inferred = parts.inferred.len(),
        folded,
        validation_targets = findings.len(),
        nodes = nodes.len(),
        edges = edges.len(),
        "mapped quads to diagram"
    );

    Diagram { nodes, edges }
}

fn assemble_edge(
    record: &EdgeRecord,
    arena: &Arena,
    classifier: &Classifier<'_>,
    options: &MapOptions<'_>,
) -> DiagramEdge {
    let property_prefixed = present::prefixed_or_raw(&record.property, options.registry);
    let property_label = classifier
        .label(&record.property)
        .map(str::to_string)
        .or_else(|| (property_prefixed != record.property).then(|| property_prefixed.clone()));
    DiagramEdge {
        id: record.id.clone(),
        source: arena.node(record.source).iri.clone(),
        target: arena.node(record.target).iri.clone(),
        property_uri: record.property.clone(),
        property_label,
        property_prefixed,
        shift: 0,
        hidden: false,
    }
}

fn assemble_node(
    record: &NodeRecord,
    connectivity: usize,
    findings: &ValidationIndex,
    classifier: &Classifier<'_>,
    options: &MapOptions<'_>,
) -> DiagramNode {
    let is_tbox = record.resolved_tbox();
    let class_type = tbox::class_type(&record.rdf_types).map(str::to_string);
    let class_label = class_type
        .as_deref()
        .and_then(|c| classifier.label(c))
        .map(str::to_string);
    let color_key = match (&class_type, is_tbox) {
        (Some(class), false) => class.as_str(),
        _ => record.iri.as_str(),
    };
    let color = options
        .palette
        .and_then(|palette| present::node_color(color_key, palette, options.registry));

    let (reasoning_errors, reasoning_warnings) = match findings.findings(&record.iri) {
        Some(f) => (f.errors.clone(), f.warnings.clone()),
        None => (Vec::new(), Vec::new()),
    };
    let literal_properties = record
        .annotations
        .iter()
        .filter(|a| a.type_.is_some())
        .cloned()
        .collect();

    DiagramNode {
        iri: record.iri.clone(),
        rdf_types: record.rdf_types.clone(),
        label: record.label.clone(),
        class_type,
        class_label,
        display_prefixed: present::prefixed_or_raw(&record.iri, options.registry),
        display_short: present::short_local_name(&record.iri),
        color,
        literal_properties,
        annotation_properties: record.annotations.clone(),
        is_tbox,
        has_reasoning_error: !reasoning_errors.is_empty(),
        has_reasoning_warning: !reasoning_warnings.is_empty(),
        reasoning_errors,
        reasoning_warnings,
        is_placeholder: record.is_placeholder(),
        connectivity,
        hidden: false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use model::iris;

    const DATA: Option<&str> = Some("urn:vg:data");
    const INFERRED: Option<&str> = Some("urn:vg:inferred");

    fn named(s: &str, p: &str, o: &str, g: Option<&str>) -> Quad {
        Quad::new(Term::named(s), Term::named(p), Term::named(o), g)
    }

    #[test]
    fn empty_batch_yields_empty_diagram() {
        let diagram = map_quads_to_diagram(&[], &MapOptions::default());
        assert!(diagram.nodes.is_empty());
        assert!(diagram.edges.is_empty());
    }

    #[test]
    fn validation_findings_reach_their_focus_node() {
        let quads = vec![
            named("http://e/alice", iris::RDF_TYPE, "http://e/Person", DATA),
            named("http://e/r1", iris::RDF_TYPE, iris::SH_VALIDATION_RESULT, INFERRED),
            named("http://e/r1", iris::SH_FOCUS_NODE, "http://e/alice", INFERRED),
            named("http://e/r1", iris::SH_RESULT_SEVERITY, iris::SH_VIOLATION, INFERRED),
            Quad::new(
                Term::named("http://e/r1"),
                Term::named(iris::SH_RESULT_MESSAGE),
                Term::literal("age must be positive"),
                INFERRED,
            ),
        ];
        let diagram = map_quads_to_diagram(&quads, &MapOptions::default());
        assert_eq!(diagram.nodes.len(), 1);
        let alice = &diagram.nodes[0];
        assert!(alice.has_reasoning_error);
        assert!(!alice.has_reasoning_warning);
        assert_eq!(alice.reasoning_errors, ["age must be positive"]);
    }

    #[test]
    fn presentation_fields_use_registry_palette_and_synopsis() {
        let mut registry = PrefixRegistry::with_standard_prefixes();
        registry.insert("ex", "http://e/");
        let mut palette = Palette::new();
        palette.insert("ex", "#123456");
        let props = vec![SchemaEntry::new("http://e/knows").with_label("knows")];
        let classes = vec![SchemaEntry::new("http://e/Person").with_label("Person")];
        let options = MapOptions {
            available_properties: &props,
            available_classes: &classes,
            registry: Some(&registry),
            palette: Some(&palette),
            predicate_kind_override: None,
        };
        let quads = vec![
            named("http://e/alice", iris::RDF_TYPE, iris::OWL_NAMED_INDIVIDUAL, DATA),
            named("http://e/alice", iris::RDF_TYPE, "http://e/Person", DATA),
            named("http://e/alice", "http://e/knows", "http://e/bob", DATA),
            named("http://e/alice", "http://e/likes", "http://other.org/x", DATA),
        ];
        let diagram = map_quads_to_diagram(&quads, &options);
        let alice = diagram.node("http://e/alice").unwrap();
        assert_eq!(alice.class_type.as_deref(), Some("http://e/Person"));
        assert_eq!(alice.class_label.as_deref(), Some("Person"));
        assert_eq!(alice.display_prefixed, "ex:alice");
        assert_eq!(alice.display_short, "alice");
        assert_eq!(alice.color.as_deref(), Some("#123456"));
        assert_eq!(alice.connectivity, 1);

        assert_eq!(diagram.edges.len(), 1);
        let edge = &diagram.edges[0];
        assert_eq!(edge.property_label.as_deref(), Some("knows"));
        assert_eq!(edge.property_prefixed, "ex:knows");

        let bob = diagram.node("http://e/bob");
        assert!(bob.is_some_and(|b| b.is_placeholder && b.connectivity == 1));
    }

    #[test]
    fn literal_properties_mirror_literal_annotations() {
        let quads = vec![
            Quad::new(
                Term::named("http://e/a"),
                Term::named("http://e/age"),
                Term::typed_literal("42", "http://www.w3.org/2001/XMLSchema#integer"),
                DATA,
            ),
            named("http://e/a", "http://e/seeAlso", "http://e/b", DATA),
        ];
        let diagram = map_quads_to_diagram(&quads, &MapOptions::default());
        let a = &diagram.nodes[0];
        assert_eq!(a.annotation_properties.len(), 2);
        assert_eq!(a.literal_properties.len(), 1);
        assert_eq!(a.literal_properties[0].value, "42");
    }

    #[test]
    fn serialized_field_names_match_renderer_contract() {
        let quads = vec![named("http://e/C", iris::RDF_TYPE, iris::OWL_CLASS, DATA)];
        let diagram = map_quads_to_diagram(&quads, &MapOptions::default());
        let json = serde_json::to_value(&diagram).unwrap_or_default();
        let node = &json["nodes"][0];
        assert_eq!(node["isTBox"], serde_json::Value::Bool(true));
        assert_eq!(node["__isPlaceholder"], serde_json::Value::Bool(false));
        assert!(node.get("rdfTypes").is_some());
        assert!(node.get("annotationProperties").is_some());
    }
}
