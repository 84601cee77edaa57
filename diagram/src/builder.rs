//! Node and edge construction from the data partition.
//!
//! Nodes live in an arena indexed by [`NodeIdx`]; an `IRI → NodeIdx` map
//! resolves keys once per triple and edges hold indices until assembly.

use std::collections::{HashMap, HashSet};

use crate::classify::Classifier;
use crate::model::{iris, Literal, PropertyValue, Quad, Term};
use crate::present::edge_id;
use crate::tbox::{self, TypeIndex};

/// Dense index of a node in the arena.
pub type NodeIdx = usize;

/// Mutable per-node state accumulated while walking the batch.
#[derive(Debug)]
pub struct NodeRecord {
    /// Node key.
    pub iri: String,
    /// Declared types, first-seen order, no duplicates.
    pub rdf_types: Vec<String>,
    /// Last `rdfs:label`.
    pub label: Option<String>,
    /// Folded assertions in first-seen order.
    pub annotations: Vec<PropertyValue>,
    annotation_keys: HashSet<(String, String)>,
    /// TBox flag as last recomputed for an explicit subject.
    pub is_tbox: bool,
    /// Set when a TBox subject points at this node.
    pub forced_tbox: bool,
    /// Position among explicit subjects; `None` for placeholders.
    pub explicit_order: Option<usize>,
}

impl NodeRecord {
    fn new(iri: &str) -> Self {
        Self {
            iri: iri.to_string(),
            rdf_types: Vec::new(),
            label: None,
            annotations: Vec::new(),
            annotation_keys: HashSet::new(),
            is_tbox: false,
            forced_tbox: false,
            explicit_order: None,
        }
    }

    /// Appends `(property, value)` unless that pair is already present.
    pub fn fold(&mut self, property: &str, value: &str, type_: Option<String>) {
        if self
            .annotation_keys
            .insert((property.to_string(), value.to_string()))
        {
            self.annotations.push(PropertyValue {
                property: property.to_string(),
                value: value.to_string(),
                type_,
            });
        }
    }

    /// Folds an object term using its literal datatype when it has one.
    pub fn fold_term(&mut self, property: &str, object: &Term) {
        match object {
            Term::Literal(lit) => self.fold(property, &lit.value, Some(literal_type(lit))),
            other => self.fold(property, other.value(), None),
        }
    }

    /// Resolved TBox flag. A forced blank node is always TBox; a forced
    /// named node stays ABox only if it declares an instance-level class.
    #[must_use]
    pub fn resolved_tbox(&self) -> bool {
        if self.is_tbox {
            return true;
        }
        if !self.forced_tbox {
            return false;
        }
        self.iri.starts_with("_:") || !self.declares_instance_class()
    }

    /// True when some declared type is neither a TBox type nor `owl:NamedIndividual`.
    fn declares_instance_class(&self) -> bool {
        self.rdf_types
            .iter()
            .any(|t| t != iris::OWL_NAMED_INDIVIDUAL && !tbox::is_tbox_type(t))
    }

    /// True when the node never appeared as an explicit subject.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.explicit_order.is_none()
    }
}

/// Datatype recorded for a folded literal.
#[must_use]
pub fn literal_type(lit: &Literal) -> String {
    match (&lit.datatype, &lit.language) {
        (Some(dt), _) => dt.clone(),
        (None, Some(_)) => iris::RDF_LANG_STRING.to_string(),
        (None, None) => iris::XSD_STRING.to_string(),
    }
}

/// An emitted edge, endpoints still as arena indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    /// Deterministic id.
    pub id: String,
    /// Source node.
    pub source: NodeIdx,
    /// Target node.
    pub target: NodeIdx,
    /// Predicate IRI.
    pub property: String,
}

/// Node arena plus key lookup.
#[derive(Debug, Default)]
pub struct Arena {
    nodes: Vec<NodeRecord>,
    index: HashMap<String, NodeIdx>,
    explicit: usize,
}

impl Arena {
    /// Returns the index for `iri`, creating a placeholder if absent.
    pub fn ensure(&mut self, iri: &str) -> NodeIdx {
        if let Some(&idx) = self.index.get(iri) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(NodeRecord::new(iri));
        self.index.insert(iri.to_string(), idx);
        idx
    }

    /// Like [`ensure`](Self::ensure), and records the node as an explicit subject.
    pub fn ensure_explicit(&mut self, iri: &str) -> NodeIdx {
        let idx = self.ensure(iri);
        let node = &mut self.nodes[idx];
        if node.explicit_order.is_none() {
            node.explicit_order = Some(self.explicit);
            self.explicit += 1;
        }
        idx
    }

    /// Looks up an existing node.
    #[must_use]
    pub fn get(&self, iri: &str) -> Option<NodeIdx> {
        self.index.get(iri).copied()
    }

    /// Mutable access by index.
    pub fn node_mut(&mut self, idx: NodeIdx) -> &mut NodeRecord {
        &mut self.nodes[idx]
    }

    /// Shared access by index.
    #[must_use]
    pub fn node(&self, idx: NodeIdx) -> &NodeRecord {
        &self.nodes[idx]
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true when no node was created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node indices in output order: explicit subjects by first appearance,
    /// then placeholders by creation.
    #[must_use]
    pub fn output_order(&self) -> Vec<NodeIdx> {
        let mut order: Vec<NodeIdx> = (0..self.nodes.len()).collect();
        order.sort_by_key(|&i| match self.nodes[i].explicit_order {
            Some(pos) => (0, pos),
            None => (1, i),
        });
        order
    }
}

/// Walks the data partition and accumulates nodes and edges.
pub struct Builder<'c, 'a, 'q> {
    classifier: &'c mut Classifier<'a>,
    types: &'c TypeIndex<'q>,
    blank_subjects: HashSet<&'q str>,
    arena: Arena,
    edges: Vec<EdgeRecord>,
    edge_ids: HashSet<String>,
}

impl<'c, 'a, 'q> Builder<'c, 'a, 'q> {
    /// Prepares a builder for `data`.
    pub fn new(
        classifier: &'c mut Classifier<'a>,
        types: &'c TypeIndex<'q>,
        data: &[&'q Quad],
    ) -> Self {
        let blank_subjects = data
            .iter()
            .filter(|q| matches!(q.subject, Term::BlankNode(_)))
            .map(|q| q.subject.value())
            .collect();
        Self {
            classifier,
            types,
            blank_subjects,
            arena: Arena::default(),
            edges: Vec::new(),
            edge_ids: HashSet::new(),
        }
    }

    /// Processes every quad of the data partition in order.
    pub fn build(mut self, data: &[&'q Quad]) -> (Arena, Vec<EdgeRecord>) {
        for quad in data {
            self.process(quad);
        }
        (self.arena, self.edges)
    }

    fn process(&mut self, quad: &Quad) {
        let subject = quad.subject.value();
        let predicate = quad.predicate.value();
        let s = self.arena.ensure_explicit(subject);

        let recomputed = tbox::is_tbox(self.types, subject, &self.arena.node(s).rdf_types);
        self.arena.node_mut(s).is_tbox = recomputed;

        if predicate == iris::RDF_TYPE {
            if let Term::NamedNode(ty) | Term::BlankNode(ty) = &quad.object {
                let node = self.arena.node_mut(s);
                if !node.rdf_types.iter().any(|t| t == ty) {
                    node.rdf_types.push(ty.clone());
                }
                return;
            }
        }

        if predicate == iris::RDFS_LABEL {
            if let Term::Literal(lit) = &quad.object {
                let node = self.arena.node_mut(s);
                node.label = Some(lit.value.clone());
                node.fold(predicate, &lit.value, Some(literal_type(lit)));
                return;
            }
        }

        let kind = self.classifier.classify(predicate);
        match &quad.object {
            Term::Literal(lit) => {
                self.arena
                    .node_mut(s)
                    .fold(predicate, &lit.value, Some(literal_type(lit)));
            }
            Term::BlankNode(label) => {
                if kind.draws_edge() || self.blank_subjects.contains(label.as_str()) {
                    self.link(s, label, predicate);
                } else {
                    self.arena.node_mut(s).fold(predicate, label, None);
                }
            }
            Term::NamedNode(iri) => {
                if kind.draws_edge() {
                    self.link(s, iri, predicate);
                } else {
                    self.arena.node_mut(s).fold(predicate, iri, None);
                }
            }
            Term::Other(raw) => self.arena.node_mut(s).fold(predicate, raw, None),
        }
    }

    /// Emits `source → target` once per edge id, creating the target node
    /// and propagating the source's TBox flag onto it.
    fn link(&mut self, source: NodeIdx, target: &str, predicate: &str) {
        let t = self.arena.ensure(target);
        if self.arena.node(source).is_tbox {
            self.arena.node_mut(t).forced_tbox = true;
        }
        let id = edge_id(&self.arena.node(source).iri, target, predicate);
        if self.edge_ids.insert(id.clone()) {
            self.edges.push(EdgeRecord {
                id,
                source,
                target: t,
                property: predicate.to_string(),
            });
        }
    }
}
