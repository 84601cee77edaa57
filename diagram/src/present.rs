//! Display collaborators: local names, prefixed IRIs, palette colours and
//! edge ids.
//!
//! These are pure lookups. Only [`to_prefixed`] can fail; callers inside the
//! mapper go through [`prefixed_or_raw`], which substitutes the raw IRI.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by IRI prefixing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrefixError {
    /// No registered namespace is a prefix of the IRI.
    #[error("no registered namespace matches {0}")]
    NoMatchingPrefix(String),
    /// The IRI equals a namespace, leaving an empty local part.
    #[error("{0} has an empty local name under prefix {1}")]
    EmptyLocalName(String, String),
    /// The value is a blank-node label, not an IRI.
    #[error("{0} is a blank node, not an IRI")]
    NotAnIri(String),
}

/// One `prefix: namespace` binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixEntry {
    /// Short prefix, e.g. `"owl"`.
    pub prefix: String,
    /// Namespace IRI, e.g. `"http://www.w3.org/2002/07/owl#"`.
    #[serde(alias = "uri", alias = "iri")]
    pub namespace: String,
}

/// Namespace-prefix table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefixRegistry {
    entries: Vec<PrefixEntry>,
}

impl PrefixRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with `rdf`, `rdfs`, `owl`, `xsd` and `sh`.
    #[must_use]
    pub fn with_standard_prefixes() -> Self {
        use crate::model::iris;
        let mut registry = Self::new();
        registry.insert("rdf", iris::RDF);
        registry.insert("rdfs", iris::RDFS);
        registry.insert("owl", iris::OWL);
        registry.insert("xsd", iris::XSD);
        registry.insert("sh", iris::SH);
        registry
    }

    /// Adds a binding, replacing any existing binding for the same prefix.
    pub fn insert(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        let prefix = prefix.into();
        let namespace = namespace.into();
        match self.entries.iter_mut().find(|e| e.prefix == prefix) {
            Some(entry) => entry.namespace = namespace,
            None => self.entries.push(PrefixEntry { prefix, namespace }),
        }
    }

    /// Returns the binding whose namespace is the longest prefix of `iri`.
    #[must_use]
    pub fn longest_match(&self, iri: &str) -> Option<&PrefixEntry> {
        self.entries
            .iter()
            .filter(|e| !e.namespace.is_empty() && iri.starts_with(e.namespace.as_str()))
            .max_by_key(|e| e.namespace.len())
    }

    /// Returns all bindings in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[PrefixEntry] {
        &self.entries
    }
}

/// Namespace prefix → colour map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: BTreeMap<String, String>,
}

impl Palette {
    /// Creates an empty palette.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a colour to a prefix (or to a full namespace IRI).
    pub fn insert(&mut self, key: impl Into<String>, color: impl Into<String>) {
        self.colors.insert(key.into(), color.into());
    }

    /// Looks up a colour by prefix or namespace.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.colors.get(key).map(String::as_str)
    }
}

/// Returns the local name of an IRI: the part after the last `#`, `/` or
/// `:`. Falls back to the whole input when no such part exists.
#[must_use]
pub fn short_local_name(iri: &str) -> String {
    let trimmed = iri.trim_end_matches(['/', '#']);
    let local = trimmed
        .rsplit(['#', '/', ':'])
        .next()
        .filter(|s| !s.is_empty());
    match local {
        Some(local) => local.to_string(),
        None => iri.to_string(),
    }
}

/// Compacts `iri` to `prefix:local` using the registry.
///
/// # Errors
///
/// Returns [`PrefixError`] when `iri` is a blank node, when no namespace
/// matches, or when the local part would be empty.
pub fn to_prefixed(iri: &str, registry: &PrefixRegistry) -> Result<String, PrefixError> {
    if iri.starts_with("_:") {
        return Err(PrefixError::NotAnIri(iri.to_string()));
    }
    let entry = registry
        .longest_match(iri)
        .ok_or_else(|| PrefixError::NoMatchingPrefix(iri.to_string()))?;
    let local = &iri[entry.namespace.len()..];
    if local.is_empty() {
        return Err(PrefixError::EmptyLocalName(
            iri.to_string(),
            entry.prefix.clone(),
        ));
    }
    Ok(format!("{}:{}", entry.prefix, local))
}

/// [`to_prefixed`] with the raw IRI as fallback.
#[must_use]
pub fn prefixed_or_raw(iri: &str, registry: Option<&PrefixRegistry>) -> String {
    match registry.map(|r| to_prefixed(iri, r)) {
        Some(Ok(prefixed)) => prefixed,
        Some(Err(err)) => {
            tracing::trace!(%err, "prefixing fell back to raw IRI");
            iri.to_string()
        }
        None => iri.to_string(),
    }
}

/// Looks up a palette colour for `key`.
///
/// The key's prefix under `registry` is tried first, then the namespace
/// IRI itself. Absence is a valid result.
#[must_use]
pub fn node_color(key: &str, palette: &Palette, registry: Option<&PrefixRegistry>) -> Option<String> {
    let entry = registry.and_then(|r| r.longest_match(key))?;
    palette
        .get(&entry.prefix)
        .or_else(|| palette.get(&entry.namespace))
        .map(str::to_string)
}

/// Deterministic edge id for the triple `(subject, predicate, object)`.
///
/// Components are joined with `|`. Any `\` or `|` inside a component is
/// backslash-escaped, so distinct triples always yield distinct ids.
#[must_use]
pub fn edge_id(subject: &str, object: &str, predicate: &str) -> String {
    let mut id = String::with_capacity(subject.len() + predicate.len() + object.len() + 2);
    push_escaped(&mut id, subject);
    id.push('|');
    push_escaped(&mut id, predicate);
    id.push('|');
    push_escaped(&mut id, object);
    id
}

fn push_escaped(out: &mut String, component: &str) {
    for c in component.chars() {
        if matches!(c, '\\' | '|') {
            out.push('\\');
        }
        out.push(c);
    }
}
