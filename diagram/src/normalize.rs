//! Term normalisation at the API boundary.
//!
//! Triple stores and UI layers hand over terms in several shapes: RDF/JS
//! objects (`termType`, `value`), SPARQL JSON results (`type`, `value`,
//! `xml:lang`), or bare strings. Everything is reduced to [`Term`] here so
//! the mapper can match exhaustively. Terms without a usable string value
//! normalise to `None` and their quad is dropped.

use serde_json::{Map, Value};

use crate::model::{Literal, Quad, Term};

/// Kind tag carried by a source term, when it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KindTag {
    Named,
    Blank,
    Literal,
    Other,
}

impl KindTag {
    fn parse(tag: &str) -> Self {
        match tag {
            "NamedNode" | "namednode" | "uri" | "iri" | "IRI" => KindTag::Named,
            "BlankNode" | "blanknode" | "bnode" => KindTag::Blank,
            "Literal" | "literal" | "typed-literal" => KindTag::Literal,
            _ => KindTag::Other,
        }
    }
}

fn is_http_iri(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Normalises one JSON term.
///
/// Bare strings are taken as IRIs, or as blank nodes when they start with
/// `_:`. Objects need a string `value`; an explicit `termType`/`type` tag
/// decides the kind, otherwise `_:` values are blank nodes and values that
/// are not `http(s)` IRIs are literals.
#[must_use]
pub fn term_from_json(raw: &Value) -> Option<Term> {
    match raw {
        Value::String(s) if s.starts_with("_:") => Some(Term::blank(s)),
        Value::String(s) => Some(Term::named(s.as_str())),
        Value::Object(obj) => term_from_object(obj),
        _ => None,
    }
}

fn term_from_object(obj: &Map<String, Value>) -> Option<Term> {
    let value = obj.get("value")?.as_str()?;
    let tag = obj
        .get("termType")
        .or_else(|| obj.get("type"))
        .and_then(Value::as_str)
        .map(KindTag::parse);

    let kind = match tag {
        Some(tag) => tag,
        None if value.starts_with("_:") => KindTag::Blank,
        None if !is_http_iri(value) => KindTag::Literal,
        None => KindTag::Named,
    };

    Some(match kind {
        KindTag::Named => Term::named(value),
        KindTag::Blank => Term::blank(value),
        KindTag::Literal => Term::Literal(Literal {
            value: value.to_string(),
            datatype: obj.get("datatype").and_then(nested_value),
            language: obj
                .get("language")
                .or_else(|| obj.get("xml:lang"))
                .and_then(nested_value),
        }),
        KindTag::Other => Term::Other(value.to_string()),
    })
}

/// Reads a string that may be given directly or as a nested `{value}` term.
fn nested_value(raw: &Value) -> Option<String> {
    let s = match raw {
        Value::String(s) => s.as_str(),
        Value::Object(obj) => obj.get("value")?.as_str()?,
        _ => return None,
    };
    (!s.is_empty()).then(|| s.to_string())
}

/// Normalises the graph position: a term, a string, or null.
///
/// Returns `None` for the default graph.
#[must_use]
pub fn graph_from_json(raw: Option<&Value>) -> Option<String> {
    let name = match raw? {
        Value::String(s) => s.as_str(),
        Value::Object(obj) => obj.get("value")?.as_str()?,
        _ => return None,
    };
    (!name.is_empty()).then(|| name.to_string())
}

/// Normalises one JSON quad. Returns `None` when subject, predicate or
/// object has no usable value.
#[must_use]
pub fn quad_from_json(raw: &Value) -> Option<Quad> {
    let obj = raw.as_object()?;
    Some(Quad {
        subject: term_from_json(obj.get("subject")?)?,
        predicate: term_from_json(obj.get("predicate")?)?,
        object: term_from_json(obj.get("object")?)?,
        graph: graph_from_json(obj.get("graph")),
    })
}

/// Normalises a JSON array of quads, silently dropping malformed entries.
#[must_use]
pub fn quads_from_json(raw: &Value) -> Vec<Quad> {
    let Some(items) = raw.as_array() else {
        return Vec::new();
    };
    let quads: Vec<Quad> = items.iter().filter_map(quad_from_json).collect();
    if quads.len() < items.len() {
        tracing::trace!(
            dropped = items.len() - quads.len(),
            "dropped malformed quads during normalisation"
        );
    }
    quads
}
