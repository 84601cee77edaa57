//! Document loading through `sophia`.
//!
//! Parses N-Quads, TriG, Turtle and N-Triples text and converts every
//! `sophia_api` term into a [`Term`]. Loading is the only fallible step
//! between a document and a diagram; the mapper itself never fails.

use std::str::FromStr;

use sophia_api::quad::Quad as _;
use sophia_api::source::{QuadSource, TripleSource};
use sophia_api::term::{Term as SophiaTerm, TermKind};
use sophia_api::triple::Triple as _;
use sophia_turtle::parser::{nq, nt, trig, turtle};
use thiserror::Error;

use crate::model::{Literal, Quad, Term};

/// Errors produced while loading a document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document does not parse in the requested format.
    #[error("{format} syntax error: {message}")]
    Syntax {
        /// Format being parsed.
        format: DocumentFormat,
        /// Parser message.
        message: String,
    },
    /// The format name is not recognised.
    #[error("unknown document format '{0}' (expected nquads, trig, turtle or ntriples)")]
    UnknownFormat(String),
}

/// Supported serialisations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// N-Quads.
    NQuads,
    /// TriG.
    TriG,
    /// Turtle; every triple lands in the supplied graph.
    Turtle,
    /// N-Triples; every triple lands in the supplied graph.
    NTriples,
}

impl DocumentFormat {
    /// Guesses the format from a file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "nq" | "nquads" => Some(DocumentFormat::NQuads),
            "trig" => Some(DocumentFormat::TriG),
            "ttl" | "turtle" => Some(DocumentFormat::Turtle),
            "nt" | "ntriples" => Some(DocumentFormat::NTriples),
            _ => None,
        }
    }

    /// Returns true for formats that carry graph names.
    #[must_use]
    pub fn has_graphs(self) -> bool {
        matches!(self, DocumentFormat::NQuads | DocumentFormat::TriG)
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DocumentFormat::NQuads => "N-Quads",
            DocumentFormat::TriG => "TriG",
            DocumentFormat::Turtle => "Turtle",
            DocumentFormat::NTriples => "N-Triples",
        })
    }
}

impl FromStr for DocumentFormat {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s).ok_or_else(|| LoadError::UnknownFormat(s.to_string()))
    }
}

/// Converts a `sophia` term. Quoted triples are not modelled and yield `None`.
pub fn term_from_sophia<T: SophiaTerm>(term: T) -> Option<Term> {
    match term.kind() {
        TermKind::Iri => term.iri().map(|iri| Term::named(iri.as_str())),
        TermKind::BlankNode => term.bnode_id().map(|id| Term::blank(id.as_str())),
        TermKind::Literal => {
            let value = term.lexical_form()?.to_string();
            let language = term.language_tag().map(|tag| tag.as_str().to_string());
            let datatype = match language {
                Some(_) => None,
                None => term.datatype().map(|dt| dt.as_str().to_string()),
            };
            Some(Term::Literal(Literal {
                value,
                datatype,
                language,
            }))
        }
        TermKind::Variable => term.variable().map(|v| Term::Other(v.as_str().to_string())),
        TermKind::Triple => None,
    }
}

fn push_converted(
    out: &mut Vec<Quad>,
    dropped: &mut usize,
    terms: [Option<Term>; 3],
    graph: Option<String>,
) {
    match terms {
        [Some(subject), Some(predicate), Some(object)] => out.push(Quad {
            subject,
            predicate,
            object,
            graph,
        }),
        _ => *dropped += 1,
    }
}

/// Parses `source` as `format`.
///
/// Quads keep their graph names; triples from Turtle or N-Triples are
/// placed in `default_graph`.
///
/// # Errors
///
/// Returns [`LoadError::Syntax`] if the document does not parse.
pub fn load_str(
    source: &str,
    format: DocumentFormat,
    default_graph: Option<&str>,
) -> Result<Vec<Quad>, LoadError> {
    let mut quads = Vec::new();
    let mut dropped = 0usize;
    let syntax = |message: String| LoadError::Syntax { format, message };

    macro_rules! collect_quads {
        ($parser:expr) => {
            $parser
                .for_each_quad(|q| {
                    let graph = q
                        .g()
                        .and_then(term_from_sophia)
                        .map(|g| g.value().to_string());
                    push_converted(
                        &mut quads,
                        &mut dropped,
                        [
                            term_from_sophia(q.s()),
                            term_from_sophia(q.p()),
                            term_from_sophia(q.o()),
                        ],
                        graph,
                    );
                })
                .map_err(|e| syntax(e.to_string()))?
        };
    }
    macro_rules! collect_triples {
        ($parser:expr) => {
            $parser
                .for_each_triple(|t| {
                    push_converted(
                        &mut quads,
                        &mut dropped,
                        [
                            term_from_sophia(t.s()),
                            term_from_sophia(t.p()),
                            term_from_sophia(t.o()),
                        ],
                        default_graph.map(str::to_string),
                    );
                })
                .map_err(|e| syntax(e.to_string()))?
        };
    }

    match format {
        DocumentFormat::NQuads => collect_quads!(nq::parse_str(source)),
        DocumentFormat::TriG => collect_quads!(trig::parse_str(source)),
        DocumentFormat::Turtle => collect_triples!(turtle::parse_str(source)),
        DocumentFormat::NTriples => collect_triples!(nt::parse_str(source)),
    }

    if dropped > 0 {
        tracing::debug!(dropped, %format, "skipped statements with unsupported terms");
    }
    tracing::debug!(quads = quads.len(), %format, "loaded document");
    Ok(quads)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TRIG: &str = r#"
@prefix ex:   <http://example.org/> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

<urn:vg:data> {
    ex:alice ex:knows ex:bob ;
        rdfs:label "Alice"@en ;
        ex:address [ ex:city "Paris" ] .
}

<urn:vg:inferred> {
    ex:alice ex:age 42 .
}
"#;

    #[test]
    fn trig_keeps_graph_names_and_term_kinds() {
        let quads = load_str(TRIG, DocumentFormat::TriG, None).unwrap();
        assert_eq!(quads.len(), 5);
        assert!(quads[..4].iter().all(|q| q.graph.as_deref() == Some("urn:vg:data")));
        assert_eq!(quads[4].graph.as_deref(), Some("urn:vg:inferred"));

        let label = quads
            .iter()
            .find(|q| q.predicate.value().ends_with("label"))
            .map(|q| q.object.clone());
        assert_eq!(label, Some(Term::lang_literal("Alice", "en")));

        let address = quads
            .iter()
            .find(|q| q.predicate.value() == "http://example.org/address")
            .map(|q| q.object.clone());
        assert!(matches!(address, Some(Term::BlankNode(ref b)) if b.starts_with("_:")));
    }

    #[test]
    fn turtle_triples_take_the_default_graph() {
        let src = "<http://e/a> <http://e/p> \"1\"^^<http://www.w3.org/2001/XMLSchema#integer> .";
        let quads = load_str(src, DocumentFormat::Turtle, Some("urn:vg:data")).unwrap();
        assert_eq!(quads.len(), 1);
        assert_eq!(quads[0].graph.as_deref(), Some("urn:vg:data"));
        assert_eq!(
            quads[0].object,
            Term::typed_literal("1", "http://www.w3.org/2001/XMLSchema#integer")
        );
    }

    #[test]
    fn syntax_errors_are_reported() {
        let err = load_str("<http://e/a> <http://e/p> .", DocumentFormat::NTriples, None);
        assert!(matches!(err, Err(LoadError::Syntax { .. })));
    }

    #[test]
    fn formats_from_names() {
        assert_eq!("ttl".parse::<DocumentFormat>().ok(), Some(DocumentFormat::Turtle));
        assert_eq!("NQ".parse::<DocumentFormat>().ok(), Some(DocumentFormat::NQuads));
        assert!(matches!(
            "rdfxml".parse::<DocumentFormat>(),
            Err(LoadError::UnknownFormat(_))
        ));
        assert!(DocumentFormat::TriG.has_graphs());
        assert!(!DocumentFormat::Turtle.has_graphs());
    }
}
