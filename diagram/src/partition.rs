//! Graph partitioning by provenance graph name.

use crate::model::{Quad, Term};

/// Substring marking a graph of reasoner output.
pub const INFERRED_MARKER: &str = "inferred";

/// Substring marking a graph of asserted data.
pub const DATA_MARKER: &str = "data";

/// Which partition a quad belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphRole {
    /// Asserted data; builds nodes and edges.
    Data,
    /// Reasoner output; folded onto existing nodes only.
    Inferred,
    /// Neither; the quad is ignored.
    Ignored,
}

/// Classifies a graph name. The inferred marker is tested first, so a name
/// containing both markers is inferred.
#[must_use]
pub fn graph_role(graph: Option<&str>) -> GraphRole {
    match graph {
        None => GraphRole::Data,
        Some("") => GraphRole::Data,
        Some(g) if g.contains(INFERRED_MARKER) => GraphRole::Inferred,
        Some(g) if g.contains(DATA_MARKER) => GraphRole::Data,
        Some(_) => GraphRole::Ignored,
    }
}

/// The data and inferred partitions of one batch, in input order.
#[derive(Debug, Default)]
pub struct Partitions<'q> {
    /// Quads from data graphs or the default graph.
    pub data: Vec<&'q Quad>,
    /// Quads from inferred graphs.
    pub inferred: Vec<&'q Quad>,
}

/// Returns true when every position carries a usable value. Literal
/// objects may be empty strings; nothing else may.
fn is_usable(quad: &Quad) -> bool {
    let object_ok = match &quad.object {
        Term::Literal(_) => true,
        other => !other.value().is_empty(),
    };
    !quad.subject.value().is_empty() && !quad.predicate.value().is_empty() && object_ok
}

/// Splits a batch into its data and inferred partitions in one pass.
#[must_use]
pub fn partition(quads: &[Quad]) -> Partitions<'_> {
    let mut parts = Partitions::default();
    let mut unusable = 0usize;
    for quad in quads {
        if !is_usable(quad) {
            unusable += 1;
            continue;
        }
        match graph_role(quad.graph.as_deref()) {
            GraphRole::Data => parts.data.push(quad),
            GraphRole::Inferred => parts.inferred.push(quad),
            GraphRole::Ignored => {}
        }
    }
    if unusable > 0 {
        tracing::trace!(unusable, "dropped quads with empty terms");
    }
    parts
}
