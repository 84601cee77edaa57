//! Visibility decisions for collapsed nodes.
//!
//! Collapsing a node keeps its `threshold` rarest outgoing relations
//! visible. Targets of the remaining relations become candidates, and a
//! candidate is hidden only if it is a leaf with respect to the visible
//! graph: every edge leaving it points back at the collapsed node or at
//! another candidate.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::Serialize;

use crate::model::{DiagramEdge, DiagramNode};

/// Returns the nodes hidden when `collapsed` is collapsed.
#[must_use]
pub fn hidden_by_collapse<'e>(
    collapsed: &str,
    edges: &'e [DiagramEdge],
    threshold: usize,
) -> BTreeSet<&'e str> {
    let mut outgoing: Vec<&DiagramEdge> = edges.iter().filter(|e| e.source == collapsed).collect();

    let mut frequency: HashMap<&str, usize> = HashMap::new();
    for edge in &outgoing {
        *frequency.entry(edge.property_uri.as_str()).or_default() += 1;
    }
    outgoing.sort_by_key(|e| frequency[e.property_uri.as_str()]);

    let split = threshold.min(outgoing.len());
    let (kept, rest) = outgoing.split_at(split);
    let kept_targets: HashSet<&str> = kept.iter().map(|e| e.target.as_str()).collect();
    let candidates: HashSet<&str> = rest
        .iter()
        .map(|e| e.target.as_str())
        .filter(|t| *t != collapsed && !kept_targets.contains(t))
        .collect();

    candidates
        .iter()
        .copied()
        .filter(|&candidate| {
            edges
                .iter()
                .filter(|e| e.source == candidate)
                .all(|e| e.target == collapsed || candidates.contains(e.target.as_str()))
        })
        .collect()
}

/// One hidden-flag update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HiddenChange {
    /// Node key or edge id.
    pub id: String,
    /// New value of the hidden flag.
    pub hidden: bool,
}

/// Hidden-flag updates for nodes and edges; unchanged records are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VisibilityChanges {
    /// Node updates, in node order.
    pub nodes: Vec<HiddenChange>,
    /// Edge updates, in edge order.
    pub edges: Vec<HiddenChange>,
}

impl VisibilityChanges {
    /// Returns true when nothing changes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Writes the updates into `nodes` and `edges`.
    pub fn apply(&self, nodes: &mut [DiagramNode], edges: &mut [DiagramEdge]) {
        let node_flags: HashMap<&str, bool> =
            self.nodes.iter().map(|c| (c.id.as_str(), c.hidden)).collect();
        let edge_flags: HashMap<&str, bool> =
            self.edges.iter().map(|c| (c.id.as_str(), c.hidden)).collect();
        for node in nodes {
            if let Some(&hidden) = node_flags.get(node.iri.as_str()) {
                node.hidden = hidden;
            }
        }
        for edge in edges {
            if let Some(&hidden) = edge_flags.get(edge.id.as_str()) {
                edge.hidden = hidden;
            }
        }
    }
}

/// Computes the minimal set of hidden-flag updates for `collapsed`.
///
/// A node is hidden if any collapsed node hides it; an edge is hidden if
/// either endpoint is.
#[must_use]
pub fn visibility_changes<S: AsRef<str>>(
    nodes: &[DiagramNode],
    edges: &[DiagramEdge],
    collapsed: &[S],
    threshold: usize,
) -> VisibilityChanges {
    let hidden: HashSet<&str> = collapsed
        .iter()
        .flat_map(|c| hidden_by_collapse(c.as_ref(), edges, threshold))
        .collect();

    let nodes = nodes
        .iter()
        .filter_map(|n| {
            let hide = hidden.contains(n.iri.as_str());
            (hide != n.hidden).then(|| HiddenChange {
                id: n.iri.clone(),
                hidden: hide,
            })
        })
        .collect();
    let edges = edges
        .iter()
        .filter_map(|e| {
            let hide = hidden.contains(e.source.as_str()) || hidden.contains(e.target.as_str());
            (hide != e.hidden).then(|| HiddenChange {
                id: e.id.clone(),
                hidden: hide,
            })
        })
        .collect();

    VisibilityChanges { nodes, edges }
}
