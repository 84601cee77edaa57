//! Folding of reasoner output onto nodes built from the data partition.

use crate::builder::Arena;
use crate::model::Quad;

/// Folds each inferred quad onto its subject's annotation list.
///
/// Subjects missing from `arena` are skipped, and no edge is ever created,
/// so the node and edge key sets are exactly those of the data partition.
/// Returns the number of quads folded.
pub fn fold_inferred(arena: &mut Arena, inferred: &[&Quad]) -> usize {
    let mut folded = 0;
    for quad in inferred {
        let Some(idx) = arena.get(quad.subject.value()) else {
            continue;
        };
        arena
            .node_mut(idx)
            .fold_term(quad.predicate.value(), &quad.object);
        folded += 1;
    }
    folded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{iris, Term};

    fn inferred(s: &str, p: &str, o: Term) -> Quad {
        Quad::new(Term::named(s), Term::named(p), o, Some("urn:vg:inferred"))
    }

    #[test]
    fn folds_onto_existing_nodes_only() {
        let mut arena = Arena::default();
        arena.ensure_explicit("http://e/a");
        let quads = vec![
            inferred("http://e/a", "http://e/p", Term::named("http://e/o")),
            inferred("http://e/ghost", "http://e/p", Term::named("http://e/o")),
            inferred("http://e/a", iris::RDF_TYPE, Term::named("http://e/Agent")),
        ];
        let refs: Vec<&Quad> = quads.iter().collect();
        assert_eq!(fold_inferred(&mut arena, &refs), 2);
        assert_eq!(arena.len(), 1);
        let node = arena.node(0);
        assert!(node.rdf_types.is_empty(), "inferred types are annotations");
        assert_eq!(node.annotations.len(), 2);
        assert_eq!(node.annotations[0].value, "http://e/o");
        assert_eq!(node.annotations[0].type_, None);
    }

    #[test]
    fn duplicates_of_data_annotations_are_skipped() {
        let mut arena = Arena::default();
        let a = arena.ensure_explicit("http://e/a");
        arena
            .node_mut(a)
            .fold_term("http://e/p", &Term::literal("v"));
        let quads = vec![inferred("http://e/a", "http://e/p", Term::literal("v"))];
        let refs: Vec<&Quad> = quads.iter().collect();
        fold_inferred(&mut arena, &refs);
        assert_eq!(arena.node(a).annotations.len(), 1);
    }

    #[test]
    fn placeholders_receive_inferred_facts() {
        let mut arena = Arena::default();
        let b = arena.ensure("http://e/b");
        let quads = vec![inferred("http://e/b", "http://e/p", Term::literal("x"))];
        let refs: Vec<&Quad> = quads.iter().collect();
        fold_inferred(&mut arena, &refs);
        assert_eq!(arena.node(b).annotations.len(), 1);
        assert!(arena.node(b).is_placeholder());
    }
}
