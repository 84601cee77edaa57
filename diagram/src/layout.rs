//! Connectivity counts and parallel-edge offsets.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::model::DiagramEdge;

/// Offset between neighbouring parallel edges.
pub const PARALLEL_EDGE_STEP: i32 = 40;

/// Number of distinct neighbours of every edge endpoint.
#[must_use]
pub fn connectivity(edges: &[DiagramEdge]) -> HashMap<&str, usize> {
    let mut neighbours: HashMap<&str, HashSet<&str>> = HashMap::new();
    for edge in edges {
        neighbours
            .entry(edge.source.as_str())
            .or_default()
            .insert(edge.target.as_str());
        neighbours
            .entry(edge.target.as_str())
            .or_default()
            .insert(edge.source.as_str());
    }
    neighbours
        .into_iter()
        .map(|(node, set)| (node, set.len()))
        .collect()
}

/// Offset for the `i`-th edge of a parallel group: `0, +1, -1, +2, -2, ...`
/// steps.
#[must_use]
pub fn shift_for_index(i: usize) -> i32 {
    if i == 0 {
        return 0;
    }
    let magnitude = i32::try_from(i.div_ceil(2)).unwrap_or(i32::MAX / PARALLEL_EDGE_STEP);
    let sign = if i % 2 == 1 { 1 } else { -1 };
    sign * magnitude.saturating_mul(PARALLEL_EDGE_STEP)
}

/// Assigns `shift` to every edge in place without reordering.
///
/// Edges are grouped by ordered `(source, target)` and ranked by id within
/// each group.
pub fn assign_parallel_shifts(edges: &mut [DiagramEdge]) {
    let shifts = {
        let mut groups: BTreeMap<(&str, &str), Vec<(&str, usize)>> = BTreeMap::new();
        for (pos, edge) in edges.iter().enumerate() {
            groups
                .entry((edge.source.as_str(), edge.target.as_str()))
                .or_default()
                .push((edge.id.as_str(), pos));
        }
        let mut shifts = vec![0; edges.len()];
        for members in groups.values_mut() {
            members.sort_unstable();
            for (rank, &(_, pos)) in members.iter().enumerate() {
                shifts[pos] = shift_for_index(rank);
            }
        }
        shifts
    };

    for (edge, shift) in edges.iter_mut().zip(shifts) {
        edge.shift = shift;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(id: &str, source: &str, target: &str) -> DiagramEdge {
        DiagramEdge {
            id: id.to_string(),
            source: source.to_string(),
            target: target.to_string(),
            property_uri: format!("http://e/{id}"),
            property_label: None,
            property_prefixed: format!("http://e/{id}"),
            shift: 99,
            hidden: false,
        }
    }

    #[test]
    fn shift_sequence_fans_out_symmetrically() {
        let s: Vec<i32> = (0..5).map(shift_for_index).collect();
        let k = PARALLEL_EDGE_STEP;
        assert_eq!(s, [0, k, -k, 2 * k, -2 * k]);
    }

    #[test]
    fn parallel_edges_ranked_by_id_keep_order() {
        let mut edges = vec![
            edge("c", "A", "B"),
            edge("a", "A", "B"),
            edge("x", "B", "A"),
            edge("b", "A", "B"),
        ];
        assign_parallel_shifts(&mut edges);
        let ids: Vec<&str> = edges.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "x", "b"]);
        let shifts: Vec<i32> = edges.iter().map(|e| e.shift).collect();
        assert_eq!(shifts, [-PARALLEL_EDGE_STEP, 0, 0, PARALLEL_EDGE_STEP]);
    }

    #[test]
    fn connectivity_counts_distinct_neighbours() {
        let edges = vec![
            edge("1", "A", "B"),
            edge("2", "A", "B"),
            edge("3", "B", "A"),
            edge("4", "A", "C"),
            edge("5", "D", "A"),
        ];
        let c = connectivity(&edges);
        assert_eq!(c.get("A"), Some(&3));
        assert_eq!(c.get("B"), Some(&1));
        assert_eq!(c.get("C"), Some(&1));
        assert_eq!(c.get("E"), None);
    }

    #[test]
    fn self_loops_count_the_node_itself() {
        let edges = [edge("1", "A", "A")];
        let c = connectivity(&edges);
        assert_eq!(c.get("A"), Some(&1));
    }
}
