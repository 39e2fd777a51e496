use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph, VertexId};

/// Prim's algorithm, returning tree edges in the order they were selected.
///
/// Each step rescans every edge leaving the used set and takes the lightest
/// one that reaches an unused vertex. Ties go to the first candidate seen:
/// used vertices in the order they joined, then their adjacency order.
/// Stops once every vertex is used, or when no edge leaves the used set, in
/// which case the tree spans only `start`'s component.
pub fn prim_ordered_edges(graph: &Graph, start: VertexId) -> Result<Vec<Edge>> {
    if !graph.is_weighted() {
        return Err(GraphError::NotWeighted);
    }
    if !graph.contains_vertex(start) {
        return Err(GraphError::MissingVertex(start));
    }

    let total = graph.vertex_count();
    let mut used_order: Vec<VertexId> = vec![start];
    let mut used: HashSet<VertexId> = HashSet::from([start]);
    let mut tree: Vec<Edge> = Vec::with_capacity(total.saturating_sub(1));

    while used.len() < total {
        let mut best: Option<Edge> = None;
        for &vertex in &used_order {
            for edge in graph.neighbors(vertex) {
                if used.contains(&edge.to) {
                    continue;
                }
                if best.map_or(true, |b| edge.weight < b.weight) {
                    best = Some(*edge);
                }
            }
        }

        let Some(edge) = best else {
            debug!(
                start,
                spanned = used.len(),
                total,
                "prim frontier exhausted before spanning every vertex"
            );
            break;
        };

        trace!(from = edge.from, to = edge.to, weight = edge.weight, "prim selected edge");
        used.insert(edge.to);
        used_order.push(edge.to);
        tree.push(edge);
    }

    Ok(tree)
}

/// Minimum spanning tree from `start` as an undirected, weighted graph.
///
/// The selected edges are unioned with their own reversal and keys are
/// sorted ascending, so the result reads the same whatever the input's
/// directedness.
pub fn prim(graph: &Graph, start: VertexId) -> Result<Graph> {
    let edges = prim_ordered_edges(graph, start)?;

    let mut adjacency: IndexMap<VertexId, Vec<Edge>> = IndexMap::new();
    adjacency.insert(start, Vec::new());
    for edge in &edges {
        adjacency.entry(edge.from).or_default().push(*edge);
        adjacency.entry(edge.to).or_default();
    }
    let found = Graph::from_adjacency(adjacency, true, true);

    let mut tree = found.union(&found.inverted());
    tree.adjacency.sort_keys();
    tree.directed = false;

    let weight = edges.iter().fold(0i64, |acc, e| acc.saturating_add(e.weight));
    debug!(start, edges = edges.len(), weight, "minimum spanning tree");
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn undirected(vertices: &[u64], edges: &[(u64, u64, i64)]) -> Graph {
        let mut g = Graph::new(false, true);
        for &v in vertices {
            g.add_vertex(v);
        }
        for &(from, to, w) in edges {
            g.add_edge(from, to, w).unwrap();
        }
        g
    }

    fn complete4() -> Graph {
        undirected(
            &[1, 2, 3, 4],
            &[(1, 2, 4), (1, 3, 1), (1, 4, 3), (2, 3, 2), (2, 4, 5), (3, 4, 6)],
        )
    }

    fn total_weight(edges: &[Edge]) -> i64 {
        edges.iter().map(|e| e.weight).sum()
    }

    /// Minimum over every 3-edge subset of the 6 edges that connects all 4 vertices.
    fn brute_force_mst_weight(g: &Graph) -> i64 {
        let edges: Vec<Edge> = g.edges().filter(|e| e.from < e.to).copied().collect();
        let mut best = i64::MAX;
        for a in 0..edges.len() {
            for b in a + 1..edges.len() {
                for c in b + 1..edges.len() {
                    let chosen = [edges[a], edges[b], edges[c]];
                    let mut reached: HashSet<u64> = HashSet::from([1]);
                    for _ in 0..3 {
                        for e in &chosen {
                            if reached.contains(&e.from) || reached.contains(&e.to) {
                                reached.insert(e.from);
                                reached.insert(e.to);
                            }
                        }
                    }
                    if reached.len() == 4 {
                        best = best.min(total_weight(&chosen));
                    }
                }
            }
        }
        best
    }

    #[test]
    fn test_prim_complete_graph_is_minimal() {
        let g = complete4();
        let edges = prim_ordered_edges(&g, 1).unwrap();
        assert_eq!(edges.len(), 3);
        assert_eq!(total_weight(&edges), brute_force_mst_weight(&g));
        assert_eq!(total_weight(&edges), 6);
    }

    #[test]
    fn test_prim_selection_order() {
        let edges = prim_ordered_edges(&complete4(), 1).unwrap();
        let pairs: Vec<(u64, u64)> = edges.iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(pairs, vec![(1, 3), (3, 2), (1, 4)]);
    }

    #[test]
    fn test_prim_tie_breaks_by_discovery() {
        let g = undirected(&[1, 2, 3], &[(1, 2, 1), (1, 3, 1), (2, 3, 1)]);
        let edges = prim_ordered_edges(&g, 1).unwrap();
        let pairs: Vec<(u64, u64)> = edges.iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(pairs, vec![(1, 2), (1, 3)]);
    }

    #[test]
    fn test_prim_result_is_symmetric_and_sorted() {
        let tree = prim(&complete4(), 2).unwrap();
        assert_eq!(tree.vertices().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert!(!tree.is_directed());
        assert!(tree.is_weighted());
        assert_eq!(tree.edge_count(), 6);
        for e in tree.edges() {
            assert_eq!(tree.edge(e.to, e.from).map(|r| r.weight), Some(e.weight));
        }
        let targets: Vec<u64> = tree.neighbors(1).iter().map(|e| e.to).collect();
        assert_eq!(targets, vec![3, 4]);
    }

    #[test]
    fn test_prim_directed_input_follows_out_edges() {
        let mut g = Graph::new(true, true);
        for v in 1..=3 {
            g.add_vertex(v);
        }
        g.add_edge(1, 2, 5).unwrap();
        g.add_edge(1, 3, 1).unwrap();
        g.add_edge(3, 2, 1).unwrap();
        let tree = prim(&g, 1).unwrap();
        assert!(tree.has_edge(3, 2));
        assert!(tree.has_edge(2, 3));
        assert!(!tree.has_edge(1, 2));
    }

    #[test]
    fn test_prim_rejects_unweighted() {
        let g = Graph::complete(4);
        assert_eq!(prim(&g, 1).unwrap_err(), GraphError::NotWeighted);
        assert_eq!(prim_ordered_edges(&g, 1).unwrap_err(), GraphError::NotWeighted);
    }

    #[test]
    fn test_prim_missing_start() {
        assert_eq!(
            prim(&complete4(), 10).unwrap_err(),
            GraphError::MissingVertex(10)
        );
    }

    #[test]
    fn test_prim_disconnected_spans_component() {
        let g = undirected(&[1, 2, 3, 4], &[(1, 2, 1), (3, 4, 1)]);
        let tree = prim(&g, 1).unwrap();
        assert_eq!(tree.vertices().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_prim_single_vertex() {
        let g = undirected(&[5], &[]);
        let tree = prim(&g, 5).unwrap();
        assert_eq!(tree.vertex_count(), 1);
        assert_eq!(tree.edge_count(), 0);
    }

    #[test]
    fn test_prim_extreme_weights_do_not_overflow() {
        let g = undirected(&[1, 2, 3], &[(1, 2, i64::MAX), (2, 3, i64::MAX)]);
        let tree = prim(&g, 1).unwrap();
        assert_eq!(tree.edge_count(), 4);
        assert_eq!(tree.edge(3, 2).map(|e| e.weight), Some(i64::MAX));
    }

    #[test]
    fn test_prim_does_not_mutate_input() {
        let g = complete4();
        let before = g.clone();
        let _ = prim(&g, 1).unwrap();
        assert_eq!(g, before);
    }
}
