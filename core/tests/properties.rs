use std::collections::BTreeSet;

use graph_tasks_core::{
    bellman_ford, floyd_warshall, prim_ordered_edges, shortest_paths_from,
    strongly_connected_components, Graph, VertexId,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    AddVertex(u64),
    RemoveVertex(u64),
    AddEdge(u64, u64, i64),
    RemoveEdge(u64, u64),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        (1u64..10).prop_map(Operation::AddVertex),
        (1u64..10).prop_map(Operation::RemoveVertex),
        (1u64..10, 1u64..10, 0i64..20).prop_map(|(f, t, w)| Operation::AddEdge(f, t, w)),
        (1u64..10, 1u64..10).prop_map(|(f, t)| Operation::RemoveEdge(f, t)),
    ]
}

fn build(vertices: u64, edges: &[(u64, u64, i64)], directed: bool) -> Graph {
    let mut g = Graph::new(directed, true);
    for v in 1..=vertices {
        g.add_vertex(v);
    }
    for &(from, to, w) in edges {
        if from <= vertices && to <= vertices {
            g.add_edge(from, to, w).unwrap();
        }
    }
    g
}

fn edge_triples(g: &Graph) -> BTreeSet<(u64, u64, i64)> {
    g.edges().map(|e| (e.from, e.to, e.weight)).collect()
}

fn edge_pairs(g: &Graph) -> BTreeSet<(u64, u64)> {
    g.edges().map(|e| (e.from, e.to)).collect()
}

fn graph_strategy() -> impl Strategy<Value = (u64, Vec<(u64, u64, i64)>)> {
    (1u64..8).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((1..=n, 1..=n, 0i64..15), 0..20),
        )
    })
}

/// Kruskal over a complete graph, as an independent MST weight reference.
fn kruskal_weight(g: &Graph) -> i64 {
    let mut edges: Vec<_> = g.edges().filter(|e| e.from < e.to).copied().collect();
    edges.sort_by_key(|e| e.weight);
    let vertices: Vec<VertexId> = g.vertices().collect();
    let mut parent: Vec<usize> = (0..vertices.len()).collect();
    fn find(parent: &mut Vec<usize>, x: usize) -> usize {
        if parent[x] != x {
            let root = find(parent, parent[x]);
            parent[x] = root;
        }
        parent[x]
    }
    let slot = |v: VertexId| vertices.iter().position(|&x| x == v).unwrap();
    let mut total = 0;
    for e in edges {
        let (a, b) = (find(&mut parent, slot(e.from)), find(&mut parent, slot(e.to)));
        if a != b {
            parent[a] = b;
            total += e.weight;
        }
    }
    total
}

proptest! {
    #[test]
    fn test_removed_vertex_leaves_no_edges(
        (n, edges) in graph_strategy(),
        directed in any::<bool>(),
        victim in 1u64..8,
    ) {
        let mut g = build(n, &edges, directed);
        g.remove_vertex(victim);
        prop_assert!(!g.contains_vertex(victim));
        prop_assert!(g.edges().all(|e| e.from != victim && e.to != victim));
    }

    #[test]
    fn test_undirected_stays_symmetric(ops in proptest::collection::vec(operation(), 1..60)) {
        let mut g = Graph::new(false, true);
        for op in ops {
            match op {
                Operation::AddVertex(v) => g.add_vertex(v),
                Operation::RemoveVertex(v) => g.remove_vertex(v),
                Operation::AddEdge(f, t, w) => { let _ = g.add_edge(f, t, w); }
                Operation::RemoveEdge(f, t) => { let _ = g.remove_edge(f, t); }
            }
            for e in g.edges() {
                let back = g.edge(e.to, e.from);
                prop_assert_eq!(back.map(|b| b.weight), Some(e.weight));
            }
        }
    }

    #[test]
    fn test_double_inversion_restores_edges((n, edges) in graph_strategy()) {
        let g = build(n, &edges, true);
        prop_assert_eq!(edge_triples(&g.inverted().inverted()), edge_triples(&g));
    }

    #[test]
    fn test_union_membership_commutes(
        (n, a_edges) in graph_strategy(),
        (m, b_edges) in graph_strategy(),
    ) {
        let a = build(n, &a_edges, true);
        let b = build(m, &b_edges, true);
        let ab = a.union(&b);
        let ba = b.union(&a);
        let ab_vertices: BTreeSet<_> = ab.vertices().collect();
        let ba_vertices: BTreeSet<_> = ba.vertices().collect();
        prop_assert_eq!(ab_vertices, ba_vertices);
        prop_assert_eq!(edge_pairs(&ab), edge_pairs(&ba));
    }

    #[test]
    fn test_relaxation_agrees_with_bellman_ford((n, edges) in graph_strategy()) {
        let g = build(n, &edges, true);
        let relaxed = shortest_paths_from(&g, 1).unwrap();
        let bf = bellman_ford(&g, 1).unwrap();
        for v in g.vertices() {
            prop_assert_eq!(relaxed.distance(v), bf.distance(v));
        }
    }

    #[test]
    fn test_floyd_warshall_agrees_with_bellman_ford((n, edges) in graph_strategy()) {
        let g = build(n, &edges, true);
        let fw = floyd_warshall(&g);
        for source in g.vertices() {
            let bf = bellman_ford(&g, source).unwrap();
            for target in g.vertices() {
                prop_assert_eq!(fw.distance(source, target), bf.distance(target));
            }
        }
    }

    #[test]
    fn test_prim_on_complete_graph_is_minimal(weights in proptest::collection::vec(0i64..50, 10)) {
        // complete graph on 5 vertices has 10 undirected edges
        let mut g = Graph::new(false, true);
        for v in 1..=5 {
            g.add_vertex(v);
        }
        let mut w = weights.into_iter();
        for a in 1..=5u64 {
            for b in a + 1..=5 {
                g.add_edge(a, b, w.next().unwrap()).unwrap();
            }
        }
        let tree = prim_ordered_edges(&g, 1).unwrap();
        prop_assert_eq!(tree.len(), 4);
        let total: i64 = tree.iter().map(|e| e.weight).sum();
        prop_assert_eq!(total, kruskal_weight(&g));
    }

    #[test]
    fn test_scc_partitions_vertices((n, edges) in graph_strategy()) {
        let g = build(n, &edges, true);
        let components = strongly_connected_components(&g);
        let mut all: Vec<VertexId> = components.iter().flatten().copied().collect();
        all.sort_unstable();
        let expected: Vec<VertexId> = (1..=n).collect();
        prop_assert_eq!(all, expected);

        // vertices sharing a component reach each other
        for component in &components {
            let root = component[0];
            let from_root = bellman_ford(&g, root).unwrap();
            for &v in component {
                prop_assert!(from_root.is_reachable(v));
                prop_assert!(bellman_ford(&g, v).unwrap().is_reachable(root));
            }
        }
    }
}
