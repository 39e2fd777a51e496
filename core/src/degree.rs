use std::collections::HashMap;

use serde::Serialize;

use crate::graph::{Graph, VertexId};

/// Degree information for a single vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegreeInfo {
    pub vertex: VertexId,
    pub out_degree: usize,
    pub in_degree: usize,
    pub total_degree: usize,
}

/// Return vertices ranked by total degree (in + out).
///
/// If `top_n` is 0, returns all vertices. Ties are broken by vertex id
/// (ascending). In-degrees come from a single pass over every edge.
pub fn degree_ranking(graph: &Graph, top_n: usize) -> Vec<DegreeInfo> {
    let mut incoming: HashMap<VertexId, usize> = HashMap::with_capacity(graph.vertex_count());
    for edge in graph.edges() {
        *incoming.entry(edge.to).or_default() += 1;
    }

    let mut results: Vec<DegreeInfo> = graph
        .vertices()
        .map(|vertex| {
            let out_degree = graph.neighbors(vertex).len();
            let in_degree = incoming.get(&vertex).copied().unwrap_or(0);
            DegreeInfo {
                vertex,
                out_degree,
                in_degree,
                total_degree: out_degree + in_degree,
            }
        })
        .collect();

    results.sort_by(|a, b| {
        b.total_degree
            .cmp(&a.total_degree)
            .then(a.vertex.cmp(&b.vertex))
    });

    if top_n > 0 && top_n < results.len() {
        results.truncate(top_n);
    }

    results
}
