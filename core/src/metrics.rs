//! Eccentricity, radius and center.
//!
//! Distances here are hop counts along the paths the single-source
//! relaxation picks, so they are meaningful on unweighted graphs too.

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::graph::{Graph, VertexId};
use crate::shortest_path::shortest_paths_from;

/// Longest shortest path from one vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Eccentricity {
    pub vertex: VertexId,
    /// Edge count of `path`.
    pub value: usize,
    /// The first longest path found, in store order of its endpoint.
    pub path: Vec<VertexId>,
}

/// Eccentricity of `source` over the vertices it can reach.
///
/// Unreachable vertices are ignored. An isolated vertex has eccentricity 0
/// and the one-vertex path `[source]`.
pub fn eccentricity(graph: &Graph, source: VertexId) -> Result<Eccentricity> {
    let paths = shortest_paths_from(graph, source)?;

    let mut longest = vec![source];
    for vertex in graph.vertices() {
        if let Some(path) = paths.path_to(vertex) {
            if path.len() > longest.len() {
                longest = path;
            }
        }
    }

    Ok(Eccentricity {
        vertex: source,
        value: longest.len() - 1,
        path: longest,
    })
}

fn all_eccentricities(graph: &Graph) -> Vec<(VertexId, usize)> {
    graph
        .vertices()
        .filter_map(|v| eccentricity(graph, v).ok().map(|e| (v, e.value)))
        .collect()
}

/// Minimum eccentricity over all vertices, `None` for an empty graph.
pub fn radius(graph: &Graph) -> Option<usize> {
    let radius = all_eccentricities(graph).into_iter().map(|(_, e)| e).min();
    debug!(vertices = graph.vertex_count(), ?radius, "graph radius");
    radius
}

/// Vertices whose eccentricity equals the radius, in store order.
pub fn center(graph: &Graph) -> Vec<VertexId> {
    let all = all_eccentricities(graph);
    let Some(radius) = all.iter().map(|&(_, e)| e).min() else {
        return Vec::new();
    };
    all.into_iter()
        .filter(|&(_, e)| e == radius)
        .map(|(v, _)| v)
        .collect()
}
