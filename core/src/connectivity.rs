use tracing::debug;

use crate::graph::{Graph, VertexId};
use crate::traversal::{dfs_with_finish_times, TraversalContext};

/// Kosaraju's algorithm, emitting each strongly connected component to
/// `handler` as soon as it is complete.
///
/// Pass one runs a finish-time DFS from every unvisited vertex in store
/// order. Pass two walks vertices by descending finish time and collects,
/// on the inverted graph, everything not yet claimed. Components are
/// reported in that order, each in discovery order.
pub fn visit_strongly_connected_components<F>(graph: &Graph, mut handler: F)
where
    F: FnMut(&[VertexId]),
{
    let mut ctx = TraversalContext::new();
    for vertex in graph.vertices() {
        if !ctx.is_visited(vertex) {
            dfs_with_finish_times(graph, vertex, &mut ctx, |_| {});
        }
    }

    let inverted = graph.inverted();
    let mut claim = TraversalContext::new();
    let mut count = 0usize;
    let mut component = Vec::new();

    for &vertex in ctx.finish_order().iter().rev() {
        if claim.is_visited(vertex) {
            continue;
        }
        component.clear();
        dfs_with_finish_times(&inverted, vertex, &mut claim, |v| component.push(v));
        handler(&component);
        count += 1;
    }

    debug!(
        vertices = graph.vertex_count(),
        components = count,
        "strongly connected components"
    );
}

/// Strongly connected components, in the order
/// [`visit_strongly_connected_components`] emits them.
pub fn strongly_connected_components(graph: &Graph) -> Vec<Vec<VertexId>> {
    let mut components = Vec::new();
    visit_strongly_connected_components(graph, |c| components.push(c.to_vec()));
    components
}
