//! Apply store mutations from the command line.

use anyhow::{Context, Result};
use graph_tasks_core::{Graph, VertexId};
use tracing::debug;

use crate::commands::show;
use crate::config::Settings;
use crate::load::LoadedGraph;
use crate::util::EdgeSpec;

/// Mutations, applied in field order.
#[derive(Debug, Default)]
pub struct Edits {
    pub add_vertex: Vec<VertexId>,
    pub remove_vertex: Vec<VertexId>,
    pub add_edge: Vec<EdgeSpec>,
    pub remove_edge: Vec<EdgeSpec>,
}

/// Run the edit command and print the mutated graph.
pub fn run(loaded: LoadedGraph, edits: &Edits, settings: &Settings) -> Result<()> {
    let mut graph = loaded.graph;
    apply(&mut graph, edits)?;
    show::print_graph(&graph, settings)
}

fn apply(graph: &mut Graph, edits: &Edits) -> Result<()> {
    for &v in &edits.add_vertex {
        graph.add_vertex(v);
    }
    for &v in &edits.remove_vertex {
        graph.remove_vertex(v);
    }
    for e in &edits.add_edge {
        graph
            .add_edge(e.from, e.to, e.weight)
            .with_context(|| format!("cannot add edge {}:{}", e.from, e.to))?;
    }
    for e in &edits.remove_edge {
        graph
            .remove_edge(e.from, e.to)
            .with_context(|| format!("cannot remove edge {}:{}", e.from, e.to))?;
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "edits applied"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(from: VertexId, to: VertexId, weight: i64) -> EdgeSpec {
        EdgeSpec { from, to, weight }
    }

    #[test]
    fn test_edits_apply_in_order() {
        let mut g = Graph::new(false, true);
        let edits = Edits {
            add_vertex: vec![1, 2, 3],
            remove_vertex: vec![3],
            add_edge: vec![edge(1, 2, 4)],
            remove_edge: vec![],
        };
        apply(&mut g, &edits).unwrap();
        assert_eq!(g.vertices().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(g.edge(2, 1).map(|e| e.weight), Some(4));
    }

    #[test]
    fn test_edit_edge_to_removed_vertex_fails() {
        let mut g = Graph::new(true, false);
        let edits = Edits {
            add_vertex: vec![1, 2],
            remove_vertex: vec![2],
            add_edge: vec![edge(1, 2, 0)],
            remove_edge: vec![],
        };
        let err = apply(&mut g, &edits).unwrap_err();
        assert!(format!("{err:#}").contains("vertex 2 is not in the graph"));
    }

    #[test]
    fn test_remove_absent_edge_is_noop() {
        let mut g = Graph::new(true, false);
        let edits = Edits {
            add_vertex: vec![1, 2],
            remove_edge: vec![edge(1, 2, 0)],
            ..Edits::default()
        };
        apply(&mut g, &edits).unwrap();
        assert_eq!(g.edge_count(), 0);
    }
}
