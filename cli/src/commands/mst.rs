//! Minimum spanning tree.

use anyhow::{anyhow, Result};
use graph_tasks_core::{prim, prim_ordered_edges, Edge, GraphError, VertexId};

use crate::commands::show;
use crate::config::Settings;
use crate::load::LoadedGraph;
use crate::output;
use crate::OutputFormat;

/// Run the mst command: the tree itself, or with `ordered` the edges in
/// the order they were selected.
pub fn run(loaded: &LoadedGraph, from: VertexId, ordered: bool, settings: &Settings) -> Result<()> {
    let graph = &loaded.graph;

    if !ordered {
        let tree = prim(graph, from).map_err(explain)?;
        return show::print_graph(&tree, settings);
    }

    let edges = prim_ordered_edges(graph, from).map_err(explain)?;
    match settings.format {
        OutputFormat::Json => output::print_json(&edges, settings.quiet),
        OutputFormat::Table => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["Step", "From", "To", "Weight"]);
            for (i, e) in edges.iter().enumerate() {
                table.add_row(vec![
                    (i + 1).to_string(),
                    e.from.to_string(),
                    e.to.to_string(),
                    e.weight.to_string(),
                ]);
            }
            output::print_table(&table, settings.quiet);
            output::status(&format!("Total weight: {}", total_weight(&edges)), settings.quiet);
            Ok(())
        }
    }
}

fn explain(err: GraphError) -> anyhow::Error {
    match err {
        GraphError::NotWeighted => anyhow!("minimum spanning tree needs a weighted graph: pass --weighted"),
        other => other.into(),
    }
}

/// Sum of edge weights, clamped at the `i64` range.
fn total_weight(edges: &[Edge]) -> i64 {
    edges.iter().fold(0, |acc, e| acc.saturating_add(e.weight))
}
