//! Degree table.

use anyhow::Result;
use graph_tasks_core::{degree_ranking, GraphError, VertexId};

use crate::config::Settings;
use crate::load::LoadedGraph;
use crate::output;
use crate::OutputFormat;

/// Run the degree command.
pub fn run(
    loaded: &LoadedGraph,
    vertex: Option<VertexId>,
    top: usize,
    settings: &Settings,
) -> Result<()> {
    let graph = &loaded.graph;
    let mut rows = degree_ranking(graph, if vertex.is_some() { 0 } else { top });
    if let Some(v) = vertex {
        rows.retain(|r| r.vertex == v);
        if rows.is_empty() {
            return Err(GraphError::MissingVertex(v).into());
        }
    }

    match settings.format {
        OutputFormat::Json => output::print_json(&rows, settings.quiet),
        OutputFormat::Table => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["Vertex", "Out", "In", "Total"]);
            for r in &rows {
                table.add_row(vec![
                    r.vertex.to_string(),
                    r.out_degree.to_string(),
                    r.in_degree.to_string(),
                    r.total_degree.to_string(),
                ]);
            }
            output::print_table(&table, settings.quiet);
            Ok(())
        }
    }
}
