//! All-pairs distance matrix.

use anyhow::Result;
use graph_tasks_core::{floyd_warshall, VertexId, Weight};
use serde::Serialize;

use crate::config::Settings;
use crate::load::LoadedGraph;
use crate::output;
use crate::OutputFormat;

#[derive(Serialize)]
struct MatrixOutput<'a> {
    vertices: &'a [VertexId],
    distances: Vec<&'a [Option<Weight>]>,
}

/// Run the floyd command.
pub fn run(loaded: &LoadedGraph, settings: &Settings) -> Result<()> {
    let result = floyd_warshall(&loaded.graph);

    match settings.format {
        OutputFormat::Json => output::print_json(
            &MatrixOutput {
                vertices: result.vertices(),
                distances: result.rows().collect(),
            },
            settings.quiet,
        ),
        OutputFormat::Table => {
            let mut table = output::create_table();
            let mut header = vec![String::new()];
            header.extend(result.vertices().iter().map(|v| v.to_string()));
            let header: Vec<&str> = header.iter().map(String::as_str).collect();
            output::add_header(&mut table, &header);

            for (vertex, row) in result.vertices().iter().zip(result.rows()) {
                let mut cells = vec![vertex.to_string()];
                cells.extend(row.iter().map(|&d| output::distance(d)));
                table.add_row(cells);
            }
            output::print_table(&table, settings.quiet);
            Ok(())
        }
    }
}
