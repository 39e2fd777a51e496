//! Strongly connected components.

use anyhow::Result;
use graph_tasks_core::strongly_connected_components;

use crate::config::Settings;
use crate::load::LoadedGraph;
use crate::output;
use crate::OutputFormat;

/// Run the components command.
pub fn run(loaded: &LoadedGraph, settings: &Settings) -> Result<()> {
    let components = strongly_connected_components(&loaded.graph);

    match settings.format {
        OutputFormat::Json => output::print_json(&components, settings.quiet),
        OutputFormat::Table => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["Component", "Size", "Vertices"]);
            for (i, component) in components.iter().enumerate() {
                table.add_row(vec![
                    (i + 1).to_string(),
                    component.len().to_string(),
                    output::vertex_list(component),
                ]);
            }
            output::print_table(&table, settings.quiet);
            Ok(())
        }
    }
}
