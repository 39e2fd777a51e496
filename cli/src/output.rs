//! Output formatting for CLI commands.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use graph_tasks_core::{VertexId, Weight};
use serde::Serialize;

use crate::OutputFormat;

/// Print `data` as pretty JSON unless quiet.
pub fn print_json<T: Serialize>(data: &T, quiet: bool) -> Result<()> {
    if !quiet {
        println!("{}", serde_json::to_string_pretty(data)?);
    }
    Ok(())
}

/// Create a styled table with consistent formatting.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.load_preset(comfy_table::presets::UTF8_FULL_CONDENSED);
    table
}

/// Add a header row to a table.
pub fn add_header(table: &mut Table, headers: &[&str]) {
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
}

/// Print a table unless quiet.
pub fn print_table(table: &Table, quiet: bool) {
    if !quiet {
        println!("{table}");
    }
}

/// Print a key-value table (for summaries).
pub fn print_key_value_table(items: &[(&str, String)], format: OutputFormat, quiet: bool) -> Result<()> {
    if quiet {
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> = items
                .iter()
                .map(|(k, v)| ((*k).to_string(), serde_json::Value::String(v.clone())))
                .collect();
            println!("{}", serde_json::to_string_pretty(&map)?);
        }
        OutputFormat::Table => {
            let mut table = create_table();
            add_header(&mut table, &["Property", "Value"]);
            for (key, value) in items {
                table.add_row(vec![Cell::new(key).fg(Color::Green), Cell::new(value)]);
            }
            println!("{table}");
        }
    }
    Ok(())
}

/// Print a status message (respects quiet mode).
pub fn status(msg: &str, quiet: bool) {
    if !quiet {
        println!("{msg}");
    }
}

/// Render a distance, with `inf` for unreachable.
pub fn distance(d: Option<Weight>) -> String {
    d.map_or_else(|| "inf".to_string(), |d| d.to_string())
}

/// Render a vertex sequence as `1 -> 2 -> 3`.
pub fn path(vertices: &[VertexId]) -> String {
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Render a vertex list as `1, 2, 3`.
pub fn vertex_list(vertices: &[VertexId]) -> String {
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
