//! Eccentricity, radius and center.

use anyhow::Result;
use graph_tasks_core::{center, eccentricity, radius, VertexId};
use serde::Serialize;

use crate::config::Settings;
use crate::load::LoadedGraph;
use crate::output;
use crate::OutputFormat;

#[derive(Serialize)]
struct GraphMetrics {
    radius: Option<usize>,
    center: Vec<VertexId>,
}

/// Run the metrics command.
pub fn run(loaded: &LoadedGraph, vertex: Option<VertexId>, settings: &Settings) -> Result<()> {
    let graph = &loaded.graph;

    if let Some(v) = vertex {
        let ecc = eccentricity(graph, v)?;
        return match settings.format {
            OutputFormat::Json => output::print_json(&ecc, settings.quiet),
            OutputFormat::Table => output::print_key_value_table(
                &[
                    ("Vertex", ecc.vertex.to_string()),
                    ("Eccentricity", ecc.value.to_string()),
                    ("Path", output::path(&ecc.path)),
                ],
                settings.format,
                settings.quiet,
            ),
        };
    }

    let metrics = GraphMetrics {
        radius: radius(graph),
        center: center(graph),
    };
    match settings.format {
        OutputFormat::Json => output::print_json(&metrics, settings.quiet),
        OutputFormat::Table => output::print_key_value_table(
            &[
                (
                    "Radius",
                    metrics
                        .radius
                        .map_or_else(|| "n/a".to_string(), |r| r.to_string()),
                ),
                ("Center", output::vertex_list(&metrics.center)),
            ],
            settings.format,
            settings.quiet,
        ),
    }
}
