//! Graph summary and adjacency listing.

use anyhow::Result;
use graph_tasks_core::{Edge, Graph, VertexId};
use serde::Serialize;

use crate::config::Settings;
use crate::load::LoadedGraph;
use crate::output;
use crate::OutputFormat;

#[derive(Serialize)]
struct AdjacencyEntry<'a> {
    vertex: VertexId,
    edges: &'a [Edge],
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    source: String,
    directed: bool,
    weighted: bool,
    vertex_count: usize,
    edge_count: usize,
    memory_bytes: usize,
    load_time_ms: f64,
    adjacency: Vec<AdjacencyEntry<'a>>,
}

/// Run the show command.
pub fn run(loaded: &LoadedGraph, settings: &Settings) -> Result<()> {
    let graph = &loaded.graph;
    match settings.format {
        OutputFormat::Json => {
            let out = ShowOutput {
                source: loaded.source.display().to_string(),
                directed: graph.is_directed(),
                weighted: graph.is_weighted(),
                vertex_count: graph.vertex_count(),
                edge_count: graph.edge_count(),
                memory_bytes: graph.memory_usage(),
                load_time_ms: loaded.load_time_ms,
                adjacency: adjacency(graph),
            };
            output::print_json(&out, settings.quiet)
        }
        OutputFormat::Table => {
            let items = vec![
                ("Source", loaded.source.display().to_string()),
                ("Directed", graph.is_directed().to_string()),
                ("Weighted", graph.is_weighted().to_string()),
                ("Vertices", graph.vertex_count().to_string()),
                ("Edges", graph.edge_count().to_string()),
                ("Memory", format!("{} bytes", graph.memory_usage())),
                ("Load Time", format!("{:.3} ms", loaded.load_time_ms)),
            ];
            output::print_key_value_table(&items, settings.format, settings.quiet)?;
            print_adjacency(graph, settings.quiet);
            Ok(())
        }
    }
}

fn adjacency(graph: &Graph) -> Vec<AdjacencyEntry<'_>> {
    graph
        .vertices()
        .map(|vertex| AdjacencyEntry {
            vertex,
            edges: graph.neighbors(vertex),
        })
        .collect()
}

/// Print a graph in its `v - a b c` text form.
pub fn print_adjacency(graph: &Graph, quiet: bool) {
    if !quiet {
        print!("{graph}");
    }
}

/// Print a graph in the selected format: text adjacency or JSON edge lists.
pub fn print_graph(graph: &Graph, settings: &Settings) -> Result<()> {
    match settings.format {
        OutputFormat::Json => output::print_json(&adjacency(graph), settings.quiet),
        OutputFormat::Table => {
            print_adjacency(graph, settings.quiet);
            Ok(())
        }
    }
}
