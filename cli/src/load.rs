use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use graph_tasks_core::{parse_adjacency, Graph};
use tracing::info;

use crate::config::Settings;

/// A graph read from disk plus where and how fast it was read.
pub struct LoadedGraph {
    pub graph: Graph,
    pub source: PathBuf,
    pub load_time_ms: f64,
}

/// Load the graph named by `settings`, enforcing the memory cap.
pub fn load_graph(settings: &Settings) -> Result<LoadedGraph> {
    let start = Instant::now();
    let graph = read_graph(&settings.graph, settings)?;
    let load_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    info!(
        path = %settings.graph.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        load_time_ms,
        "graph loaded"
    );

    Ok(LoadedGraph {
        graph,
        source: settings.graph.clone(),
        load_time_ms,
    })
}

/// Read a second graph with the same flags, for the algebra operations.
pub fn load_other(path: &Path, settings: &Settings) -> Result<Graph> {
    read_graph(path, settings)
}

fn read_graph(path: &Path, settings: &Settings) -> Result<Graph> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read graph file {}", path.display()))?;
    let graph = parse_adjacency(text.lines(), settings.directed, settings.weighted)
        .with_context(|| format!("invalid adjacency description in {}", path.display()))?;

    let memory = graph.memory_usage();
    if memory > settings.max_memory_bytes() {
        bail!(
            "graph {} uses {}MB, exceeds max memory {}MB",
            path.display(),
            memory / (1024 * 1024),
            settings.max_memory_mb
        );
    }
    Ok(graph)
}
