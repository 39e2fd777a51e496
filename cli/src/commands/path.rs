//! Single-source shortest paths.

use anyhow::Result;
use graph_tasks_core::{bellman_ford, shortest_paths_from, PathReport, VertexId};
use serde::Serialize;

use crate::config::Settings;
use crate::load::LoadedGraph;
use crate::output;
use crate::{OutputFormat, PathAlgorithm};

#[derive(Serialize)]
struct PathOutput {
    source: VertexId,
    algorithm: &'static str,
    rounds: usize,
    paths: Vec<PathReport>,
}

/// Run the path command. Without `targets`, every vertex is reported.
pub fn run(
    loaded: &LoadedGraph,
    from: VertexId,
    targets: &[VertexId],
    algorithm: PathAlgorithm,
    settings: &Settings,
) -> Result<()> {
    let graph = &loaded.graph;
    let (paths, name) = match algorithm {
        PathAlgorithm::Relax => (shortest_paths_from(graph, from)?, "relax"),
        PathAlgorithm::BellmanFord => (bellman_ford(graph, from)?, "bellman-ford"),
    };

    let reports: Vec<PathReport> = if targets.is_empty() {
        graph.vertices().map(|v| paths.report(v)).collect()
    } else {
        targets.iter().map(|&v| paths.report(v)).collect()
    };

    match settings.format {
        OutputFormat::Json => output::print_json(
            &PathOutput {
                source: from,
                algorithm: name,
                rounds: paths.rounds(),
                paths: reports,
            },
            settings.quiet,
        ),
        OutputFormat::Table => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["Target", "Distance", "Path"]);
            for r in &reports {
                table.add_row(vec![
                    r.target.to_string(),
                    output::distance(r.total_weight),
                    r.path
                        .as_deref()
                        .map(output::path)
                        .unwrap_or_else(|| "no path".to_string()),
                ]);
            }
            output::print_table(&table, settings.quiet);
            Ok(())
        }
    }
}
