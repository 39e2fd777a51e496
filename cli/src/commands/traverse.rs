//! BFS / DFS visitation order.

use anyhow::Result;
use graph_tasks_core::{bfs, dfs, DfsStrategy, VertexId};
use serde::Serialize;
use tracing::warn;

use crate::config::Settings;
use crate::load::LoadedGraph;
use crate::output;
use crate::{OutputFormat, StrategyArg, TraversalOrder};

#[derive(Serialize)]
struct TraversalOutput {
    order: &'static str,
    from: VertexId,
    visited: Vec<VertexId>,
}

impl From<StrategyArg> for DfsStrategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::Path => DfsStrategy::PathFollowing,
            StrategyArg::Full => DfsStrategy::Full,
        }
    }
}

/// Run the traverse command.
pub fn run(
    loaded: &LoadedGraph,
    order: TraversalOrder,
    from: VertexId,
    strategy: StrategyArg,
    settings: &Settings,
) -> Result<()> {
    let graph = &loaded.graph;
    if !graph.contains_vertex(from) {
        warn!(from, "root vertex is not in the graph, nothing to visit");
    }

    let mut visited = Vec::new();
    let name = match order {
        TraversalOrder::Bfs => {
            bfs(graph, from, |v| visited.push(v));
            "bfs"
        }
        TraversalOrder::Dfs => {
            dfs(graph, from, strategy.into(), |v| visited.push(v));
            "dfs"
        }
    };

    match settings.format {
        OutputFormat::Json => output::print_json(
            &TraversalOutput {
                order: name,
                from,
                visited,
            },
            settings.quiet,
        ),
        OutputFormat::Table => {
            output::status(&output::vertex_list(&visited), settings.quiet);
            Ok(())
        }
    }
}
