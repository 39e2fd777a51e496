//! Union, intersection, join, inversion and the odd-vertex edge filter.

use std::path::Path;

use anyhow::{bail, Result};
use graph_tasks_core::Graph;

use crate::commands::show;
use crate::config::Settings;
use crate::load::{self, LoadedGraph};
use crate::AlgebraOp;

/// Run the algebra command and print the resulting graph.
pub fn run(
    loaded: LoadedGraph,
    op: AlgebraOp,
    other: Option<&Path>,
    settings: &Settings,
) -> Result<()> {
    let result = apply(loaded.graph, op, other, settings)?;
    show::print_graph(&result, settings)
}

fn apply(mut graph: Graph, op: AlgebraOp, other: Option<&Path>, settings: &Settings) -> Result<Graph> {
    let second = || -> Result<Graph> {
        let Some(path) = other else {
            bail!("{op:?} needs a second graph: pass --other PATH");
        };
        load::load_other(path, settings)
    };

    Ok(match op {
        AlgebraOp::Union => graph.union(&second()?),
        AlgebraOp::Intersect => graph.intersect(&second()?),
        AlgebraOp::Join => {
            graph.join(&second()?);
            graph
        }
        AlgebraOp::Invert => graph.inverted(),
        AlgebraOp::OddFilter => graph.without_odd_edges(),
    })
}
