//! Adjacency description parser.
//!
//! One line per vertex: `vertex neighbor*` for unweighted graphs, or
//! `vertex (neighbor weight)*` for weighted ones. Blank lines are skipped.

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId, Weight};

struct AdjacencyLine {
    vertex: VertexId,
    neighbors: Vec<(VertexId, Weight)>,
}

/// Build a graph from adjacency description lines.
///
/// Line heads become vertices in line order. Neighbors that never appear as
/// a head are registered afterwards in first-mention order, so the result has
/// no dangling edges. Edges go through [`Graph::add_edge`]: undirected input
/// is symmetrised and duplicates are dropped.
pub fn parse_adjacency<I, S>(lines: I, directed: bool, weighted: bool) -> Result<Graph>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = Vec::new();
    for (idx, line) in lines.into_iter().enumerate() {
        if let Some(entry) = parse_line(line.as_ref(), idx + 1, weighted)? {
            parsed.push(entry);
        }
    }

    let mut graph = Graph::with_capacity(parsed.len(), directed, weighted);
    for entry in &parsed {
        graph.add_vertex(entry.vertex);
    }
    for entry in &parsed {
        for &(to, _) in &entry.neighbors {
            graph.add_vertex(to);
        }
    }
    for entry in &parsed {
        for &(to, weight) in &entry.neighbors {
            graph.add_edge(entry.vertex, to, weight)?;
        }
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        directed,
        weighted,
        "parsed adjacency description"
    );
    Ok(graph)
}

fn parse_line(line: &str, line_no: usize, weighted: bool) -> Result<Option<AdjacencyLine>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((head, rest)) = tokens.split_first() else {
        return Ok(None);
    };
    let vertex = parse_token::<VertexId>(head, line_no)?;

    let neighbors = if weighted {
        if rest.len() % 2 != 0 {
            return Err(GraphError::Parse {
                line: line_no,
                message: format!(
                    "neighbor {} has no weight",
                    rest.last().copied().unwrap_or_default()
                ),
            });
        }
        rest.chunks_exact(2)
            .map(|pair| {
                Ok((
                    parse_token::<VertexId>(pair[0], line_no)?,
                    parse_token::<Weight>(pair[1], line_no)?,
                ))
            })
            .collect::<Result<Vec<_>>>()?
    } else {
        rest.iter()
            .map(|tok| Ok((parse_token::<VertexId>(tok, line_no)?, 0)))
            .collect::<Result<Vec<_>>>()?
    };

    Ok(Some(AdjacencyLine { vertex, neighbors }))
}

fn parse_token<T: std::str::FromStr>(token: &str, line_no: usize) -> Result<T> {
    token.parse::<T>().map_err(|_| GraphError::Parse {
        line: line_no,
        message: format!("'{}' is not an integer", token),
    })
}
