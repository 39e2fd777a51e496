//! Single-source and all-pairs shortest paths.
//!
//! Distances are `Option<Weight>`: `None` stands for +∞ (unreachable), which
//! is an ordinary result, not an error. All arrays are indexed through
//! [`DenseIndex`], so vertex ids do not have to be contiguous.

use std::collections::VecDeque;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph, VertexId, Weight};
use crate::index::DenseIndex;

/// Distances and predecessor links from one source vertex.
///
/// The source is its own predecessor; path reconstruction stops there.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: VertexId,
    index: DenseIndex,
    distances: Vec<Option<Weight>>,
    predecessors: Vec<Option<usize>>,
    rounds: usize,
}

/// Path and total weight to one destination. Both `None` means "no path".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    pub target: VertexId,
    pub path: Option<Vec<VertexId>>,
    pub total_weight: Option<Weight>,
}

impl ShortestPaths {
    fn start(graph: &Graph, source: VertexId) -> Result<Self> {
        let index = DenseIndex::new(graph);
        let src = index
            .slot(source)
            .ok_or(GraphError::MissingVertex(source))?;
        let n = index.len();

        let mut distances = vec![None; n];
        let mut predecessors = vec![None; n];
        distances[src] = Some(0);
        predecessors[src] = Some(src);

        Ok(Self {
            source,
            index,
            distances,
            predecessors,
            rounds: 0,
        })
    }

    /// Relax one edge. Returns true if `edge.to` got a shorter distance.
    fn relax(&mut self, edge: &Edge) -> bool {
        let (Some(from), Some(to)) = (self.index.slot(edge.from), self.index.slot(edge.to)) else {
            return false;
        };
        let Some(base) = self.distances[from] else {
            return false;
        };

        let candidate = base.saturating_add(edge.weight);
        if self.distances[to].map_or(true, |current| candidate < current) {
            self.distances[to] = Some(candidate);
            self.predecessors[to] = Some(from);
            true
        } else {
            false
        }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Shortest known distance, `None` if unreachable or not in the graph.
    pub fn distance(&self, vertex: VertexId) -> Option<Weight> {
        self.distances[self.index.slot(vertex)?]
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_some()
    }

    /// Predecessor on the shortest path. The source maps to itself.
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors[self.index.slot(vertex)?].map(|slot| self.index.id(slot))
    }

    /// Every vertex with its distance, in store order.
    pub fn distances(&self) -> impl Iterator<Item = (VertexId, Option<Weight>)> + '_ {
        self.index
            .ids()
            .iter()
            .copied()
            .zip(self.distances.iter().copied())
    }

    /// Relaxation rounds performed. Only meaningful for [`bellman_ford`].
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Walk predecessors from `target` back to the source and call
    /// `visitor` for each vertex in source → target order.
    ///
    /// Returns false, without calling the visitor, when `target` is
    /// unreachable or its predecessor chain does not lead back to the source.
    pub fn visit_path<F: FnMut(VertexId)>(&self, target: VertexId, mut visitor: F) -> bool {
        let Some(mut slot) = self.index.slot(target) else {
            return false;
        };
        if self.distances[slot].is_none() {
            return false;
        }

        let Some(src) = self.index.slot(self.source) else {
            return false;
        };

        let mut chain = vec![slot];
        while slot != src {
            let Some(parent) = self.predecessors[slot] else {
                return false;
            };
            // only the source may be its own predecessor
            if parent == slot {
                return false;
            }
            // A chain longer than the vertex count has looped
            if chain.len() > self.index.len() {
                return false;
            }
            chain.push(parent);
            slot = parent;
        }

        for &slot in chain.iter().rev() {
            visitor(self.index.id(slot));
        }
        true
    }

    /// Vertices from the source to `target`, both included.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        let mut path = Vec::new();
        self.visit_path(target, |v| path.push(v)).then_some(path)
    }

    pub fn report(&self, target: VertexId) -> PathReport {
        match self.path_to(target) {
            Some(path) => PathReport {
                target,
                path: Some(path),
                total_weight: self.distance(target),
            },
            None => PathReport {
                target,
                path: None,
                total_weight: None,
            },
        }
    }
}

/// Single-source relaxation over a FIFO queue of edges.
///
/// The queue starts with the source's outgoing edges. Each popped edge is
/// relaxed; on success every outgoing edge of its target is enqueued. There
/// is no priority ordering: this is label-correcting, not Dijkstra, and a
/// vertex may be improved several times. Each vertex also tracks the edge
/// count of its current best path; a path of `|V|` or more edges repeats a
/// vertex, which only a negative cycle can make cheaper, so such a vertex is
/// not expanded further.
pub fn shortest_paths_from(graph: &Graph, source: VertexId) -> Result<ShortestPaths> {
    let mut paths = ShortestPaths::start(graph, source)?;
    let n = paths.index.len();
    let mut hops = vec![0usize; n];
    let mut relaxations = 0usize;
    let mut cycle_reported = false;

    let mut queue: VecDeque<&Edge> = graph.neighbors(source).iter().collect();

    while let Some(edge) = queue.pop_front() {
        if !paths.relax(edge) {
            continue;
        }
        relaxations += 1;

        let (Some(from), Some(to)) = (paths.index.slot(edge.from), paths.index.slot(edge.to)) else {
            continue;
        };
        hops[to] = hops[from] + 1;
        if hops[to] >= n {
            if !cycle_reported {
                warn!(
                    vertex = edge.to,
                    source, "negative cycle reached; not expanding its vertices further"
                );
                cycle_reported = true;
            }
            continue;
        }
        queue.extend(graph.neighbors(edge.to));
    }

    debug!(source, relaxations, "single-source relaxation finished");
    Ok(paths)
}

/// Bellman-Ford from `source`.
///
/// Runs at most `|V|` rounds over all edges and stops early after a round
/// that relaxes nothing. Negative cycles are not reported; whatever the last
/// round left is the result.
pub fn bellman_ford(graph: &Graph, source: VertexId) -> Result<ShortestPaths> {
    let mut paths = ShortestPaths::start(graph, source)?;
    let n = paths.index.len();

    for round in 1..=n {
        let mut changed = false;
        for edge in graph.edges() {
            changed |= paths.relax(edge);
        }
        paths.rounds = round;
        if !changed {
            break;
        }
    }

    debug!(source, rounds = paths.rounds, "bellman-ford finished");
    Ok(paths)
}

/// All-pairs distances and intermediate vertices from Floyd-Warshall.
#[derive(Debug, Clone)]
pub struct FloydWarshall {
    index: DenseIndex,
    distances: Vec<Option<Weight>>,
    intermediates: Vec<Option<usize>>,
}

impl FloydWarshall {
    fn cell(&self, from: VertexId, to: VertexId) -> Option<usize> {
        let n = self.index.len();
        Some(self.index.slot(from)? * n + self.index.slot(to)?)
    }

    /// Vertices in matrix order.
    pub fn vertices(&self) -> &[VertexId] {
        self.index.ids()
    }

    /// Shortest distance, `None` for +∞ or an unknown vertex.
    pub fn distance(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        self.distances[self.cell(from, to)?]
    }

    /// Highest-numbered intermediate vertex on the shortest path, if any.
    pub fn intermediate(&self, from: VertexId, to: VertexId) -> Option<VertexId> {
        self.intermediates[self.cell(from, to)?].map(|slot| self.index.id(slot))
    }

    /// Full vertex sequence from `from` to `to`, both included.
    pub fn path(&self, from: VertexId, to: VertexId) -> Option<Vec<VertexId>> {
        self.distance(from, to)?;
        let (i, j) = (self.index.slot(from)?, self.index.slot(to)?);

        let mut path = vec![from];
        if i != j {
            let mut budget = self.index.len();
            if !self.expand(i, j, &mut path, &mut budget) {
                return None;
            }
            path.push(to);
        }
        Some(path)
    }

    fn expand(&self, i: usize, j: usize, path: &mut Vec<VertexId>, budget: &mut usize) -> bool {
        let n = self.index.len();
        let Some(k) = self.intermediates[i * n + j] else {
            return true;
        };
        if *budget == 0 {
            return false;
        }
        *budget -= 1;

        if !self.expand(i, k, path, budget) {
            return false;
        }
        path.push(self.index.id(k));
        self.expand(k, j, path, budget)
    }

    /// Distance matrix rows in [`FloydWarshall::vertices`] order.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Weight>]> {
        self.distances.chunks(self.index.len().max(1))
    }
}

/// Floyd-Warshall all-pairs shortest paths, O(V³).
///
/// Seeded with 0 on the diagonal and direct edge weights (the smaller one
/// when a self-loop competes with the diagonal); everything else is +∞.
pub fn floyd_warshall(graph: &Graph) -> FloydWarshall {
    let index = DenseIndex::new(graph);
    let n = index.len();

    let mut distances: Vec<Option<Weight>> = vec![None; n * n];
    let intermediates: Vec<Option<usize>> = vec![None; n * n];

    for i in 0..n {
        distances[i * n + i] = Some(0);
    }
    for edge in graph.edges() {
        if let (Some(i), Some(j)) = (index.slot(edge.from), index.slot(edge.to)) {
            let cell = &mut distances[i * n + j];
            if cell.map_or(true, |d| edge.weight < d) {
                *cell = Some(edge.weight);
            }
        }
    }

    let mut result = FloydWarshall {
        index,
        distances,
        intermediates,
    };

    for k in 0..n {
        for i in 0..n {
            let Some(ik) = result.distances[i * n + k] else {
                continue;
            };
            for j in 0..n {
                let Some(kj) = result.distances[k * n + j] else {
                    continue;
                };
                let candidate = ik.saturating_add(kj);
                if result.distances[i * n + j].map_or(true, |d| candidate < d) {
                    result.distances[i * n + j] = Some(candidate);
                    result.intermediates[i * n + j] = Some(k);
                }
            }
        }
    }

    debug!(vertices = n, "floyd-warshall finished");
    result
}
