use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{GraphError, Result};

/// Caller-chosen vertex identifier. Identifiers need not be contiguous.
pub type VertexId = u64;

/// Edge weight. Unweighted graphs carry 0 on every edge.
pub type Weight = i64;

/// A directed edge record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: VertexId, to: VertexId, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// The same edge pointing the other way.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }
}

/// In-memory adjacency store: vertex → ordered list of outgoing edges.
///
/// Undirected graphs keep the reciprocal edge explicitly, so `u→v` present
/// implies `v→u` present with the same weight. Vertices iterate in insertion
/// order, which is the order every algorithm in this crate walks them.
///
/// A `Graph` is not synchronised. Callers own an instance exclusively for
/// the duration of a call sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    pub(crate) adjacency: IndexMap<VertexId, Vec<Edge>>,
    pub(crate) directed: bool,
    pub(crate) weighted: bool,
}

impl Graph {
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self {
            adjacency: IndexMap::new(),
            directed,
            weighted,
        }
    }

    /// Pre-allocate for a known vertex count.
    pub fn with_capacity(vertex_count: usize, directed: bool, weighted: bool) -> Self {
        Self {
            adjacency: IndexMap::with_capacity(vertex_count),
            directed,
            weighted,
        }
    }

    /// Undirected, unweighted complete graph on vertices `1..=count`.
    pub fn complete(count: u64) -> Self {
        let mut adjacency = IndexMap::with_capacity(count as usize);
        for i in 1..=count {
            let edges = (1..=count)
                .filter(|&j| j != i)
                .map(|j| Edge::new(i, j, 0))
                .collect();
            adjacency.insert(i, edges);
        }
        Self {
            adjacency,
            directed: false,
            weighted: false,
        }
    }

    pub(crate) fn from_adjacency(
        adjacency: IndexMap<VertexId, Vec<Edge>>,
        directed: bool,
        weighted: bool,
    ) -> Self {
        Self {
            adjacency,
            directed,
            weighted,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored edge records. An undirected edge counts twice.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|v| v.len()).sum()
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.adjacency.contains_key(&id)
    }

    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.edge(from, to).is_some()
    }

    pub fn edge(&self, from: VertexId, to: VertexId) -> Option<&Edge> {
        self.adjacency.get(&from)?.iter().find(|e| e.to == to)
    }

    /// Outgoing edges of a vertex, empty for an absent one.
    pub fn neighbors(&self, id: VertexId) -> &[Edge] {
        self.adjacency
            .get(&id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Every edge, flattened in store order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.adjacency.values().flatten()
    }

    /// Register a vertex. No-op if it already exists.
    pub fn add_vertex(&mut self, id: VertexId) {
        self.adjacency.entry(id).or_default();
    }

    /// Remove a vertex and every edge pointing at it. No-op if absent.
    pub fn remove_vertex(&mut self, id: VertexId) {
        if self.adjacency.shift_remove(&id).is_none() {
            return;
        }
        for edges in self.adjacency.values_mut() {
            edges.retain(|e| e.to != id);
        }
    }

    /// Add `from→to`. No-op if that edge already exists.
    ///
    /// Undirected graphs also get `to→from` unless it is already present.
    /// The weight is dropped to 0 on unweighted graphs.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()> {
        if !self.adjacency.contains_key(&from) {
            return Err(GraphError::MissingVertex(from));
        }
        if !self.adjacency.contains_key(&to) {
            return Err(GraphError::MissingVertex(to));
        }
        let weight = if self.weighted { weight } else { 0 };

        let out = self.adjacency.entry(from).or_default();
        if out.iter().any(|e| e.to == to) {
            return Ok(());
        }
        out.push(Edge::new(from, to, weight));

        if !self.directed {
            let back = self.adjacency.entry(to).or_default();
            if !back.iter().any(|e| e.to == from) {
                back.push(Edge::new(to, from, weight));
            }
        }
        Ok(())
    }

    /// Remove `from→to` (and `to→from` when undirected). No-op if absent.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        let out = self
            .adjacency
            .get_mut(&from)
            .ok_or(GraphError::MissingVertex(from))?;
        let before = out.len();
        out.retain(|e| e.to != to);
        if out.len() == before {
            return Ok(());
        }

        if !self.directed {
            if let Some(back) = self.adjacency.get_mut(&to) {
                back.retain(|e| e.to != from);
            }
        }
        Ok(())
    }

    pub fn outdegree(&self, id: VertexId) -> Result<usize> {
        self.adjacency
            .get(&id)
            .map(|edges| edges.len())
            .ok_or(GraphError::MissingVertex(id))
    }

    /// Number of edges pointing at `id`. Scans every adjacency list.
    pub fn indegree(&self, id: VertexId) -> Result<usize> {
        if !self.adjacency.contains_key(&id) {
            return Err(GraphError::MissingVertex(id));
        }
        Ok(self.edges().filter(|e| e.to == id).count())
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let keys = self.adjacency.len() * (size_of::<VertexId>() + size_of::<Vec<Edge>>() + 16);
        let edges: usize = self
            .adjacency
            .values()
            .map(|v| v.capacity() * size_of::<Edge>())
            .sum();

        keys + edges
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(false, false)
    }
}

/// One line per vertex: `v - a b c`, or `v - a(w) b(w)` when weighted.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, edges) in &self.adjacency {
            write!(f, "{} -", vertex)?;
            for edge in edges {
                if self.weighted {
                    write!(f, " {}({})", edge.to, edge.weight)?;
                } else {
                    write!(f, " {}", edge.to)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn undirected(n: u64) -> Graph {
        let mut g = Graph::new(false, true);
        for v in 1..=n {
            g.add_vertex(v);
        }
        g
    }

    #[test]
    fn test_add_vertex_idempotent() {
        let mut g = Graph::new(true, false);
        g.add_vertex(7);
        g.add_vertex(7);
        assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn test_add_edge_undirected_mirrors() {
        let mut g = undirected(2);
        g.add_edge(1, 2, 4).unwrap();
        assert_eq!(g.edge(1, 2).unwrap().weight, 4);
        assert_eq!(g.edge(2, 1).unwrap().weight, 4);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_add_edge_duplicate_is_noop() {
        let mut g = undirected(2);
        g.add_edge(1, 2, 4).unwrap();
        g.add_edge(1, 2, 9).unwrap();
        g.add_edge(2, 1, 9).unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.edge(2, 1).unwrap().weight, 4);
    }

    #[test]
    fn test_add_edge_directed_no_mirror() {
        let mut g = Graph::new(true, true);
        g.add_vertex(1);
        g.add_vertex(2);
        g.add_edge(1, 2, 3).unwrap();
        assert!(g.has_edge(1, 2));
        assert!(!g.has_edge(2, 1));
    }

    #[test]
    fn test_unweighted_drops_weight() {
        let mut g = Graph::new(true, false);
        g.add_vertex(1);
        g.add_vertex(2);
        g.add_edge(1, 2, 42).unwrap();
        assert_eq!(g.edge(1, 2).unwrap().weight, 0);
    }

    #[test]
    fn test_add_edge_missing_vertex() {
        let mut g = undirected(1);
        assert_eq!(g.add_edge(5, 1, 0), Err(GraphError::MissingVertex(5)));
        assert_eq!(g.add_edge(1, 5, 0), Err(GraphError::MissingVertex(5)));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_undirected_self_loop_stored_once() {
        let mut g = undirected(1);
        g.add_edge(1, 1, 2).unwrap();
        assert_eq!(g.neighbors(1).len(), 1);
    }

    #[test]
    fn test_remove_edge_undirected() {
        let mut g = undirected(3);
        g.add_edge(1, 2, 1).unwrap();
        g.add_edge(2, 3, 1).unwrap();
        g.remove_edge(2, 1).unwrap();
        assert!(!g.has_edge(1, 2));
        assert!(!g.has_edge(2, 1));
        assert!(g.has_edge(3, 2));
    }

    #[test]
    fn test_remove_edge_absent_is_noop() {
        let mut g = undirected(2);
        g.remove_edge(1, 2).unwrap();
        g.remove_edge(1, 99).unwrap();
        assert_eq!(g.remove_edge(99, 1), Err(GraphError::MissingVertex(99)));
    }

    #[test]
    fn test_remove_vertex_cascades() {
        let mut g = Graph::complete(4);
        g.remove_vertex(2);
        assert!(!g.contains_vertex(2));
        assert!(g.edges().all(|e| e.from != 2 && e.to != 2));
        assert_eq!(g.vertices().collect::<Vec<_>>(), vec![1, 3, 4]);
    }

    #[test]
    fn test_remove_vertex_absent_is_noop() {
        let mut g = Graph::complete(3);
        let before = g.clone();
        g.remove_vertex(10);
        assert_eq!(g, before);
    }

    #[test]
    fn test_degrees() {
        let mut g = Graph::new(true, false);
        for v in 1..=3 {
            g.add_vertex(v);
        }
        g.add_edge(1, 3, 0).unwrap();
        g.add_edge(2, 3, 0).unwrap();
        assert_eq!(g.outdegree(1), Ok(1));
        assert_eq!(g.outdegree(3), Ok(0));
        assert_eq!(g.indegree(3), Ok(2));
        assert_eq!(g.indegree(1), Ok(0));
        assert_eq!(g.indegree(9), Err(GraphError::MissingVertex(9)));
        assert_eq!(g.outdegree(9), Err(GraphError::MissingVertex(9)));
    }

    #[test]
    fn test_complete_graph() {
        let g = Graph::complete(4);
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 12);
        assert!(!g.is_directed());
        assert!(!g.is_weighted());
        assert_eq!(g.outdegree(1), Ok(3));
    }

    #[test]
    fn test_clone_does_not_alias() {
        let g = Graph::complete(3);
        let mut copy = g.clone();
        copy.remove_edge(1, 2).unwrap();
        assert!(g.has_edge(1, 2));
        assert!(!copy.has_edge(1, 2));
    }

    #[test]
    fn test_display_weighted() {
        let mut g = undirected(2);
        g.add_edge(1, 2, 5).unwrap();
        assert_eq!(g.to_string(), "1 - 2(5)\n2 - 1(5)\n");
    }

    #[test]
    fn test_display_unweighted() {
        let g = Graph::complete(2);
        assert_eq!(g.to_string(), "1 - 2\n2 - 1\n");
    }

    #[test]
    fn test_memory_usage_nonzero() {
        assert!(Graph::complete(10).memory_usage() > 0);
    }
}
