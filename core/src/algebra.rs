//! Set-like combinations of graphs.
//!
//! Everything here returns a fresh graph and leaves its operands untouched,
//! except [`Graph::join`] which merges into the receiver.

use indexmap::IndexMap;

use crate::graph::{Edge, Graph, VertexId};

impl Graph {
    /// Graph with every edge reversed.
    ///
    /// All vertices are kept, including those with no incoming edges, which
    /// end up with an empty list. Keys come out in ascending id order.
    pub fn inverted(&self) -> Graph {
        let mut keys: Vec<VertexId> = self.vertices().collect();
        keys.sort_unstable();

        let mut adjacency: IndexMap<VertexId, Vec<Edge>> =
            keys.into_iter().map(|v| (v, Vec::new())).collect();
        for edge in self.edges() {
            adjacency.entry(edge.to).or_default().push(edge.reversed());
        }

        Graph::from_adjacency(adjacency, self.directed, self.weighted)
    }

    /// All vertices and edges of both graphs.
    ///
    /// For a vertex present in both, edges of `other` are added unless the
    /// receiver already has an edge to the same target, then the list is
    /// sorted by target. Flags come from the receiver.
    pub fn union(&self, other: &Graph) -> Graph {
        let mut result = self.clone();
        result.join(other);
        result
    }

    /// In-place [`Graph::union`].
    pub fn join(&mut self, other: &Graph) {
        for (&vertex, other_edges) in &other.adjacency {
            match self.adjacency.get_mut(&vertex) {
                Some(edges) => {
                    let missing: Vec<Edge> = other_edges
                        .iter()
                        .filter(|e| !edges.iter().any(|own| own.to == e.to))
                        .copied()
                        .collect();
                    edges.extend(missing);
                    edges.sort_by_key(|e| e.to);
                }
                None => {
                    self.adjacency.insert(vertex, other_edges.clone());
                }
            }
        }
    }

    /// Vertices present in both graphs, with the edges they share exactly
    /// (same target and weight).
    ///
    /// Iterates in the order of the larger graph, the receiver on ties.
    /// Flags come from the receiver.
    pub fn intersect(&self, other: &Graph) -> Graph {
        let (larger, smaller) = if self.vertex_count() >= other.vertex_count() {
            (self, other)
        } else {
            (other, self)
        };

        let mut adjacency = IndexMap::new();
        for (&vertex, edges) in &larger.adjacency {
            if let Some(other_edges) = smaller.adjacency.get(&vertex) {
                let shared: Vec<Edge> = edges
                    .iter()
                    .filter(|e| other_edges.contains(e))
                    .copied()
                    .collect();
                adjacency.insert(vertex, shared);
            }
        }

        Graph::from_adjacency(adjacency, self.directed, self.weighted)
    }

    /// Copy without the edges whose endpoints are both odd.
    pub fn without_odd_edges(&self) -> Graph {
        let mut result = self.clone();
        for edges in result.adjacency.values_mut() {
            edges.retain(|e| !(e.from % 2 == 1 && e.to % 2 == 1));
        }
        result
    }
}
