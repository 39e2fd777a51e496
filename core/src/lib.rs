//! graph-tasks-core: in-memory graph analysis engine.
//!
//! An adjacency-list store for directed/undirected, weighted/unweighted
//! graphs, plus the classic algorithms over it: BFS/DFS traversal, Kosaraju
//! strongly connected components, single-source relaxation, Bellman-Ford,
//! Floyd-Warshall, Prim's minimum spanning tree, graph algebra (union,
//! intersection, inversion) and eccentricity metrics.
//!
//! Single-threaded and free of I/O; the adjacency text loader takes lines,
//! not files. Every algorithm leaves its input untouched and returns a new
//! graph or a result value.

mod algebra;
mod connectivity;
mod degree;
mod error;
mod graph;
mod index;
mod load;
mod metrics;
mod mst;
mod shortest_path;
mod traversal;

pub use connectivity::{strongly_connected_components, visit_strongly_connected_components};
pub use degree::{degree_ranking, DegreeInfo};
pub use error::{GraphError, Result};
pub use graph::{Edge, Graph, VertexId, Weight};
pub use load::parse_adjacency;
pub use metrics::{center, eccentricity, radius, Eccentricity};
pub use mst::{prim, prim_ordered_edges};
pub use shortest_path::{
    bellman_ford, floyd_warshall, shortest_paths_from, FloydWarshall, PathReport, ShortestPaths,
};
pub use traversal::{bfs, dfs, dfs_with_finish_times, DfsStrategy, TraversalContext};
