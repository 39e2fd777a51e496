use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::{Graph, VertexId};

/// How [`dfs`] expands the vertex on top of its stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DfsStrategy {
    /// Pop the top vertex, visit it, then push only its first unvisited
    /// neighbor. Follows a single path and never backtracks, so vertices
    /// reachable only through a sibling branch are not visited.
    #[default]
    PathFollowing,
    /// Classical backtracking DFS; every reachable vertex is visited.
    Full,
}

/// Visited set and finish-time bookkeeping for [`dfs_with_finish_times`].
///
/// Threaded through calls explicitly so several DFS runs can share one
/// visited set (as Kosaraju's first pass does) without any global state.
#[derive(Debug, Clone, Default)]
pub struct TraversalContext {
    visited: HashSet<VertexId>,
    finish_times: HashMap<VertexId, usize>,
    finish_order: Vec<VertexId>,
}

impl TraversalContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visited(&self, vertex: VertexId) -> bool {
        self.visited.contains(&vertex)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Finish index of a vertex (0 = first to finish).
    pub fn finish_time(&self, vertex: VertexId) -> Option<usize> {
        self.finish_times.get(&vertex).copied()
    }

    /// Vertices in the order they finished.
    pub fn finish_order(&self) -> &[VertexId] {
        &self.finish_order
    }

    /// Forget visited vertices, keep the recorded finish times.
    pub fn reset_visited(&mut self) {
        self.visited.clear();
    }

    fn mark_visited(&mut self, vertex: VertexId) -> bool {
        self.visited.insert(vertex)
    }

    fn finish(&mut self, vertex: VertexId) {
        self.finish_times.insert(vertex, self.finish_order.len());
        self.finish_order.push(vertex);
    }
}

/// Breadth-first traversal from `from`, calling `visitor` in dequeue order.
///
/// Each reachable vertex is visited once. No-op if `from` is absent.
pub fn bfs<F: FnMut(VertexId)>(graph: &Graph, from: VertexId, mut visitor: F) {
    if !graph.contains_vertex(from) {
        return;
    }

    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    visited.insert(from);
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        visitor(current);

        for edge in graph.neighbors(current) {
            if visited.insert(edge.to) {
                queue.push_back(edge.to);
            }
        }
    }
}

/// Depth-first traversal from `from` using the given expansion strategy.
///
/// No-op if `from` is absent.
pub fn dfs<F: FnMut(VertexId)>(graph: &Graph, from: VertexId, strategy: DfsStrategy, visitor: F) {
    match strategy {
        DfsStrategy::PathFollowing => path_following_dfs(graph, from, visitor),
        DfsStrategy::Full => {
            let mut ctx = TraversalContext::new();
            dfs_with_finish_times(graph, from, &mut ctx, visitor);
        }
    }
}

fn path_following_dfs<F: FnMut(VertexId)>(graph: &Graph, from: VertexId, mut visitor: F) {
    if !graph.contains_vertex(from) {
        return;
    }

    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut stack: Vec<VertexId> = Vec::new();

    visited.insert(from);
    stack.push(from);

    while let Some(current) = stack.pop() {
        visitor(current);

        let next = graph
            .neighbors(current)
            .iter()
            .map(|e| e.to)
            .find(|v| !visited.contains(v));
        if let Some(next) = next {
            visited.insert(next);
            stack.push(next);
        }
    }
}

/// Full DFS from `from` that records each vertex's finish in `ctx`.
///
/// Vertices already visited in `ctx` are skipped, so repeated calls with the
/// same context cover a graph forest-style. `visitor` sees vertices in
/// discovery order. Uses an explicit frame stack, not recursion.
pub fn dfs_with_finish_times<F: FnMut(VertexId)>(
    graph: &Graph,
    from: VertexId,
    ctx: &mut TraversalContext,
    mut visitor: F,
) {
    if !graph.contains_vertex(from) || !ctx.mark_visited(from) {
        return;
    }
    visitor(from);

    // Frame: (vertex, index of the next outgoing edge to try)
    let mut frames: Vec<(VertexId, usize)> = vec![(from, 0)];

    while let Some(frame) = frames.last_mut() {
        let (vertex, cursor) = *frame;
        match graph.neighbors(vertex).get(cursor) {
            Some(edge) => {
                frame.1 += 1;
                let next = edge.to;
                if ctx.mark_visited(next) {
                    visitor(next);
                    frames.push((next, 0));
                }
            }
            None => {
                frames.pop();
                ctx.finish(vertex);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directed(n: u64) -> Graph {
        let mut g = Graph::new(true, false);
        for v in 0..n {
            g.add_vertex(v);
        }
        g
    }

    fn make_chain(n: u64) -> Graph {
        let mut g = directed(n);
        for i in 0..n - 1 {
            g.add_edge(i, i + 1, 0).unwrap();
        }
        g
    }

    fn make_star(leaves: u64) -> Graph {
        let mut g = directed(leaves + 1);
        for i in 1..=leaves {
            g.add_edge(0, i, 0).unwrap();
        }
        g
    }

    fn make_cycle(n: u64) -> Graph {
        let mut g = directed(n);
        for i in 0..n {
            g.add_edge(i, (i + 1) % n, 0).unwrap();
        }
        g
    }

    /// 0 → 1 → 3, 0 → 2: vertex 2 only reachable by backtracking to 0.
    fn make_fork() -> Graph {
        let mut g = directed(4);
        g.add_edge(0, 1, 0).unwrap();
        g.add_edge(0, 2, 0).unwrap();
        g.add_edge(1, 3, 0).unwrap();
        g
    }

    fn collect_bfs(g: &Graph, from: VertexId) -> Vec<VertexId> {
        let mut order = Vec::new();
        bfs(g, from, |v| order.push(v));
        order
    }

    fn collect_dfs(g: &Graph, from: VertexId, strategy: DfsStrategy) -> Vec<VertexId> {
        let mut order = Vec::new();
        dfs(g, from, strategy, |v| order.push(v));
        order
    }

    // --- BFS ---

    #[test]
    fn test_bfs_chain() {
        let g = make_chain(6);
        assert_eq!(collect_bfs(&g, 0), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_bfs_directed_respects_direction() {
        let g = make_chain(4);
        assert_eq!(collect_bfs(&g, 2), vec![2, 3]);
    }

    #[test]
    fn test_bfs_level_order() {
        let g = make_fork();
        assert_eq!(collect_bfs(&g, 0), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_bfs_star() {
        let g = make_star(50);
        let order = collect_bfs(&g, 0);
        assert_eq!(order.len(), 51);
        assert_eq!(order[0], 0);
    }

    #[test]
    fn test_bfs_cycle_no_infinite_loop() {
        let g = make_cycle(5);
        assert_eq!(collect_bfs(&g, 3), vec![3, 4, 0, 1, 2]);
    }

    #[test]
    fn test_bfs_start_not_in_graph() {
        let g = make_chain(3);
        assert!(collect_bfs(&g, 999).is_empty());
    }

    #[test]
    fn test_bfs_self_loop() {
        let mut g = directed(1);
        g.add_edge(0, 0, 0).unwrap();
        assert_eq!(collect_bfs(&g, 0), vec![0]);
    }

    // --- DFS ---

    #[test]
    fn test_path_following_dfs_chain() {
        let g = make_chain(5);
        assert_eq!(
            collect_dfs(&g, 0, DfsStrategy::PathFollowing),
            vec![0, 1, 2, 3, 4]
        );
    }

    #[test]
    fn test_path_following_dfs_does_not_backtrack() {
        let g = make_fork();
        // 2 is only reachable after backtracking to 0
        assert_eq!(
            collect_dfs(&g, 0, DfsStrategy::PathFollowing),
            vec![0, 1, 3]
        );
    }

    #[test]
    fn test_full_dfs_backtracks() {
        let g = make_fork();
        assert_eq!(collect_dfs(&g, 0, DfsStrategy::Full), vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_dfs_default_is_path_following() {
        assert_eq!(DfsStrategy::default(), DfsStrategy::PathFollowing);
    }

    #[test]
    fn test_dfs_start_not_in_graph() {
        let g = make_chain(3);
        assert!(collect_dfs(&g, 42, DfsStrategy::PathFollowing).is_empty());
        assert!(collect_dfs(&g, 42, DfsStrategy::Full).is_empty());
    }

    #[test]
    fn test_full_dfs_cycle_visits_each_once() {
        let g = make_cycle(6);
        let order = collect_dfs(&g, 0, DfsStrategy::Full);
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
    }

    // --- Finish times ---

    #[test]
    fn test_finish_order_fork() {
        let g = make_fork();
        let mut ctx = TraversalContext::new();
        dfs_with_finish_times(&g, 0, &mut ctx, |_| {});
        assert_eq!(ctx.finish_order(), &[3, 1, 2, 0]);
        assert_eq!(ctx.finish_time(0), Some(3));
        assert_eq!(ctx.finish_time(3), Some(0));
    }

    #[test]
    fn test_shared_context_skips_visited() {
        let g = make_chain(4);
        let mut ctx = TraversalContext::new();
        dfs_with_finish_times(&g, 2, &mut ctx, |_| {});
        let mut seen = Vec::new();
        dfs_with_finish_times(&g, 0, &mut ctx, |v| seen.push(v));
        assert_eq!(seen, vec![0, 1]);
        assert_eq!(ctx.finish_order(), &[3, 2, 1, 0]);
        assert_eq!(ctx.visited_count(), 4);
    }

    #[test]
    fn test_reset_visited_keeps_finish_times() {
        let g = make_chain(2);
        let mut ctx = TraversalContext::new();
        dfs_with_finish_times(&g, 0, &mut ctx, |_| {});
        ctx.reset_visited();
        assert!(!ctx.is_visited(0));
        assert_eq!(ctx.finish_time(1), Some(0));
    }

    #[test]
    fn test_finish_times_absent_root() {
        let g = make_chain(2);
        let mut ctx = TraversalContext::new();
        dfs_with_finish_times(&g, 7, &mut ctx, |_| {});
        assert!(ctx.finish_order().is_empty());
    }
}
