use graph_tasks_core::{
    bellman_ford, bfs, dfs, eccentricity, prim_ordered_edges, shortest_paths_from,
    strongly_connected_components, DfsStrategy, Graph, Result, VertexId,
};
use std::time::{Duration, Instant};

/// Bellman-Ford, Prim and eccentricity are O(V·E); they run on a graph of
/// at most this many vertices built by the same generator.
const QUADRATIC_LIMIT: u64 = 2_000;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let vertex_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: graph-tasks-bench [mode] [vertex_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  tree        Branching tree (deep paths)");
        println!("  scalefree   Preferential attachment via edge sampling (hub-and-spoke)");
        println!("  smallworld  Watts-Strogatz ring lattice + shortcuts");
        println!("  random      Erdos-Renyi uniform random edges");
        println!("  barbell     Two dense clusters connected by a thin bridge");
        println!();
        println!("Default vertex_count: 100000");
        println!(
            "Bellman-Ford, Prim and eccentricity use at most {} vertices",
            QUADRATIC_LIMIT
        );
        return;
    }

    println!("graph-tasks-bench");
    println!("=================");
    println!();

    let generators: Vec<(&str, fn(u64) -> Result<Graph>)> = match mode {
        "tree" => vec![("Branching tree", gen_tree)],
        "scalefree" => vec![("Scale-free (edge sampling)", gen_scale_free)],
        "smallworld" => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "barbell" => vec![("Barbell (cluster-bridge-cluster)", gen_barbell)],
        "all" => vec![
            ("Branching tree", gen_tree as fn(u64) -> Result<Graph>),
            ("Scale-free (edge sampling)", gen_scale_free),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (cluster-bridge-cluster)", gen_barbell),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        if let Err(e) = run_benchmark(name, generator, vertex_count) {
            eprintln!("{}: benchmark failed: {}", name, e);
            std::process::exit(1);
        }
    }
}

fn ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

fn run_benchmark(name: &str, generator: fn(u64) -> Result<Graph>, vertex_count: u64) -> Result<()> {
    println!("--- {} ---", name);
    println!("Target: {} vertices", vertex_count);

    let t = Instant::now();
    let graph = generator(vertex_count)?;
    println!(
        "Generated in {:.2}s: {} vertices, {} edges, ~{:.1}MB",
        t.elapsed().as_secs_f64(),
        graph.vertex_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );
    println!();
    println!("{:<22} {:>12} {:>10}", "algorithm", "result", "time");
    println!("{:-<22} {:->12} {:->10}", "", "", "");

    let t = Instant::now();
    let mut visited = 0usize;
    bfs(&graph, 0, |_| visited += 1);
    report("bfs", visited, t.elapsed());

    for (label, strategy) in [
        ("dfs (path-following)", DfsStrategy::PathFollowing),
        ("dfs (full)", DfsStrategy::Full),
    ] {
        let t = Instant::now();
        let mut visited = 0usize;
        dfs(&graph, 0, strategy, |_| visited += 1);
        report(label, visited, t.elapsed());
    }

    let t = Instant::now();
    let components = strongly_connected_components(&graph);
    report("scc", components.len(), t.elapsed());

    let t = Instant::now();
    let paths = shortest_paths_from(&graph, 0)?;
    let reachable = graph.vertices().filter(|&v| paths.is_reachable(v)).count();
    report("relaxation", reachable, t.elapsed());

    let small = if vertex_count > QUADRATIC_LIMIT {
        generator(QUADRATIC_LIMIT)?
    } else {
        graph
    };
    println!(
        "  (below on {} vertices, {} edges)",
        small.vertex_count(),
        small.edge_count()
    );

    let t = Instant::now();
    let bf = bellman_ford(&small, 0)?;
    let elapsed = t.elapsed();
    println!(
        "{:<22} {:>12} {:>8.1}ms",
        "bellman-ford",
        format!("{} rounds", bf.rounds()),
        ms(elapsed)
    );

    let t = Instant::now();
    let tree = prim_ordered_edges(&small, 0)?;
    report("prim", tree.len(), t.elapsed());

    let t = Instant::now();
    let ecc = eccentricity(&small, 0)?;
    report("eccentricity", ecc.value, t.elapsed());

    println!();
    Ok(())
}

fn report(label: &str, result: usize, elapsed: Duration) {
    println!("{:<22} {:>12} {:>8.1}ms", label, result, ms(elapsed));
}

// ---------------------------------------------------------------------------
// Generators: directed, weighted, deterministic, O(n + edges)
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
    /// Edge weight in 1..=100.
    fn weight(&mut self) -> i64 {
        self.next(100) as i64 + 1
    }
}

fn with_vertices(count: u64) -> Graph {
    let mut graph = Graph::with_capacity(count as usize, true, true);
    for v in 0..count {
        graph.add_vertex(v);
    }
    graph
}

/// Branching tree: each vertex spawns 3 children.
///
/// Deep paths (log depth) with exponential width. Exercises deep DFS and
/// path reconstruction.
fn gen_tree(vertex_count: u64) -> Result<Graph> {
    let mut graph = with_vertices(vertex_count);
    let mut rng = FastRng::new(42);

    let branching = 3u64;
    let mut next_id: u64 = 1;
    let mut frontier: Vec<VertexId> = vec![0];

    while next_id < vertex_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching as usize);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= vertex_count {
                    break;
                }
                let child = next_id;
                next_id += 1;
                graph.add_edge(parent, child, rng.weight())?;
                next_frontier.push(child);
            }
        }
        frontier = next_frontier;
    }

    Ok(graph)
}

/// Scale-free via edge-list sampling (O(edges), not O(n²)).
///
/// Preferential attachment by picking a random existing edge endpoint.
/// Vertices with more edges are more likely to be picked. New vertices get
/// an edge from their target too, so vertex 0 reaches the whole graph.
fn gen_scale_free(vertex_count: u64) -> Result<Graph> {
    let edges_per_vertex = 5u64;
    let mut graph = with_vertices(vertex_count);
    let mut rng = FastRng::new(12345);

    let mut endpoints: Vec<VertexId> =
        Vec::with_capacity((vertex_count * edges_per_vertex * 2) as usize);

    // Seed: small clique
    let seed = 5u64.min(vertex_count);
    for i in 0..seed {
        for j in 0..seed {
            if i != j {
                graph.add_edge(i, j, rng.weight())?;
                endpoints.push(i);
                endpoints.push(j);
            }
        }
    }

    for new_vertex in seed..vertex_count {
        let attach = edges_per_vertex.min(new_vertex);
        for _ in 0..attach {
            let target = endpoints[rng.next(endpoints.len() as u64) as usize];
            if target == new_vertex {
                continue;
            }
            graph.add_edge(new_vertex, target, rng.weight())?;
            graph.add_edge(target, new_vertex, rng.weight())?;
            endpoints.push(new_vertex);
            endpoints.push(target);
        }
    }

    Ok(graph)
}

/// Small-world (Watts-Strogatz): ring lattice + random rewiring.
///
/// Each vertex links to its K successors on a ring; each link is rewired
/// with probability p. High clustering with short path lengths.
fn gen_small_world(vertex_count: u64) -> Result<Graph> {
    let k = 5u64.min(vertex_count.saturating_sub(1));
    let p = 0.05f64;
    let mut graph = with_vertices(vertex_count);
    let mut rng = FastRng::new(67890);

    for i in 0..vertex_count {
        for j in 1..=k {
            let neighbor = (i + j) % vertex_count;
            let target = if rng.next_f64() < p {
                let rewired = rng.next(vertex_count);
                if rewired != i {
                    rewired
                } else {
                    neighbor
                }
            } else {
                neighbor
            };
            graph.add_edge(i, target, rng.weight())?;
        }
    }

    Ok(graph)
}

/// Erdos-Renyi: ~5 uniform random out-edges per vertex, no structure.
fn gen_random(vertex_count: u64) -> Result<Graph> {
    let target_edges = vertex_count * 5;
    let mut graph = with_vertices(vertex_count);
    let mut rng = FastRng::new(54321);

    for _ in 0..target_edges {
        let from = rng.next(vertex_count);
        let to = rng.next(vertex_count);
        if from != to {
            graph.add_edge(from, to, rng.weight())?;
        }
    }

    Ok(graph)
}

/// Barbell: two dense clusters connected by a single thin bridge.
///
/// Worst case for paths through a bottleneck. Each cluster has ~n/2
/// vertices with ~10 random links each; a chain of 10 bridge vertices joins
/// them in one direction only.
fn gen_barbell(vertex_count: u64) -> Result<Graph> {
    let bridge_len = 10u64.min(vertex_count);
    let cluster_size = (vertex_count - bridge_len) / 2;
    let mut graph = with_vertices(vertex_count);
    let mut rng = FastRng::new(99999);

    let link_cluster = |graph: &mut Graph, rng: &mut FastRng, base: u64| -> Result<()> {
        for i in 0..cluster_size {
            for _ in 0..10u64.min(cluster_size.saturating_sub(1)) {
                let target = rng.next(cluster_size);
                if target != i {
                    graph.add_edge(base + i, base + target, rng.weight())?;
                }
            }
        }
        Ok(())
    };

    // Cluster A: 0..cluster_size
    link_cluster(&mut graph, &mut rng, 0)?;

    // Bridge: chain from the last vertex of A to the first vertex of B
    let bridge_start = cluster_size;
    for i in 0..bridge_len {
        let id = bridge_start + i;
        if id > 0 {
            graph.add_edge(id - 1, id, rng.weight())?;
        }
    }

    // Cluster B: after the bridge
    let b_start = bridge_start + bridge_len;
    if cluster_size > 0 {
        graph.add_edge(b_start - 1, b_start, rng.weight())?;
    }
    link_cluster(&mut graph, &mut rng, b_start)?;

    Ok(graph)
}
