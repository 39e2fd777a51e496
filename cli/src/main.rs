//! graph-tasks - command-line front end for the graph analysis engine.
//!
//! Loads an adjacency description file, runs one algorithm over it and
//! prints the result as a table or as JSON.

mod commands;
mod config;
mod load;
mod output;
mod util;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use graph_tasks_core::VertexId;

use crate::config::{GraphArgs, Settings};
use crate::util::EdgeSpec;

/// In-memory graph analysis tool.
///
/// Reads an adjacency description (one line per vertex, `vertex neighbor*`
/// or `vertex (neighbor weight)*` with --weighted) and runs traversals,
/// shortest paths, spanning trees, components and graph algebra over it.
#[derive(Parser)]
#[command(name = "graph-tasks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    graph: GraphArgs,

    /// Output format
    #[arg(long, global = true, env = "GRAPH_TASKS_FORMAT", default_value = "table")]
    format: OutputFormat,

    /// Suppress results and info messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Output format options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
}

/// Traversal order for `traverse`.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TraversalOrder {
    Bfs,
    Dfs,
}

/// DFS expansion strategy.
#[derive(Clone, Copy, Debug, ValueEnum, Default)]
pub enum StrategyArg {
    /// Follow one unvisited neighbor at a time, without backtracking
    #[default]
    Path,
    /// Full depth-first search with backtracking
    Full,
}

/// Single-source shortest path algorithm.
#[derive(Clone, Copy, Debug, ValueEnum, Default)]
pub enum PathAlgorithm {
    /// FIFO label-correcting relaxation
    #[default]
    Relax,
    /// Bellman-Ford, at most |V| rounds
    BellmanFord,
}

/// Graph algebra operation.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum AlgebraOp {
    /// New graph holding both graphs' vertices and edges
    Union,
    /// Vertices in both graphs and edges equal in both
    Intersect,
    /// Merge the other graph into this one in place
    Join,
    /// Reverse every edge
    Invert,
    /// Drop edges whose endpoints are both odd
    OddFilter,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Print the adjacency list with counts and load time
    Show,

    /// Show in/out/total degree per vertex
    Degree {
        /// Only this vertex
        #[arg(long)]
        vertex: Option<VertexId>,

        /// Only the N highest-degree vertices (0 = all)
        #[arg(long, default_value_t = 0)]
        top: usize,
    },

    /// Print the visitation order of a BFS or DFS
    Traverse {
        order: TraversalOrder,

        /// Root vertex
        #[arg(long)]
        from: VertexId,

        /// DFS strategy (ignored for BFS)
        #[arg(long, value_enum, default_value_t)]
        strategy: StrategyArg,
    },

    /// Shortest paths from one vertex
    Path {
        /// Source vertex
        #[arg(long)]
        from: VertexId,

        /// Destinations to report (default: every vertex)
        #[arg(long)]
        to: Vec<VertexId>,

        #[arg(long, value_enum, default_value_t)]
        algorithm: PathAlgorithm,
    },

    /// All-pairs distance matrix (Floyd-Warshall)
    Floyd,

    /// Strongly connected components (Kosaraju)
    Components,

    /// Minimum spanning tree (Prim)
    Mst {
        /// Start vertex
        #[arg(long)]
        from: VertexId,

        /// Print edges in selection order instead of the tree
        #[arg(long)]
        ordered: bool,
    },

    /// Eccentricity of one vertex, or radius and center of the graph
    Metrics {
        #[arg(long)]
        vertex: Option<VertexId>,
    },

    /// Combine or transform graphs
    Algebra {
        op: AlgebraOp,

        /// Second graph for union, intersect and join
        #[arg(long)]
        other: Option<PathBuf>,
    },

    /// Apply mutations and print the resulting graph
    Edit {
        #[arg(long = "add-vertex")]
        add_vertex: Vec<VertexId>,

        #[arg(long = "remove-vertex")]
        remove_vertex: Vec<VertexId>,

        /// FROM:TO or FROM:TO:WEIGHT
        #[arg(long = "add-edge", value_parser = util::parse_edge_spec)]
        add_edge: Vec<EdgeSpec>,

        /// FROM:TO
        #[arg(long = "remove-edge", value_parser = util::parse_edge_spec)]
        remove_edge: Vec<EdgeSpec>,
    },
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::resolve(cli.graph, cli.format, cli.quiet)?;
    let loaded = load::load_graph(&settings)?;

    match cli.command {
        Commands::Show => commands::show::run(&loaded, &settings),
        Commands::Degree { vertex, top } => commands::degree::run(&loaded, vertex, top, &settings),
        Commands::Traverse {
            order,
            from,
            strategy,
        } => commands::traverse::run(&loaded, order, from, strategy, &settings),
        Commands::Path {
            from,
            to,
            algorithm,
        } => commands::path::run(&loaded, from, &to, algorithm, &settings),
        Commands::Floyd => commands::floyd::run(&loaded, &settings),
        Commands::Components => commands::components::run(&loaded, &settings),
        Commands::Mst { from, ordered } => commands::mst::run(&loaded, from, ordered, &settings),
        Commands::Metrics { vertex } => commands::metrics::run(&loaded, vertex, &settings),
        Commands::Algebra { op, other } => {
            commands::algebra::run(loaded, op, other.as_deref(), &settings)
        }
        Commands::Edit {
            add_vertex,
            remove_vertex,
            add_edge,
            remove_edge,
        } => {
            let edits = commands::edit::Edits {
                add_vertex,
                remove_vertex,
                add_edge,
                remove_edge,
            };
            commands::edit::run(loaded, &edits, &settings)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
