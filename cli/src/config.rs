//! Settings shared by every subcommand.
//!
//! Each option can come from the command line or from a `GRAPH_TASKS_*`
//! environment variable; the command line wins.

use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::Args;
use thiserror::Error;

use crate::OutputFormat;

pub const DEFAULT_MAX_MEMORY_MB: u32 = 4096;
pub const MIN_MEMORY_MB: u32 = 64;
pub const MAX_MEMORY_MB: u32 = 131_072; // 128 GB

/// Graph source options, accepted before or after the subcommand.
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Adjacency description file to load
    #[arg(long, global = true, env = "GRAPH_TASKS_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Treat the description as a directed graph
    #[arg(long, global = true, env = "GRAPH_TASKS_DIRECTED", value_parser = FalseyValueParser::new())]
    pub directed: bool,

    /// Read `(neighbor weight)` pairs instead of bare neighbors
    #[arg(long, global = true, env = "GRAPH_TASKS_WEIGHTED", value_parser = FalseyValueParser::new())]
    pub weighted: bool,

    /// Refuse graphs whose in-memory size exceeds this many megabytes
    #[arg(
        long,
        global = true,
        env = "GRAPH_TASKS_MAX_MEMORY_MB",
        default_value_t = DEFAULT_MAX_MEMORY_MB
    )]
    pub max_memory_mb: u32,
}

/// Configuration problems detected before any graph is read.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no graph file given: pass --graph or set GRAPH_TASKS_GRAPH")]
    MissingGraph,

    #[error("max memory {0} MB is outside {MIN_MEMORY_MB}..={MAX_MEMORY_MB} MB")]
    MemoryLimitOutOfRange(u32),
}

/// Resolved, validated settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub graph: PathBuf,
    pub directed: bool,
    pub weighted: bool,
    pub max_memory_mb: u32,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Settings {
    pub fn resolve(args: GraphArgs, format: OutputFormat, quiet: bool) -> Result<Self, ConfigError> {
        let graph = args.graph.ok_or(ConfigError::MissingGraph)?;
        if !(MIN_MEMORY_MB..=MAX_MEMORY_MB).contains(&args.max_memory_mb) {
            return Err(ConfigError::MemoryLimitOutOfRange(args.max_memory_mb));
        }

        Ok(Self {
            graph,
            directed: args.directed,
            weighted: args.weighted,
            max_memory_mb: args.max_memory_mb,
            format,
            quiet,
        })
    }

    pub fn max_memory_bytes(&self) -> usize {
        self.max_memory_mb as usize * 1024 * 1024
    }
}
