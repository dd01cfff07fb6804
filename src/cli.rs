//! Command-line interface definition

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// graph-search CLI
#[derive(Parser, Debug)]
#[command(name = "graph-search")]
#[command(about = "Search and autocomplete over an entity graph snapshot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Graph snapshot (JSON with `nodes` and `edges`)
    #[arg(short, long, global = true, env = "GRAPH_SEARCH_DATA", default_value = "graph.json")]
    pub graph: PathBuf,

    /// Default number of search results
    #[arg(long, global = true, env = "GRAPH_SEARCH_LIMIT")]
    pub search_limit: Option<usize>,

    /// Default number of suggestions
    #[arg(long, global = true, env = "GRAPH_SEARCH_SUGGESTION_LIMIT")]
    pub suggestion_limit: Option<usize>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ranked search over node names, descriptions and attributes
    Search(QueryArgs),
    /// Autocomplete node names
    Suggest(QueryArgs),
    /// Show a single node by id
    Node {
        /// Node id
        id: String,
    },
    /// Snapshot and index statistics
    Stats,
}

#[derive(Parser, Debug, Clone)]
pub struct QueryArgs {
    /// Search text (case-insensitive)
    #[arg(short = 'q', long)]
    pub query: String,

    /// Maximum number of entries
    #[arg(short = 'l', long)]
    pub limit: Option<usize>,
}
