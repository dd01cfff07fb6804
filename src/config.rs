//! Runtime configuration
//!
//! Resolved from CLI flags, with environment variables as fallback
//! (handled by clap's `env` attribute on the arguments).

use crate::cli::Cli;
use crate::search::{DEFAULT_SEARCH_LIMIT, DEFAULT_SUGGESTION_LIMIT};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// JSON snapshot to load
    pub graph_path: PathBuf,
    /// Result count when a command gives no explicit limit
    pub search_limit: usize,
    pub suggestion_limit: usize,
}

impl SearchConfig {
    pub fn new(graph_path: impl Into<PathBuf>) -> Self {
        Self {
            graph_path: graph_path.into(),
            search_limit: DEFAULT_SEARCH_LIMIT,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            graph_path: cli.graph.clone(),
            search_limit: cli.search_limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
            suggestion_limit: cli.suggestion_limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT),
        }
    }
}
