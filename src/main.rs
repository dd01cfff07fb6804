//! graph-search CLI
//!
//! Loads a graph snapshot, indexes it and runs one command against it:
//! - `search` - ranked results
//! - `suggest` - autocomplete names
//! - `node` - resolve an id
//! - `stats` - snapshot and index sizes

use anyhow::Result;
use clap::Parser;
use graph_search::cli::{Cli, Commands};
use graph_search::config::SearchConfig;
use graph_search::{GraphData, GraphError, Node, SearchEngine};
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    // RUST_LOG wins when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    match run(cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(get_exit_code(&e));
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let config = SearchConfig::from_cli(&cli);
    debug!("Resolved configuration: {:?}", config);

    let graph = GraphData::from_path(&config.graph_path)?;
    graph.validate()?;
    let edge_count = graph.edges.len();
    let engine = SearchEngine::new(graph.nodes);

    match cli.command {
        Commands::Search(args) => {
            let limit = args.limit.unwrap_or(config.search_limit);
            let results = engine.search(&args.query, limit);

            if cli.json {
                return Ok(serde_json::to_string_pretty(&results)?);
            }
            if results.is_empty() {
                return Ok(format!("No results for '{}'", args.query));
            }

            let mut output = format!("Results for '{}' ({}):\n", args.query, results.len());
            for (rank, result) in results.iter().enumerate() {
                output.push_str(&format!(
                    "{:>3}. {} [{}]  score {}  (matched: {})\n",
                    rank + 1,
                    result.node.name,
                    result.node.id,
                    result.score,
                    result.matched_terms.join(", ")
                ));
            }
            Ok(output)
        }
        Commands::Suggest(args) => {
            let limit = args.limit.unwrap_or(config.suggestion_limit);
            let suggestions = engine.suggestions(&args.query, limit);

            if cli.json {
                return Ok(serde_json::to_string_pretty(&suggestions)?);
            }
            Ok(suggestions.join("\n"))
        }
        Commands::Node { id } => {
            let node = engine
                .get_node_by_id(&id)
                .ok_or_else(|| anyhow::anyhow!("Node not found: {}", id))?;

            if cli.json {
                return Ok(serde_json::to_string_pretty(node)?);
            }
            Ok(format_node(node))
        }
        Commands::Stats => {
            if cli.json {
                return Ok(serde_json::to_string_pretty(&json!({
                    "nodes": engine.len(),
                    "edges": edge_count,
                    "terms": engine.term_count(),
                }))?);
            }
            Ok(format!(
                "Nodes: {}\nEdges: {}\nIndexed terms: {}",
                engine.len(),
                edge_count,
                engine.term_count()
            ))
        }
    }
}

fn format_node(node: &Node) -> String {
    let mut output = format!("{} [{}]\n", node.name, node.id);
    if !node.description.is_empty() {
        output.push_str(&format!("  {}\n", node.description));
    }
    if let Some(parent) = &node.parent_id {
        output.push_str(&format!("  parent: {}\n", parent));
    }
    for (key, value) in &node.attributes {
        output.push_str(&format!("  • {}: {}\n", key, value));
    }
    output
}

/// Map errors to exit codes
fn get_exit_code(err: &anyhow::Error) -> i32 {
    if let Some(graph_err) = err.downcast_ref::<GraphError>() {
        return match graph_err {
            GraphError::InvalidInput(_) => 1,
            GraphError::Io { .. } | GraphError::Parse(_) => 5,
        };
    }

    let err_str = err.to_string().to_lowercase();
    if err_str.contains("not found") {
        3
    } else {
        5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph_search::AttributeValue;

    #[test]
    fn test_exit_codes() {
        let invalid = anyhow::Error::from(GraphError::InvalidInput("empty id".to_string()));
        assert_eq!(get_exit_code(&invalid), 1);

        let missing = anyhow::anyhow!("Node not found: n42");
        assert_eq!(get_exit_code(&missing), 3);

        assert_eq!(get_exit_code(&anyhow::anyhow!("boom")), 5);
    }

    #[test]
    fn test_format_node() {
        let node = Node::new("n1", "Alice Smith", "Engineer")
            .with_attribute("city", AttributeValue::String("Berlin".to_string()));
        let text = format_node(&node);
        assert!(text.starts_with("Alice Smith [n1]"));
        assert!(text.contains("city: Berlin"));
    }
}
