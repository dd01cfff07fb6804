//! Error types for loading graph snapshots
//!
//! The search engine itself is total; failures only happen at the I/O edge.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Snapshot parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl GraphError {
    /// Stable error code for machine-readable output
    pub fn error_code(&self) -> &'static str {
        match self {
            GraphError::Io { .. } => "io_error",
            GraphError::Parse(_) => "parse_failed",
            GraphError::InvalidInput(_) => "invalid_input",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_error_display() {
        let error = GraphError::InvalidInput("node at position 0 has an empty id".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid input: node at position 0 has an empty id"
        );

        let error = GraphError::Io {
            path: "graph.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(error.to_string(), "Failed to read graph.json: missing");
    }

    #[test]
    fn test_graph_error_codes() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: GraphError = parse.into();
        assert!(matches!(error, GraphError::Parse(_)));
        assert_eq!(error.error_code(), "parse_failed");

        assert_eq!(
            GraphError::InvalidInput(String::new()).error_code(),
            "invalid_input"
        );
    }
}
