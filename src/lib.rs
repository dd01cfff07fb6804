//! graph-search
//!
//! In-memory search and autocomplete over a snapshot of entity graph
//! nodes (people, companies, products, locations).
//!
//! ```
//! use graph_search::graph::Node;
//! use graph_search::search::SearchEngine;
//!
//! let engine = SearchEngine::new(vec![
//!     Node::new("n1", "Alice Smith", "Engineer at Acme"),
//!     Node::new("n2", "Bob Jones", "Manager"),
//! ]);
//! let results = engine.search("alice", 10);
//! assert_eq!(results[0].node.id, "n1");
//! assert_eq!(results[0].score, 10.0);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod search;

pub use error::GraphError;
pub use graph::{AttributeValue, Edge, EdgeKind, GraphData, Node};
pub use search::{SearchEngine, SearchResult};
