//! Free-text search over graph nodes
//!
//! Tokenizer, inverted index, substring matcher and field-weighted scorer,
//! orchestrated by [`SearchEngine`].

pub mod engine;
pub mod fuzzy;
pub mod index;
pub mod parser;
pub mod ranking;


pub use engine::{SearchEngine, SearchResult, DEFAULT_SEARCH_LIMIT, DEFAULT_SUGGESTION_LIMIT};
pub use fuzzy::MatchType;
pub use index::SearchIndex;
pub use parser::{tokenize, ParsedQuery};
pub use ranking::{MatchScore, ScoringWeights};
