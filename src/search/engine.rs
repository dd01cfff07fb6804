//! Search Engine Integration
//!
//! Ties together tokenization, the inverted index and scoring over one
//! snapshot of graph nodes.
//!
//! The engine holds exactly one snapshot and its derived index.
//! `update_nodes` is the only mutator and takes `&mut self`; callers that
//! share an engine across threads must provide their own lock.

use super::index::SearchIndex;
use super::parser::ParsedQuery;
use super::ranking::{score_node, MatchScore, ScoringWeights};
use crate::graph::Node;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info};

/// Default number of ranked results
pub const DEFAULT_SEARCH_LIMIT: usize = 10;
/// Default number of autocomplete suggestions
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Search result with node and score
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult<'a> {
    /// The matched node
    pub node: &'a Node,
    /// Relevance score, always > 0
    pub score: f64,
    /// Which query terms matched
    pub matched_terms: Vec<String>,
    #[serde(skip)]
    pub breakdown: MatchScore,
}

/// In-memory search engine over a graph snapshot
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    nodes: Vec<Node>,
    index: SearchIndex,
    scoring_weights: ScoringWeights,
}

impl SearchEngine {
    /// Create a search engine and index the initial snapshot
    pub fn new(nodes: Vec<Node>) -> Self {
        let index = SearchIndex::build(&nodes);
        info!(
            "Search index ready: {} nodes, {} terms",
            nodes.len(),
            index.term_count()
        );

        Self {
            nodes,
            index,
            scoring_weights: ScoringWeights::default(),
        }
    }

    /// Replace the snapshot and rebuild the index wholesale
    pub fn update_nodes(&mut self, nodes: Vec<Node>) {
        // Build before swapping so the old index stays whole until replaced
        let index = SearchIndex::build(&nodes);
        info!(
            "Search index rebuilt: {} -> {} nodes, {} terms",
            self.nodes.len(),
            nodes.len(),
            index.term_count()
        );

        self.nodes = nodes;
        self.index = index;
    }

    /// Ranked search over the snapshot
    ///
    /// Results are ordered by score, highest first. Equal scores keep the
    /// order of the nodes in the snapshot.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchResult<'_>> {
        let parsed = ParsedQuery::parse(query);
        if parsed.is_blank() || limit == 0 {
            return Vec::new();
        }

        let candidates = self.index.candidates(&parsed.terms);

        let mut results: Vec<SearchResult<'_>> = candidates
            .into_iter()
            .filter_map(|position| {
                let node = &self.nodes[position];
                let score = score_node(node, &parsed.terms, &self.scoring_weights);
                score.is_match().then(|| SearchResult {
                    node,
                    score: score.final_score,
                    matched_terms: score.matched_terms.clone(),
                    breakdown: score,
                })
            })
            .collect();

        let matched = results.len();

        // Stable sort: ties stay in snapshot order
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(limit);

        debug!(
            "Search '{}': {} terms, {} matched, {} returned",
            parsed.original,
            parsed.terms.len(),
            matched,
            results.len()
        );

        results
    }

    /// Autocomplete suggestions: distinct node names, in discovery order
    ///
    /// Names containing the query come first, in snapshot order. Then names
    /// reached through longer index terms that contain the query.
    pub fn suggestions(&self, query: &str, limit: usize) -> Vec<String> {
        let parsed = ParsedQuery::parse(query);
        if parsed.is_blank() || limit == 0 {
            return Vec::new();
        }

        let needle = parsed.lowered.as_str();
        let needle_len = needle.chars().count();

        let direct = self
            .nodes
            .iter()
            .map(|node| node.name.as_str())
            .filter(|name| name.to_lowercase().contains(needle));

        let indirect = self
            .index
            .iter()
            .filter(|(term, _)| term.contains(needle) && term.chars().count() > needle_len)
            .flat_map(|(term, postings)| {
                postings
                    .iter()
                    .map(move |&position| self.nodes[position].name.as_str())
                    .filter(move |name| name.to_lowercase().contains(term))
            });

        let mut seen: HashSet<&str> = HashSet::new();
        direct
            .chain(indirect)
            .filter(|name| seen.insert(*name))
            .take(limit)
            .map(str::to_string)
            .collect()
    }

    /// Resolve a node by id; the first node with a matching id wins
    pub fn get_node_by_id(&self, id: &str) -> Option<&Node> {
        self.index
            .position_of(id)
            .and_then(|position| self.nodes.get(position))
    }

    /// Current snapshot
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of distinct terms in the current index
    pub fn term_count(&self) -> usize {
        self.index.term_count()
    }
}
