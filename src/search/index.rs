//! Inverted Index
//!
//! Maps each term to the set of node positions whose name, description or
//! string attributes produced it. Built wholesale from a snapshot and never
//! mutated afterwards.

use super::fuzzy::terms_overlap;
use super::parser::tokenize;
use crate::graph::Node;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

/// Postings for one term: positions into the snapshot's node list
pub type Postings = BTreeSet<usize>;

#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    terms: BTreeMap<String, Postings>,
    by_id: HashMap<String, usize>,
}

impl SearchIndex {
    /// Build the index for a snapshot
    pub fn build(nodes: &[Node]) -> Self {
        let mut terms: BTreeMap<String, Postings> = BTreeMap::new();
        let mut by_id = HashMap::with_capacity(nodes.len());

        for (position, node) in nodes.iter().enumerate() {
            by_id.entry(node.id.clone()).or_insert(position);

            let fields = [node.name.as_str(), node.description.as_str()]
                .into_iter()
                .chain(node.text_attributes());

            for field in fields {
                for term in tokenize(field) {
                    terms.entry(term).or_default().insert(position);
                }
            }
        }

        debug!(
            "Built search index: {} nodes, {} terms",
            nodes.len(),
            terms.len()
        );

        Self { terms, by_id }
    }

    /// Number of distinct terms
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Postings for an exact term
    pub fn postings(&self, term: &str) -> Option<&Postings> {
        self.terms.get(term)
    }

    /// All terms with their postings, in lexicographic term order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Postings)> {
        self.terms.iter().map(|(term, postings)| (term.as_str(), postings))
    }

    /// Position of the first node carrying this id
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Node positions reachable from any index term overlapping a query term,
    /// ordered by position in the snapshot
    pub fn candidates(&self, query_terms: &[String]) -> Postings {
        let mut candidates = Postings::new();

        for query_term in query_terms {
            for (index_term, postings) in &self.terms {
                if terms_overlap(query_term, index_term) {
                    candidates.extend(postings.iter().copied());
                }
            }
        }

        candidates
    }
}
