//! Ranking & Scoring System
//!
//! Field-weighted substring scoring. Every (query term, field term) pair
//! that matches adds the weight of its field group; there is no cap and no
//! early exit, so repeated relevant terms accumulate.

use super::fuzzy::{match_terms, MatchType};
use super::parser::tokenize;
use crate::graph::Node;

/// Weights for one field group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldWeights {
    /// Field term equals query term
    pub exact: f64,
    /// One term contains the other
    pub partial: f64,
}

impl FieldWeights {
    fn weight(&self, match_type: MatchType) -> f64 {
        match match_type {
            MatchType::Exact => self.exact,
            MatchType::Partial => self.partial,
        }
    }
}

/// Scoring weights per field group
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringWeights {
    pub name: FieldWeights,
    pub description: FieldWeights,
    /// Applied to each string-typed attribute value
    pub attribute: FieldWeights,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            name: FieldWeights { exact: 10.0, partial: 5.0 },
            description: FieldWeights { exact: 3.0, partial: 1.0 },
            attribute: FieldWeights { exact: 2.0, partial: 0.5 },
        }
    }
}

/// Score of one node against one query, broken down by field group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchScore {
    pub name_score: f64,
    pub description_score: f64,
    pub attribute_score: f64,
    /// Sum of the field scores
    pub final_score: f64,
    /// Distinct query terms that matched at least one field term
    pub matched_terms: Vec<String>,
}

impl MatchScore {
    pub fn is_match(&self) -> bool {
        self.final_score > 0.0
    }
}

/// Accumulate matches between query terms and one field's terms
fn score_field(
    query_terms: &[String],
    field_terms: &[String],
    weights: &FieldWeights,
    matched: &mut [bool],
) -> f64 {
    let mut score = 0.0;

    for (i, query_term) in query_terms.iter().enumerate() {
        for field_term in field_terms {
            if let Some(match_type) = match_terms(query_term, field_term) {
                score += weights.weight(match_type);
                matched[i] = true;
            }
        }
    }

    score
}

/// Score a node against already-tokenized query terms
pub fn score_node(node: &Node, query_terms: &[String], weights: &ScoringWeights) -> MatchScore {
    let mut matched = vec![false; query_terms.len()];

    let name_score = score_field(query_terms, &tokenize(&node.name), &weights.name, &mut matched);

    let description_score = score_field(
        query_terms,
        &tokenize(&node.description),
        &weights.description,
        &mut matched,
    );

    let attribute_score = node
        .text_attributes()
        .map(|value| score_field(query_terms, &tokenize(value), &weights.attribute, &mut matched))
        .sum::<f64>();

    let mut matched_terms: Vec<String> = Vec::new();
    for (term, hit) in query_terms.iter().zip(&matched) {
        if *hit && !matched_terms.contains(term) {
            matched_terms.push(term.clone());
        }
    }

    MatchScore {
        name_score,
        description_score,
        attribute_score,
        final_score: name_score + description_score + attribute_score,
        matched_terms,
    }
}
