//! Substring Term Matching
//!
//! Two terms match when either one contains the other. This tolerates
//! partial words, compound terms and CJK runs that carry no word
//! boundaries. Index lookup and scoring share this test.

/// Classification of a term match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Terms are identical
    Exact,
    /// One term is a proper substring of the other
    Partial,
}

/// Symmetric containment test between a query term and a field term
pub fn match_terms(query_term: &str, field_term: &str) -> Option<MatchType> {
    if field_term == query_term {
        Some(MatchType::Exact)
    } else if field_term.contains(query_term) || query_term.contains(field_term) {
        Some(MatchType::Partial)
    } else {
        None
    }
}

/// True when the terms match in either direction
pub fn terms_overlap(query_term: &str, field_term: &str) -> bool {
    match_terms(query_term, field_term).is_some()
}
