//! Tokenizer & Query Parser
//!
//! Normalizes text into index terms. The same tokenizer is applied to
//! node fields at index time and to queries at search time.

/// Whether a character survives tokenization: ASCII word characters and
/// CJK Unified Ideographs. Everything else acts as a separator.
fn is_term_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ('\u{4E00}'..='\u{9FFF}').contains(&ch)
}

/// Split text into lower-cased terms, left to right, duplicates kept
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|ch| if is_term_char(ch) { ch } else { ' ' })
        .collect();

    normalized
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Parsed and processed search query
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    /// Original unmodified query
    pub original: String,
    /// Lower-cased query, untokenized (suggestions match against this)
    pub lowered: String,
    /// Query terms in order of appearance
    pub terms: Vec<String>,
}

impl ParsedQuery {
    pub fn parse(query: &str) -> Self {
        Self {
            original: query.to_string(),
            lowered: query.to_lowercase(),
            terms: tokenize(query),
        }
    }

    /// Empty or whitespace-only query
    pub fn is_blank(&self) -> bool {
        self.original.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenize() {
        assert_eq!(tokenize("Alice Smith"), vec!["alice", "smith"]);
    }

    #[test]
    fn test_punctuation_becomes_separator() {
        assert_eq!(
            tokenize("Shanghai Trading Co., Ltd."),
            vec!["shanghai", "trading", "co", "ltd"]
        );
        assert_eq!(tokenize("alice@example.com"), vec!["alice", "example", "com"]);
    }

    #[test]
    fn test_underscore_and_digits_kept() {
        assert_eq!(tokenize("node_42 v2.0"), vec!["node_42", "v2", "0"]);
    }

    #[test]
    fn test_cjk_preserved() {
        assert_eq!(tokenize("上海贸易公司"), vec!["上海贸易公司"]);
        assert_eq!(tokenize("项目管理, 团队协作"), vec!["项目管理", "团队协作"]);
    }

    #[test]
    fn test_non_ascii_letters_split() {
        // Only ASCII word chars and the CJK block count as term characters
        assert_eq!(tokenize("café"), vec!["caf"]);
        assert_eq!(tokenize("100km²"), vec!["100km"]);
    }

    #[test]
    fn test_duplicates_and_order_kept() {
        assert_eq!(tokenize("b a b"), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
        assert!(tokenize("!!! ---").is_empty());
    }

    #[test]
    fn test_parsed_query() {
        let parsed = ParsedQuery::parse("Shang Hai");
        assert_eq!(parsed.original, "Shang Hai");
        assert_eq!(parsed.lowered, "shang hai");
        assert_eq!(parsed.terms, vec!["shang", "hai"]);
        assert!(!parsed.is_blank());
    }

    #[test]
    fn test_blank_query() {
        assert!(ParsedQuery::parse("").is_blank());
        assert!(ParsedQuery::parse("   ").is_blank());
        // Punctuation-only is not blank, it just yields no terms
        let parsed = ParsedQuery::parse("?!");
        assert!(!parsed.is_blank());
        assert!(parsed.terms.is_empty());
    }
}
