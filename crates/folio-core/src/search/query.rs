//! Query normalization.

/// A non-blank search query.
///
/// Matching is plain case-insensitive substring containment, so the query is
/// never tokenized or interpreted as a pattern. Only surrounding whitespace
/// is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    trimmed: String,
    lowered: String,
}

impl SearchQuery {
    /// Normalize a raw query, returning `None` when it is empty or whitespace-only.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            trimmed: trimmed.to_string(),
            lowered: trimmed.to_lowercase(),
        })
    }

    /// The query with surrounding whitespace removed.
    pub fn as_str(&self) -> &str {
        &self.trimmed
    }

    /// The trimmed query in lower case.
    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    /// Whether `text` contains the query, ignoring case.
    pub fn matches(&self, text: &str) -> bool {
        contains_ignore_case(text, &self.lowered)
    }
}

/// Case-insensitive containment against an already lower-cased needle.
pub(crate) fn contains_ignore_case(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_queries() {
        assert_eq!(SearchQuery::parse(""), None);
        assert_eq!(SearchQuery::parse("   "), None);
        assert_eq!(SearchQuery::parse("\t\n"), None);
    }

    #[test]
    fn test_trim_keeps_inner_whitespace() {
        let query = SearchQuery::parse("  React  Native ").unwrap();
        assert_eq!(query.as_str(), "React  Native");
        assert_eq!(query.lowered(), "react  native");
    }

    #[test]
    fn test_special_characters_are_literal() {
        let query = SearchQuery::parse("c++").unwrap();
        assert!(query.matches("C++ CNN"));
        assert!(!query.matches("C"));

        let query = SearchQuery::parse(".*").unwrap();
        assert!(!query.matches("anything"));
        assert!(query.matches("glob .* pattern"));
    }

    #[test]
    fn test_case_insensitive() {
        let query = SearchQuery::parse("POSTGRES").unwrap();
        assert!(query.matches("PostgreSQL"));
    }
}
