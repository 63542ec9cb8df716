//! Input Sanitization
//!
//! Presence checks applied at the boundary before word pairs are stored.

use std::collections::HashSet;

use crate::types::WordPair;

/// Trim surrounding whitespace; `None` when nothing is left
pub fn clean_term(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Number of distinct translation strings in the pool
///
/// Below [`crate::OPTIONS_PER_QUESTION`] the generator yields short option lists.
pub fn distinct_translations(pool: &[WordPair]) -> usize {
    pool.iter()
        .map(|p| p.translation.as_str())
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_term_trims() {
        assert_eq!(clean_term("  merhaba "), Some("merhaba".to_string()));
        assert_eq!(clean_term("good morning"), Some("good morning".to_string()));
    }

    #[test]
    fn test_clean_term_rejects_blank() {
        assert_eq!(clean_term(""), None);
        assert_eq!(clean_term("   \t\n"), None);
    }

    #[test]
    fn test_distinct_translations() {
        let pool = vec![
            WordPair::new("1", "su", "water"),
            WordPair::new("2", "ekmek", "bread"),
            WordPair::new("3", "nan", "bread"),
        ];
        assert_eq!(distinct_translations(&pool), 2);
        assert_eq!(distinct_translations(&[]), 0);
    }
}
