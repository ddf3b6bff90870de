use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Maximum number of keywords kept in the density ranking
pub const TOP_KEYWORDS: usize = 20;

// Common English words excluded from the keyword ranking (they still count
// toward the total word count)
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did",
        "will", "would", "could", "should", "may", "might", "must", "can", "this", "that",
        "these", "those", "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us",
        "them", "my", "your", "his", "its", "our", "their", "mine", "yours", "hers", "ours",
        "theirs",
    ]
    .into_iter()
    .collect()
});

#[derive(Debug, Clone, Default)]
pub struct KeywordStats {
    /// Total token count, stopwords included
    pub word_count: usize,
    /// Top keywords descending by count; ties keep first-seen order
    pub keyword_density: IndexMap<String, usize>,
}

/// Tokenizes the page text into lower-cased alphanumeric runs and ranks the
/// most frequent non-trivial words.
pub fn analyze(text: &str) -> KeywordStats {
    let mut word_count = 0usize;
    let mut frequencies: IndexMap<String, usize> = IndexMap::new();

    for token in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
    {
        let token = token.to_lowercase();
        word_count += 1;
        *frequencies.entry(token).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = frequencies
        .into_iter()
        .filter(|(word, _)| word.chars().count() > 2 && !STOP_WORDS.contains(word.as_str()))
        .collect();

    // Stable sort keeps the first-seen order for equal counts
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(TOP_KEYWORDS);

    KeywordStats {
        word_count,
        keyword_density: ranked.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_includes_stopwords() {
        let stats = analyze("the quick brown fox jumps over the lazy dog");
        assert_eq!(stats.word_count, 9);
        assert!(!stats.keyword_density.contains_key("the"));
        assert_eq!(stats.keyword_density.get("quick"), Some(&1));
    }

    #[test]
    fn test_short_tokens_dropped_from_ranking() {
        let stats = analyze("go go go rust rust ai");
        assert_eq!(stats.word_count, 6);
        assert!(!stats.keyword_density.contains_key("go"));
        assert!(!stats.keyword_density.contains_key("ai"));
        assert_eq!(stats.keyword_density.get("rust"), Some(&2));
    }

    #[test]
    fn test_stable_tie_order() {
        let stats = analyze("apple banana apple banana cherry cherry");
        let keys: Vec<_> = stats.keyword_density.keys().cloned().collect();
        assert_eq!(keys, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_ranking_capped_at_twenty() {
        let text = (0..40)
            .map(|i| format!("keyword{}", i))
            .collect::<Vec<_>>()
            .join(" ");
        let stats = analyze(&text);
        assert_eq!(stats.word_count, 40);
        assert_eq!(stats.keyword_density.len(), TOP_KEYWORDS);
    }

    #[test]
    fn test_descending_order() {
        let stats = analyze("alpha beta beta gamma gamma gamma");
        let counts: Vec<_> = stats.keyword_density.values().cloned().collect();
        assert_eq!(counts, vec![3, 2, 1]);
    }
}
