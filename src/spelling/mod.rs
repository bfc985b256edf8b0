//! Spelling correction
//!
//! The [`Dictionary`] capability, its trie-backed implementation and the
//! paragraph-level correction pass.

pub mod levenshtein;
pub mod pass;
pub mod terms;

use crate::dictionary::Trie;

pub use levenshtein::damerau_levenshtein_distance;
pub use pass::{fix_spelling, Correction, SpellingResult};
pub use terms::TechnicalTerms;

/// Word lookup and correction used by the spelling pass.
pub trait Dictionary {
    /// Whether the word is known. Lookups are case-insensitive.
    fn is_known(&self, word: &str) -> bool;

    /// Best replacement for an unknown word, if any candidate is close enough.
    fn correct(&self, word: &str) -> Option<String>;

    /// Makes the given words known.
    fn add_terms(&mut self, terms: &[&str]);
}

/// A ranked correction candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellingSuggestion {
    pub word: String,
    pub distance: usize,
    pub frequency: u32,
}

/// Dictionary backed by a [`Trie`] word list.
pub struct TrieDictionary {
    trie: Trie,
    max_distance: usize,
    max_suggestions: usize,
}

impl TrieDictionary {
    pub fn new(trie: Trie) -> Self {
        Self {
            trie,
            max_distance: 2,
            max_suggestions: 5,
        }
    }

    pub fn with_max_distance(mut self, distance: usize) -> Self {
        self.max_distance = distance;
        self
    }

    pub fn with_max_suggestions(mut self, count: usize) -> Self {
        self.max_suggestions = count;
        self
    }

    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Candidates for an unknown word, best first.
    ///
    /// Ranked by transposition-aware distance, then frequency, then whether
    /// the first letter matches, then closeness in length.
    pub fn suggestions(&self, word: &str) -> Vec<SpellingSuggestion> {
        let word_lower = word.to_lowercase();
        if self.trie.contains(&word_lower) {
            return vec![];
        }

        // the trie search is plain Levenshtein, so a swap costs 2 there
        let mut suggestions: Vec<SpellingSuggestion> = self
            .trie
            .search_within_distance(&word_lower, self.max_distance)
            .into_iter()
            .map(|(candidate, info, _)| SpellingSuggestion {
                distance: damerau_levenshtein_distance(&word_lower, &candidate),
                word: candidate,
                frequency: info.frequency,
            })
            .collect();

        let input_len = word_lower.chars().count();
        let initial = word_lower.chars().next();
        suggestions.sort_by(|a, b| {
            let a_same_initial = a.word.chars().next() == initial;
            let b_same_initial = b.word.chars().next() == initial;
            let a_len_diff = input_len.abs_diff(a.word.chars().count());
            let b_len_diff = input_len.abs_diff(b.word.chars().count());
            a.distance
                .cmp(&b.distance)
                .then_with(|| b.frequency.cmp(&a.frequency))
                .then_with(|| b_same_initial.cmp(&a_same_initial))
                .then_with(|| a_len_diff.cmp(&b_len_diff))
                .then_with(|| a.word.cmp(&b.word))
        });
        suggestions.truncate(self.max_suggestions);
        suggestions
    }
}

impl Dictionary for TrieDictionary {
    fn is_known(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    fn correct(&self, word: &str) -> Option<String> {
        self.suggestions(word).into_iter().next().map(|s| s.word)
    }

    fn add_terms(&mut self, terms: &[&str]) {
        for term in terms {
            self.trie.insert_word(term);
        }
    }
}

/// Stand-in used when no word list is available: every word is known.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThroughDictionary;

impl Dictionary for PassThroughDictionary {
    fn is_known(&self, _word: &str) -> bool {
        true
    }

    fn correct(&self, _word: &str) -> Option<String> {
        None
    }

    fn add_terms(&mut self, _terms: &[&str]) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordInfo;

    fn dictionary() -> TrieDictionary {
        let mut trie = Trie::new();
        for (word, frequency) in [
            ("the", 5000),
            ("quick", 120),
            ("quack", 10),
            ("brown", 90),
            ("thick", 40),
            ("tea", 30),
            ("ten", 80),
        ] {
            trie.insert(word, WordInfo { frequency });
        }
        TrieDictionary::new(trie)
    }

    #[test]
    fn test_known_words_have_no_suggestions() {
        let dict = dictionary();
        assert!(dict.is_known("Quick"));
        assert!(dict.suggestions("quick").is_empty());
        assert_eq!(dict.correct("quick"), None);
    }

    #[test]
    fn test_closest_candidate_wins() {
        let dict = dictionary();
        assert_eq!(dict.correct("qick").as_deref(), Some("quick"));
        assert_eq!(dict.correct("brwon").as_deref(), Some("brown"));
    }

    #[test]
    fn test_transposition_beats_frequency_at_plain_distance() {
        // "teh" is one swap from "the", one substitution from "tea"/"ten"
        let dict = dictionary();
        let suggestions = dict.suggestions("teh");
        assert_eq!(suggestions[0].distance, 1);
        assert_eq!(suggestions[0].word, "the");
    }

    #[test]
    fn test_frequency_breaks_distance_ties() {
        let dict = dictionary();
        let words: Vec<String> = dict.suggestions("tek").into_iter().map(|s| s.word).collect();
        assert_eq!(words.first().map(String::as_str), Some("ten"));
    }

    #[test]
    fn test_suggestion_limit() {
        // tea and ten are one edit away, the is two
        assert_eq!(dictionary().suggestions("tek").len(), 3);
        let words: Vec<String> = dictionary()
            .with_max_suggestions(2)
            .suggestions("tek")
            .into_iter()
            .map(|s| s.word)
            .collect();
        assert_eq!(words, vec!["ten", "tea"]);
    }

    #[test]
    fn test_nothing_close_enough() {
        let dict = dictionary().with_max_distance(1);
        assert_eq!(dict.correct("zzzzzz"), None);
    }

    #[test]
    fn test_add_terms() {
        let mut dict = dictionary();
        assert!(!dict.is_known("pangram"));
        dict.add_terms(&["pangram"]);
        assert!(dict.is_known("pangram"));
    }

    #[test]
    fn test_pass_through() {
        let dict = PassThroughDictionary;
        assert!(dict.is_known("asdfgh"));
        assert_eq!(dict.correct("asdfgh"), None);
    }
}
