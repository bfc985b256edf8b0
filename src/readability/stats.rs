//! Paragraph statistics: counts, word frequencies and readability.

use std::collections::{HashMap, HashSet};

use crate::error::Result;
use crate::text::Tokenizer;

use super::fog::{content_words, fog_from_counts, FogReport};

/// Full statistics for one paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAnalysis {
    pub num_sentences: usize,
    pub num_words: usize,
    pub num_unique_words: usize,
    pub avg_words_per_sentence: f64,
    /// Most frequent non-stopwords, highest count first.
    pub most_common_words: Vec<(String, usize)>,
    /// Every non-stopword with its count, in order of first occurrence.
    pub word_frequency: Vec<(String, usize)>,
    pub readability: FogReport,
}

pub fn analyze_text(
    text: &str,
    tokenizer: &dyn Tokenizer,
    stopwords: &HashSet<&str>,
    top_n: usize,
) -> Result<TextAnalysis> {
    let num_sentences = tokenizer.tokenize_sentences(text).len();
    let words = content_words(text, tokenizer);
    let readability = fog_from_counts(num_sentences, &words)?;

    let num_unique_words = words.iter().collect::<HashSet<_>>().len();
    let word_frequency = frequencies(words.iter().filter(|w| !stopwords.contains(w.as_str())));
    let most_common_words = most_common(&word_frequency, top_n);

    Ok(TextAnalysis {
        num_sentences,
        num_words: words.len(),
        num_unique_words,
        avg_words_per_sentence: words.len() as f64 / num_sentences as f64,
        most_common_words,
        word_frequency,
        readability,
    })
}

/// Counts words keeping first-occurrence order.
fn frequencies<'a>(words: impl Iterator<Item = &'a String>) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for word in words {
        match index.get(word.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word.as_str(), counts.len());
                counts.push((word.clone(), 1));
            }
        }
    }
    counts
}

fn most_common(counts: &[(String, usize)], n: usize) -> Vec<(String, usize)> {
    let mut ranked = counts.to_vec();
    // stable sort keeps first-occurrence order among ties
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{stopwords, UnicodeTokenizer};

    #[test]
    fn test_counts() {
        let text = "The cat sat on the mat. The cat slept.";
        let analysis = analyze_text(text, &UnicodeTokenizer, stopwords::english(), 5).unwrap();
        assert_eq!(analysis.num_sentences, 2);
        assert_eq!(analysis.num_words, 9);
        // the, cat, sat, on, mat, slept
        assert_eq!(analysis.num_unique_words, 6);
        assert!((analysis.avg_words_per_sentence - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_most_common_excludes_stopwords_and_keeps_tie_order() {
        let text = "Data drives data science. Science needs data and models.";
        let analysis = analyze_text(text, &UnicodeTokenizer, stopwords::english(), 3).unwrap();
        assert_eq!(
            analysis.most_common_words,
            vec![
                ("data".to_string(), 3),
                ("science".to_string(), 2),
                ("drives".to_string(), 1),
            ]
        );
        assert!(analysis.word_frequency.iter().all(|(w, _)| w != "and"));
    }

    #[test]
    fn test_empty_paragraph_fails() {
        assert!(analyze_text("", &UnicodeTokenizer, stopwords::english(), 5).is_err());
    }
}
