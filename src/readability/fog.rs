//! Gunning Fog readability index.
//!
//! `0.4 * (words / sentences + 100 * complex_words / words)`, an estimate of
//! the years of formal education needed to follow the text on first reading.

use crate::error::{AnalyzerError, Result};
use crate::text::{is_punctuation, Tokenizer};

use super::syllables::count_complex_words;

/// Readability figures for one block of text.
#[derive(Debug, Clone, PartialEq)]
pub struct FogReport {
    pub gunning_fog_index: f64,
    pub avg_sentence_length: f64,
    pub percent_complex_words: f64,
    pub complex_word_count: usize,
}

impl FogReport {
    /// Index rounded to whole years of education, halves to even.
    pub fn years_of_education(&self) -> i64 {
        self.gunning_fog_index.round_ties_even() as i64
    }
}

/// Lower-cased word tokens with punctuation removed.
pub fn content_words(text: &str, tokenizer: &dyn Tokenizer) -> Vec<String> {
    tokenizer
        .tokenize_words(text)
        .into_iter()
        .filter(|t| !is_punctuation(t))
        .map(str::to_lowercase)
        .collect()
}

#[tracing::instrument(level = "debug", skip_all, fields(text_len = text.len()))]
pub fn calculate_gunning_fog(text: &str, tokenizer: &dyn Tokenizer) -> Result<FogReport> {
    let sentences = tokenizer.tokenize_sentences(text).len();
    let words = content_words(text, tokenizer);
    fog_from_counts(sentences, &words)
}

/// Computes the report from an already tokenized text.
pub(crate) fn fog_from_counts(sentences: usize, words: &[String]) -> Result<FogReport> {
    if sentences == 0 || words.is_empty() {
        return Err(AnalyzerError::EmptyText);
    }

    let word_count = words.len() as f64;
    let avg_sentence_length = word_count / sentences as f64;
    let complex_word_count = count_complex_words(words);
    let percent_complex_words = complex_word_count as f64 / word_count * 100.0;
    let gunning_fog_index = 0.4 * (avg_sentence_length + percent_complex_words);

    Ok(FogReport {
        gunning_fog_index,
        avg_sentence_length,
        percent_complex_words,
        complex_word_count,
    })
}
